use shared::prize::format_value;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Icon, IconView, ToastHost};
use crate::config::ViewConfig;
use crate::hooks::use_balance;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub view: ViewConfig,
    pub children: Html,
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    icon: Icon,
    label: &'static str,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let current = use_route::<Route>();
    let active = current.as_ref() == Some(&props.to);
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(styles::NAV_LINK, active.then_some("text-blue-400"))}>
            <IconView icon={props.icon} class="w-4 h-4" />
            { props.label }
        </Link<Route>>
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let balance = use_balance();

    html! {
        <div class={styles::CONTAINER}>
            <nav class={classes!(styles::NAV, props.view.fullscreen.then_some("pt-8"))}>
                <div class={styles::NAV_INNER}>
                    <div class="flex items-center">
                        <NavItem to={Route::Roulette} icon={Icon::Roulette} label="Roulette" />
                        <NavItem to={Route::Wheel} icon={Icon::Wheel} label="Wheel" />
                        <NavItem to={Route::Upgrade} icon={Icon::Upgrade} label="Upgrade" />
                    </div>
                    <div class={styles::BALANCE_PILL}>
                        <IconView icon={Icon::Ton} class="w-4 h-4 text-blue-400" />
                        { format_value(*balance) }
                    </div>
                </div>
            </nav>
            <main class={props.view.top_padding_class()}>{ props.children.clone() }</main>
            <ToastHost />
        </div>
    }
}
