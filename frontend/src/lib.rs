pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::config::ViewConfig;
use crate::pages::{roulette::Roulette, upgrade::Upgrade, wheel::Wheel};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Roulette,
    #[at("/wheel")]
    Wheel,
    #[at("/upgrade")]
    Upgrade,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, view: ViewConfig) -> Html {
    match route {
        Route::Roulette | Route::NotFound => html! { <Roulette {view} /> },
        Route::Wheel => html! { <Wheel {view} /> },
        Route::Upgrade => html! { <Upgrade {view} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Read once at startup and passed down; pages never query it themselves.
    let view = use_state(ViewConfig::detect);
    let view = *view;

    html! {
        <BrowserRouter>
            <Base {view}>
                <Switch<Route> render={move |route: Route| switch(route, view)} />
            </Base>
        </BrowserRouter>
    }
}
