use shared::prize::format_value;
use shared::spin_strip::StripLayout;
use shared::{SpinGeometry, SpinVariant};
use yew::prelude::*;

use crate::components::{IconView, Icon, PrizeMedia, ResultModal, SpinButton};
use crate::config::ViewConfig;
use crate::hooks::use_spin_session;
use crate::pages::{dismiss_and_refresh, load_candidates, request_spin};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RouletteProps {
    pub view: ViewConfig,
}

#[function_component(Roulette)]
pub fn roulette(props: &RouletteProps) -> Html {
    let layout = StripLayout::for_device(props.view.device);
    let controller = use_spin_session(SpinGeometry::Strip(layout), Callback::noop());
    let requesting = use_state(|| false);
    let price = use_state(|| None::<f64>);

    {
        let controller = controller.clone();
        use_effect_with(layout, move |layout| {
            controller.set_geometry(SpinGeometry::Strip(*layout));
            || ()
        });
    }

    {
        let controller = controller.clone();
        let price = price.clone();
        use_effect_with((), move |_| {
            load_candidates(SpinVariant::Strip, controller, price);
            || ()
        });
    }

    let on_spin = {
        let controller = controller.clone();
        let requesting = requesting.clone();
        Callback::from(move |_: MouseEvent| {
            request_spin(SpinVariant::Strip, controller.clone(), requesting.clone());
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let price = price.clone();
        Callback::from(move |_: ()| dismiss_and_refresh(SpinVariant::Strip, &controller, price.clone()))
    };

    let session = controller.session();
    let tiles = session.tiled_strip();
    let revealed = session.revealed_result().cloned();
    let is_spinning = session.is_animating() || *requesting;
    let translate = session.display_offset();
    let has_candidates = !session.candidates().is_empty();
    drop(session);

    let label = match *price {
        Some(price) => format!("Spin for {}", format_value(price)),
        None => "Spin".to_string(),
    };

    // Untranslated, the strip's left edge sits under the centred pointer.
    let strip_style = format!("margin-left: 50%; transform: translateX({}px);", translate);
    // Half the gap on each side keeps slot i centred at (i + 0.5) * (width + gap).
    let slot_style = format!(
        "width: {}px; margin: 0 {}px; flex: 0 0 auto;",
        layout.item_width,
        layout.item_gap / 2.0
    );

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TEXT_H1}>{ "Roulette" }</h1>
            <div class={styles::CARD}>
                if has_candidates {
                    <div class="relative overflow-hidden">
                        <div class="absolute left-1/2 -translate-x-1/2 top-0 bottom-0 w-0.5 bg-yellow-400 z-10" />
                        <div class="flex" style={strip_style}>
                            {
                                for tiles.iter().map(|item| html! {
                                    <div style={slot_style.clone()} class="flex flex-col items-center gap-1 py-3 rounded-xl bg-gray-800">
                                        <PrizeMedia item={item.clone()} class="w-16 h-16" />
                                        <span class="text-xs truncate max-w-full">{ item.title() }</span>
                                        <span class="flex items-center gap-0.5 text-xs text-blue-300">
                                            <IconView icon={Icon::Ton} class="w-3 h-3" />
                                            { format_value(item.value) }
                                        </span>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                } else {
                    <div class="flex items-center justify-center h-32 text-gray-500">{ "No gifts available right now" }</div>
                }
            </div>
            <div class="mt-6">
                <SpinButton is_spinning={is_spinning} enabled={has_candidates} label={label} onclick={on_spin} />
            </div>
            if let Some(item) = revealed {
                <ResultModal item={item} on_dismiss={on_dismiss} />
            }
        </div>
    }
}
