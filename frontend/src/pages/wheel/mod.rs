mod wheel_canvas;

pub use wheel_canvas::WheelCanvas;

use shared::prize::format_value;
use shared::spin_wheel::WheelLayout;
use shared::spin_strip::DeviceClass;
use shared::{SpinGeometry, SpinVariant};
use yew::prelude::*;

use crate::components::{ResultModal, SpinButton};
use crate::config::ViewConfig;
use crate::hooks::use_spin_session;
use crate::pages::{dismiss_and_refresh, load_candidates, request_spin};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub view: ViewConfig,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let controller = use_spin_session(SpinGeometry::Wheel(WheelLayout::default()), Callback::noop());
    let requesting = use_state(|| false);
    let price = use_state(|| None::<f64>);

    {
        let controller = controller.clone();
        let price = price.clone();
        use_effect_with((), move |_| {
            load_candidates(SpinVariant::Wheel, controller, price);
            || ()
        });
    }

    let on_spin = {
        let controller = controller.clone();
        let requesting = requesting.clone();
        Callback::from(move |_: MouseEvent| {
            request_spin(SpinVariant::Wheel, controller.clone(), requesting.clone());
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let price = price.clone();
        Callback::from(move |_: ()| dismiss_and_refresh(SpinVariant::Wheel, &controller, price.clone()))
    };

    let session = controller.session();
    let segments = session.candidates().to_vec();
    let rotation = session.display_offset();
    let revealed = session.revealed_result().cloned();
    let is_spinning = session.is_animating() || *requesting;
    drop(session);

    let label = match *price {
        Some(price) => format!("Spin for {}", format_value(price)),
        None => "Spin".to_string(),
    };
    let has_segments = !segments.is_empty();

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TEXT_H1}>{ "Wheel" }</h1>
            <div class={styles::CARD}>
                <WheelCanvas
                    segments={segments}
                    rotation={rotation}
                    is_spinning={is_spinning}
                    compact={props.view.device == DeviceClass::Mobile}
                />
            </div>
            <div class="mt-6">
                <SpinButton is_spinning={is_spinning} enabled={has_segments} label={label} onclick={on_spin} />
            </div>
            if let Some(item) = revealed {
                <ResultModal item={item} on_dismiss={on_dismiss} />
            }
        </div>
    }
}
