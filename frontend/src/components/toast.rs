use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;

use crate::styles;

pub const NOTIFICATION_EVENT: &str = "notification";
const TOAST_VISIBLE_MS: u32 = 3000;

pub fn notify(message: &str) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(message));
        if let Ok(event) = CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let notification = use_state(|| None::<String>);
    let hide = use_mut_ref(|| None::<Timeout>);

    {
        let notification = notification.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(message) = event
                        .dyn_ref::<CustomEvent>()
                        .and_then(|e| e.detail().as_string())
                    else {
                        return;
                    };
                    notification.set(Some(message));

                    let notification = notification.clone();
                    *hide.borrow_mut() = Some(Timeout::new(TOAST_VISIBLE_MS, move || {
                        notification.set(None);
                    }));
                })
            });
            move || drop(listener)
        });
    }

    match &*notification {
        Some(message) => html! { <div class={styles::TOAST}>{message}</div> },
        None => html! {},
    }
}
