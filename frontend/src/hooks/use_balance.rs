use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;

pub const BALANCE_UPDATE_EVENT: &str = "balanceUpdate";
const BALANCE_KEY: &str = "balance";

fn stored_balance() -> f64 {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(BALANCE_KEY).ok().flatten())
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Publishes the backend's latest balance to every listener and to local storage.
pub fn dispatch_balance_event(balance: f64) {
    let Some(window) = window() else {
        return;
    };
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item(BALANCE_KEY, &balance.to_string());
    }
    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_f64(balance));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(BALANCE_UPDATE_EVENT, &event_init) {
        let _ = window.dispatch_event(&event);
    }
}

#[hook]
pub fn use_balance() -> UseStateHandle<f64> {
    let balance = use_state(stored_balance);

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, BALANCE_UPDATE_EVENT, move |event: &Event| {
                    if let Some(detail) = event
                        .dyn_ref::<CustomEvent>()
                        .and_then(|e| e.detail().as_f64())
                    {
                        balance.set(detail);
                    }
                })
            });
            move || drop(listener)
        });
    }

    balance
}
