pub mod roulette;
pub mod upgrade;
pub mod wheel;

use shared::spin_api::into_prize_items;
use shared::{DismissOutcome, SpinVariant};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::notify;
use crate::hooks::{dispatch_balance_event, SpinController};

/// Fetches the candidate list for `variant` and hands it to the session.
pub(crate) fn load_candidates(variant: SpinVariant, controller: SpinController, price: UseStateHandle<Option<f64>>) {
    spawn_local(async move {
        match api::fetch_gifts(variant).await {
            Ok(list) => {
                log::debug!("{:?}: loaded {} candidates", variant, list.gifts.len());
                price.set(list.price);
                controller.set_candidates(into_prize_items(list.gifts));
            }
            Err(err) => {
                log::warn!("{:?}: failed to load candidates [{}]: {}", variant, err.code(), err);
            }
        }
    });
}

/// Asks the backend for a strip or wheel spin and starts the animation on success.
pub(crate) fn request_spin(variant: SpinVariant, controller: SpinController, requesting: UseStateHandle<bool>) {
    if *requesting || !controller.can_spin() {
        log::debug!("{:?}: spin ignored, one is already in flight", variant);
        return;
    }
    requesting.set(true);

    spawn_local(async move {
        let reply = api::spin(variant).await;
        requesting.set(false);

        // Failures are logged by the session, which stays idle for the next try.
        match controller.begin_from_response(reply) {
            Ok(started) => {
                if let (true, Some(balance)) = (variant.deducts_on_start(), started.balance) {
                    dispatch_balance_event(balance);
                }
            }
            Err(err) => notify(err.user_message()),
        }
    });
}

/// Resets the surface after the result modal closes, refetching if the variant wants it.
pub(crate) fn dismiss_and_refresh(variant: SpinVariant, controller: &SpinController, price: UseStateHandle<Option<f64>>) {
    if let DismissOutcome::Reset { refetch_candidates: true } = controller.dismiss() {
        load_candidates(variant, controller.clone(), price);
    }
}
