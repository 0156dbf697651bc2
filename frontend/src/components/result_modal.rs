use shared::prize::format_value;
use shared::PrizeItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::icon::{Icon, IconView};
use crate::components::prize_media::PrizeMedia;
use crate::components::toast::notify;
use crate::hooks::dispatch_balance_event;
use crate::styles;

#[derive(Clone, Copy, PartialEq)]
enum GiftAction {
    Sell,
    Withdraw,
}

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub item: PrizeItem,
    /// Closes the modal and resets the spin surface.
    pub on_dismiss: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let busy = use_state(|| false);

    // Sell/withdraw only exist for gifts the backend actually handed over.
    let actionable = props.item.win_flag && props.item.identifier.is_some();

    let run_action = {
        let busy = busy.clone();
        let gift_id = props.item.identifier.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |action: GiftAction| {
            let Some(gift_id) = gift_id.clone() else {
                return;
            };
            if *busy {
                return;
            }
            busy.set(true);

            let busy = busy.clone();
            let on_dismiss = on_dismiss.clone();
            spawn_local(async move {
                let result = match action {
                    GiftAction::Sell => api::sell_gift(&gift_id).await,
                    GiftAction::Withdraw => api::withdraw_gift(&gift_id).await,
                };
                busy.set(false);
                match result {
                    Ok(balance) => {
                        if let Some(balance) = balance {
                            dispatch_balance_event(balance);
                        }
                        on_dismiss.emit(());
                    }
                    Err(err) => {
                        log::warn!("Gift action failed [{}]: {}", err.code(), err);
                        notify(err.action_message());
                    }
                }
            });
        })
    };

    let play_again = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let sell = run_action.reform(|_: MouseEvent| GiftAction::Sell);
    let withdraw = run_action.reform(|_: MouseEvent| GiftAction::Withdraw);

    let action_class = if *busy { styles::BUTTON_DISABLED } else { styles::BUTTON_SECONDARY };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL}>
                <h2 class="text-xl font-bold">
                    { if props.item.win_flag { "You won!" } else { "Result" } }
                </h2>
                <div class="flex justify-center">
                    <PrizeMedia item={props.item.clone()} class="w-32 h-32" />
                </div>
                <p class="text-lg font-semibold">{ props.item.title() }</p>
                {
                    for props.item.attribute_lines().into_iter().map(|line| html! {
                        <p class={styles::TEXT_SMALL}>{ line }</p>
                    })
                }
                <p class="flex items-center justify-center gap-1 text-blue-300 font-semibold">
                    <IconView icon={Icon::Ton} class="w-4 h-4" />
                    { format_value(props.item.value) }
                </p>
                <div class="grid gap-2">
                    <button class={styles::BUTTON_PRIMARY} onclick={play_again}>{ "Play again" }</button>
                    if actionable {
                        <div class="grid grid-cols-2 gap-2">
                            <button class={action_class} disabled={*busy} onclick={sell}>
                                <IconView icon={Icon::Sell} class="w-4 h-4 mr-1" />
                                { format!("Sell for {}", format_value(props.item.value)) }
                            </button>
                            <button class={action_class} disabled={*busy} onclick={withdraw}>
                                <IconView icon={Icon::Withdraw} class="w-4 h-4 mr-1" />
                                { "Withdraw" }
                            </button>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
