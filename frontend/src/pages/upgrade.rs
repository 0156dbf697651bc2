use std::cell::RefCell;
use std::rc::Rc;

use shared::prize::{format_value, total_value};
use shared::spin_api::{into_prize_items, UpgradeRequest};
use shared::spin_strip::DeviceClass;
use shared::spin_upgrade::{pick_upgrade_target, potential_reward, upgrade_segments, Multiplier};
use shared::spin_wheel::WheelLayout;
use shared::{PrizeItem, SpinError, SpinGeometry, SpinVariant};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{notify, PrizeMedia, ResultModal, SpinButton};
use crate::config::ViewConfig;
use crate::hooks::{dispatch_balance_event, use_spin_session, SpinController};
use crate::pages::wheel::WheelCanvas;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct UpgradeProps {
    pub view: ViewConfig,
}

fn geometry(multiplier: Multiplier) -> SpinGeometry {
    SpinGeometry::Upgrade {
        layout: WheelLayout::default(),
        multiplier,
    }
}

fn load_gift_lists(inventory: UseStateHandle<Vec<PrizeItem>>, targets: UseStateHandle<Vec<PrizeItem>>) {
    spawn_local(async move {
        match api::fetch_inventory().await {
            Ok(list) => inventory.set(into_prize_items(list.gifts)),
            Err(err) => log::warn!("Failed to load inventory [{}]: {}", err.code(), err),
        }
        match api::fetch_gifts(SpinVariant::Upgrade).await {
            Ok(list) => targets.set(into_prize_items(list.gifts)),
            Err(err) => log::warn!("Failed to load upgrade targets [{}]: {}", err.code(), err),
        }
    });
}

fn request_upgrade(
    controller: SpinController,
    requesting: UseStateHandle<bool>,
    pending_balance: Rc<RefCell<Option<f64>>>,
    request: UpgradeRequest,
    segments: Vec<PrizeItem>,
) {
    requesting.set(true);
    spawn_local(async move {
        let reply = api::upgrade(&request)
            .await
            .map(|response| response.into_outcome(segments));
        requesting.set(false);

        // The wheel is re-keyed to `request.multiplier`, whatever the picker shows now.
        match controller.begin_upgrade(request.multiplier, reply) {
            Ok(started) => *pending_balance.borrow_mut() = started.balance,
            Err(err) => notify(err.user_message()),
        }
    });
}

#[function_component(Upgrade)]
pub fn upgrade(props: &UpgradeProps) -> Html {
    let inventory = use_state(Vec::<PrizeItem>::new);
    let targets = use_state(Vec::<PrizeItem>::new);
    let stake_index = use_state(|| None::<usize>);
    let multiplier = use_state(Multiplier::default);
    let requesting = use_state(|| false);
    let pending_balance = use_mut_ref(|| None::<f64>);

    // The balance only moves once the outcome is on screen.
    let on_reveal = {
        let pending_balance = pending_balance.clone();
        Callback::from(move |_: PrizeItem| {
            if let Some(balance) = pending_balance.borrow_mut().take() {
                dispatch_balance_event(balance);
            }
        })
    };
    let controller = use_spin_session(geometry(*multiplier), on_reveal);

    {
        let inventory = inventory.clone();
        let targets = targets.clone();
        use_effect_with((), move |_| {
            load_gift_lists(inventory, targets);
            || ()
        });
    }

    let stake = stake_index.and_then(|i| inventory.get(i).cloned());
    let target = stake
        .as_ref()
        .and_then(|stake| pick_upgrade_target(&targets, stake.value, *multiplier).cloned());
    let preview = match (&stake, &target) {
        (Some(stake), Some(target)) => upgrade_segments(target, stake, *multiplier),
        _ => Vec::new(),
    };

    {
        let controller = controller.clone();
        let preview = preview.clone();
        // Preview only while nothing is pending, spinning or on screen.
        use_effect_with((*multiplier, preview, *requesting), move |(multiplier, preview, requesting)| {
            if !*requesting && controller.can_spin() && controller.session().revealed_result().is_none() {
                controller.set_geometry(geometry(*multiplier));
                controller.set_candidates(preview.clone());
            }
            || ()
        });
    }

    let on_stake = {
        let stake_index = stake_index.clone();
        let controller = controller.clone();
        let requesting = requesting.clone();
        Callback::from(move |index: usize| {
            if !*requesting && controller.can_spin() {
                stake_index.set(Some(index));
            }
        })
    };

    let on_multiplier = {
        let multiplier = multiplier.clone();
        let controller = controller.clone();
        let requesting = requesting.clone();
        Callback::from(move |value: Multiplier| {
            if !*requesting && controller.can_spin() {
                multiplier.set(value);
            }
        })
    };

    let on_spin = {
        let controller = controller.clone();
        let requesting = requesting.clone();
        let pending_balance = pending_balance.clone();
        let stake = stake.clone();
        let target = target.clone();
        let multiplier = *multiplier;
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            if *requesting || !controller.can_spin() {
                return;
            }
            let ids = stake
                .as_ref()
                .and_then(|s| s.identifier.clone())
                .zip(target.as_ref().and_then(|t| t.identifier.clone()));
            let Some((stake_id, target_id)) = ids else {
                return;
            };
            match UpgradeRequest::new(&stake_id, &target_id, multiplier) {
                Ok(request) => request_upgrade(
                    controller.clone(),
                    requesting.clone(),
                    pending_balance.clone(),
                    request,
                    preview.clone(),
                ),
                Err(err) => {
                    let err = SpinError::from(err);
                    log::warn!("Upgrade request refused locally [{}]: {}", err.code(), err);
                    notify(err.action_message());
                }
            }
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let inventory = inventory.clone();
        let targets = targets.clone();
        let stake_index = stake_index.clone();
        Callback::from(move |_: ()| {
            if let shared::DismissOutcome::Reset { refetch_candidates: true } = controller.dismiss() {
                stake_index.set(None);
                load_gift_lists(inventory.clone(), targets.clone());
            }
        })
    };

    let session = controller.session();
    let segments = session.candidates().to_vec();
    let rotation = session.display_offset();
    let revealed = session.revealed_result().cloned();
    let is_spinning = session.is_animating() || *requesting;
    drop(session);

    let reward = stake.as_ref().map(|s| potential_reward(s.value, *multiplier));
    let ready = stake.is_some() && target.is_some();

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TEXT_H1}>{ "Upgrade" }</h1>
            <div class={styles::CARD}>
                <WheelCanvas
                    segments={segments}
                    rotation={rotation}
                    is_spinning={is_spinning}
                    highlight_first={true}
                    compact={props.view.device == DeviceClass::Mobile}
                />
                <div class="mt-4 grid grid-cols-2 gap-2 text-sm text-center">
                    <div>
                        <p class={styles::TEXT_SMALL}>{ "Potential reward" }</p>
                        <p class="font-semibold">{ reward.map(format_value).unwrap_or_else(|| "-".to_string()) }</p>
                    </div>
                    <div>
                        <p class={styles::TEXT_SMALL}>{ "Win chance" }</p>
                        <p class="font-semibold">{ format!("{}%", format_value(multiplier.win_chance_percent())) }</p>
                    </div>
                </div>
                if let Some(target) = target.clone() {
                    <div class="mt-3 flex items-center justify-center gap-2">
                        <PrizeMedia item={target.clone()} class="w-10 h-10" />
                        <span>{ target.title().to_string() }</span>
                    </div>
                }
            </div>

            <div class="mt-4 flex flex-wrap gap-2 justify-center">
                {
                    for Multiplier::all().map(|m| {
                        let active = m == *multiplier;
                        let onclick = on_multiplier.reform(move |_: MouseEvent| m);
                        html! {
                            <button
                                class={classes!(styles::CHIP, if active { styles::CHIP_ACTIVE } else { styles::CHIP_IDLE })}
                                {onclick}
                            >
                                { format!("x{}", m.get()) }
                            </button>
                        }
                    })
                }
            </div>

            <div class="mt-6">
                <SpinButton is_spinning={is_spinning} enabled={ready} label="Upgrade" onclick={on_spin} />
            </div>

            <div class={classes!(styles::CARD, "mt-6")}>
                <div class="flex justify-between mb-2">
                    <span class="font-semibold">{ "Your gifts" }</span>
                    <span class={styles::TEXT_SMALL}>{ format_value(total_value(&inventory)) }</span>
                </div>
                if inventory.is_empty() {
                    <p class={styles::TEXT_SMALL}>{ "No gifts to upgrade yet" }</p>
                } else {
                    <div class="grid grid-cols-3 gap-2">
                        {
                            for inventory.iter().enumerate().map(|(index, item)| {
                                let selected = *stake_index == Some(index);
                                let onclick = on_stake.reform(move |_: MouseEvent| index);
                                html! {
                                    <button
                                        class={classes!("flex", "flex-col", "items-center", "p-2", "rounded-xl",
                                            if selected { "bg-blue-600/40 ring-2 ring-blue-400" } else { "bg-gray-800" })}
                                        {onclick}
                                    >
                                        <PrizeMedia item={item.clone()} class="w-12 h-12" />
                                        <span class="text-xs truncate max-w-full">{ item.title().to_string() }</span>
                                        <span class="text-xs text-blue-300">{ format_value(item.value) }</span>
                                    </button>
                                }
                            })
                        }
                    </div>
                }
            </div>

            if let Some(item) = revealed {
                <ResultModal item={item} on_dismiss={on_dismiss} />
            }
        </div>
    }
}
