use shared::constants::PLACEHOLDER_IMAGE;
use shared::{MediaKind, PrizeItem};
use yew::prelude::*;

use crate::config::get_asset_url;

#[derive(Properties, PartialEq)]
pub struct PrizeMediaProps {
    pub item: PrizeItem,
    #[prop_or("w-20 h-20")]
    pub class: &'static str,
}

/// Image or animation for a prize. Load failures swap in the placeholder.
#[function_component(PrizeMedia)]
pub fn prize_media(props: &PrizeMediaProps) -> Html {
    let failed = use_state(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.item.media_ref.clone(), move |_| {
            failed.set(false);
            || ()
        });
    }

    let onerror = {
        let failed = failed.clone();
        let media = props.item.media_ref.clone();
        Callback::from(move |_: Event| {
            log::warn!("Media failed to load: {}", media);
            failed.set(true);
        })
    };

    let kind = if *failed { MediaKind::Placeholder } else { props.item.media_kind() };
    match kind {
        MediaKind::Animation => html! {
            <lottie-player
                class={props.class}
                src={get_asset_url(props.item.media_src())}
                autoplay=true
                loop=true
                background="transparent"
                {onerror}
            />
        },
        MediaKind::StaticImage => html! {
            <img
                class={classes!(props.class, "object-contain")}
                src={get_asset_url(props.item.media_src())}
                alt={props.item.title().to_string()}
                {onerror}
            />
        },
        MediaKind::Placeholder => html! {
            <img
                class={classes!(props.class, "object-contain", "opacity-60")}
                src={get_asset_url(PLACEHOLDER_IMAGE)}
                alt={props.item.title().to_string()}
            />
        },
    }
}
