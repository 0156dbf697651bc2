use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    #[prop_or(true)]
    pub enabled: bool,
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || !props.enabled;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning { "inline-block mr-2 animate-spin" } else { "hidden" };

    html! {
        <button
            class={classes!("w-full", "py-3", "px-6", "rounded-xl", "font-bold", "text-lg", "transition-all", "duration-300", button_class)}
            disabled={is_disabled}
            onclick={props.onclick.clone()}
        >
            <span class={spin_icon_class}>{ "⟳" }</span>
            { if props.is_spinning { AttrValue::from("Spinning...") } else { props.label.clone() } }
        </button>
    }
}
