use yew::prelude::*;

/// Every icon the app draws. Resolved at compile time, no name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Roulette,
    Wheel,
    Upgrade,
    Star,
    Ton,
    Sell,
    Withdraw,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Icon::Roulette => "M3 6h18M3 12h18M3 18h18",
            Icon::Wheel => "M12 2a10 10 0 100 20 10 10 0 000-20zm0 0v20M2 12h20",
            Icon::Upgrade => "M12 19V5m0 0l-6 6m6-6l6 6",
            Icon::Star => "M12 2l3 7h7l-5.5 4.5L18.5 21 12 16.5 5.5 21l2-7.5L2 9h7z",
            Icon::Ton => "M4 4h16L12 21zM12 4v17",
            Icon::Sell => "M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6",
            Icon::Withdraw => "M12 3v12m0 0l-4-4m4 4l4-4M4 21h16",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or("w-5 h-5")]
    pub class: &'static str,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg class={props.class} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={props.icon.path()} />
        </svg>
    }
}
