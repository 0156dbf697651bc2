pub mod icon;
pub mod prize_media;
pub mod result_modal;
pub mod spin_button;
pub mod toast;

pub use icon::{Icon, IconView};
pub use prize_media::PrizeMedia;
pub use result_modal::ResultModal;
pub use spin_button::SpinButton;
pub use toast::{notify, ToastHost};
