//! Spin presentation engine for the Stars mini-app.
//!
//! The backend decides every outcome. This crate turns a declared winner into
//! a strip translation or wheel rotation that visibly lands on it, times the
//! animation and gates the reveal of the result.

pub mod constants;
pub mod prize;
pub mod spin_api;
pub mod spin_error;
pub mod spin_session;
pub mod spin_strip;
pub mod spin_timer;
pub mod spin_upgrade;
pub mod spin_wheel;
pub mod validation;

pub use prize::{GiftAttributes, MediaKind, PrizeItem};
pub use spin_error::{SpinError, SpinRejected, ValidationError};
pub use spin_session::{
    DismissOutcome, Landing, SessionTick, SpinGeometry, SpinOutcome, SpinSession, SpinVariant, StartedSpin,
};
