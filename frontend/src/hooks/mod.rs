pub mod use_balance;
pub mod use_spin_session;

pub use use_balance::*;
pub use use_spin_session::*;
