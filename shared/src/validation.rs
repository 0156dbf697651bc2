use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{UPGRADE_MAX_MULTIPLIER, UPGRADE_MIN_MULTIPLIER};
use crate::spin_error::ValidationError;

static GIFT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-:.]{1,128}$").expect("static regex"));

pub fn validate_gift_id(gift_id: &str) -> Result<(), ValidationError> {
    if !GIFT_ID.is_match(gift_id) {
        return Err(ValidationError::InvalidGiftId(gift_id.to_string()));
    }
    Ok(())
}

pub fn validate_multiplier(multiplier: u8) -> Result<(), ValidationError> {
    if !(UPGRADE_MIN_MULTIPLIER..=UPGRADE_MAX_MULTIPLIER).contains(&multiplier) {
        return Err(ValidationError::MultiplierOutOfRange(multiplier));
    }
    Ok(())
}

pub fn validate_auth_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(ValidationError::MissingToken);
    }
    Ok(())
}
