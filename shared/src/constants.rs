pub const API_BASE_URL: &str = "http://localhost:3000/api";
pub const ROULETTE_GIFTS_ENDPOINT: &str = "/roulette/gifts";
pub const ROULETTE_SPIN_ENDPOINT: &str = "/roulette/spin";
pub const WHEEL_GIFTS_ENDPOINT: &str = "/wheel/gifts";
pub const WHEEL_SPIN_ENDPOINT: &str = "/wheel/spin";
pub const UPGRADE_TARGETS_ENDPOINT: &str = "/upgrade/targets";
pub const UPGRADE_SPIN_ENDPOINT: &str = "/upgrade/spin";
pub const INVENTORY_ENDPOINT: &str = "/gifts/inventory";
pub const SELL_GIFT_ENDPOINT: &str = "/gifts/sell";
pub const WITHDRAW_GIFT_ENDPOINT: &str = "/gifts/withdraw";

pub const GENERIC_SPIN_ERROR: &str = "Insufficient funds. Top up your balance";
pub const ACTION_FAILED_ERROR: &str = "Something went wrong. Please try again";
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.png";
pub const DEFAULT_PRIZE_TITLE: &str = "Gift";

// Strip roulette
pub const STRIP_REPETITIONS: usize = 5;
pub const STRIP_TARGET_COPY: usize = 2;
pub const STRIP_SPIN_DURATION_MS: u32 = 4500;
pub const STRIP_FALLBACK_WINNING_INDEX: usize = 4;
pub const STRIP_JITTER_FRACTION: f64 = 0.35; // of half an item's width

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MOBILE_ITEM_WIDTH: f64 = 100.0;
pub const MOBILE_ITEM_GAP: f64 = 12.0;
pub const DESKTOP_ITEM_WIDTH: f64 = 120.0;
pub const DESKTOP_ITEM_GAP: f64 = 16.0;

// Wheel roulette
pub const WHEEL_SPIN_DURATION_MS: u32 = 5000;
pub const WHEEL_FULL_ROTATIONS: u32 = 4;
pub const WHEEL_POINTER_ANGLE: f64 = 270.0;
pub const WHEEL_FALLBACK_WINNING_INDEX: usize = 5;
pub const WHEEL_JITTER_FRACTION: f64 = 0.35; // of half a segment

// Upgrade wheel
pub const UPGRADE_SPIN_DURATION_MS: u32 = 5000;
pub const UPGRADE_MIN_MULTIPLIER: u8 = 2;
pub const UPGRADE_MAX_MULTIPLIER: u8 = 10;
pub const UPGRADE_BAND_MARGIN_DEG: f64 = 2.0;
