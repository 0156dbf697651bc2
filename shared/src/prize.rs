use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRIZE_TITLE, PLACEHOLDER_IMAGE};

static ANIMATION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.json(?:[?#].*)?$").expect("static regex"));

/// Descriptive metadata of a collectible gift. Display-only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GiftAttributes {
    pub model: Option<String>,
    pub symbol: Option<String>,
    pub backdrop: Option<String>,
    pub number: Option<u64>,
}

impl GiftAttributes {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.symbol.is_none() && self.backdrop.is_none() && self.number.is_none()
    }
}

/// One possible spin outcome.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeItem {
    pub identifier: Option<String>,
    pub display_title: String,
    pub media_ref: String,
    pub value: f64,
    pub attributes: Option<GiftAttributes>,
    /// Pre-marked intended outcome for wheel variants. Set by the caller.
    #[serde(default)]
    pub win_flag: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Animation,
    StaticImage,
    Placeholder,
}

impl PrizeItem {
    pub fn new(display_title: impl Into<String>, media_ref: impl Into<String>, value: f64) -> Self {
        Self {
            identifier: None,
            display_title: display_title.into(),
            media_ref: media_ref.into(),
            value,
            attributes: None,
            win_flag: false,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_win_flag(mut self, win_flag: bool) -> Self {
        self.win_flag = win_flag;
        self
    }

    pub fn media_kind(&self) -> MediaKind {
        let media = self.media_ref.trim();
        if media.is_empty() {
            MediaKind::Placeholder
        } else if ANIMATION_SUFFIX.is_match(media) {
            MediaKind::Animation
        } else {
            MediaKind::StaticImage
        }
    }

    /// Source to hand to the renderer; blank references degrade to the placeholder.
    pub fn media_src(&self) -> &str {
        match self.media_kind() {
            MediaKind::Placeholder => PLACEHOLDER_IMAGE,
            _ => self.media_ref.trim(),
        }
    }

    pub fn title(&self) -> &str {
        let title = self.display_title.trim();
        if title.is_empty() {
            DEFAULT_PRIZE_TITLE
        } else {
            title
        }
    }

    /// Attribute lines in display order, e.g. `Model: Blue Star`.
    pub fn attribute_lines(&self) -> Vec<String> {
        let Some(attrs) = &self.attributes else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        if let Some(model) = &attrs.model {
            lines.push(format!("Model: {}", model));
        }
        if let Some(symbol) = &attrs.symbol {
            lines.push(format!("Symbol: {}", symbol));
        }
        if let Some(backdrop) = &attrs.backdrop {
            lines.push(format!("Backdrop: {}", backdrop));
        }
        if let Some(number) = attrs.number {
            lines.push(format!("#{}", number));
        }
        lines
    }
}

pub fn total_value(items: &[PrizeItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

/// Formats a settlement-currency amount the way balances are shown (two decimals, trimmed).
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}
