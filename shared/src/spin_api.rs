use serde::{Deserialize, Serialize};

use crate::prize::{GiftAttributes, PrizeItem};
use crate::spin_error::{SpinError, ValidationError};
use crate::spin_session::{Landing, SpinOutcome, SpinVariant};
use crate::spin_upgrade::Multiplier;
use crate::validation::validate_gift_id;

/// Gift as the backend sends it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GiftPayload {
    pub link: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub gift_id: Option<String>,
    #[serde(default, alias = "win")]
    pub is_win: bool,
}

impl GiftPayload {
    fn same_gift(&self, other: &GiftPayload) -> bool {
        match (&self.gift_id, &other.gift_id) {
            (Some(a), Some(b)) => a == b,
            _ => self.link == other.link,
        }
    }
}

impl From<GiftPayload> for PrizeItem {
    fn from(gift: GiftPayload) -> Self {
        let attributes = GiftAttributes {
            model: gift.model,
            symbol: gift.symbol,
            backdrop: gift.backdrop,
            number: gift.number,
        };
        PrizeItem {
            identifier: gift.gift_id,
            display_title: gift.title,
            media_ref: gift.link,
            value: gift.price,
            attributes: (!attributes.is_empty()).then_some(attributes),
            win_flag: gift.is_win,
        }
    }
}

pub fn into_prize_items(gifts: Vec<GiftPayload>) -> Vec<PrizeItem> {
    gifts.into_iter().map(PrizeItem::from).collect()
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct SpinRequest {
    pub timestamp: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct GiftListResponse {
    #[serde(default)]
    pub gifts: Vec<GiftPayload>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SpinResponse {
    #[serde(alias = "new_balance")]
    pub balance: f64,
    #[serde(default)]
    pub gifts: Vec<GiftPayload>,
    #[serde(default)]
    pub winning_index: Option<usize>,
    #[serde(default, alias = "prize")]
    pub win_gift: Option<GiftPayload>,
}

impl SpinResponse {
    /// Resolves where the winner sits in `gifts`: explicit index, then the
    /// position of `win_gift`, then a flagged gift, then the variant's fixed slot.
    pub fn resolve_winning_index(&self, variant: SpinVariant) -> Result<usize, SpinError> {
        let len = self.gifts.len();
        if len == 0 {
            return Err(SpinError::Malformed("empty gift list".to_string()));
        }

        let index = if let Some(index) = self.winning_index {
            index
        } else if let Some(win_gift) = &self.win_gift {
            self.gifts
                .iter()
                .position(|gift| gift.same_gift(win_gift))
                .ok_or_else(|| SpinError::Malformed("winning gift not among candidates".to_string()))?
        } else if let Some(index) = self.gifts.iter().position(|gift| gift.is_win) {
            index
        } else {
            variant
                .fallback_winning_index()
                .ok_or_else(|| SpinError::Malformed("no winner declared".to_string()))?
        };

        if index >= len {
            return Err(SpinError::Malformed(format!("winning index {} out of range for {} gifts", index, len)));
        }
        Ok(index)
    }

    pub fn into_outcome(self, variant: SpinVariant) -> Result<SpinOutcome, SpinError> {
        let index = self.resolve_winning_index(variant)?;
        let mut candidates = into_prize_items(self.gifts);
        for (i, item) in candidates.iter_mut().enumerate() {
            item.win_flag = i == index;
        }
        Ok(SpinOutcome {
            balance: Some(self.balance),
            candidates,
            landing: Landing::Index(index),
        })
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UpgradeRequest {
    pub gift_id: String,
    pub target_gift_id: String,
    pub multiplier: Multiplier,
}

impl UpgradeRequest {
    pub fn new(gift_id: &str, target_gift_id: &str, multiplier: Multiplier) -> Result<Self, ValidationError> {
        validate_gift_id(gift_id)?;
        validate_gift_id(target_gift_id)?;
        Ok(Self {
            gift_id: gift_id.to_string(),
            target_gift_id: target_gift_id.to_string(),
            multiplier,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpgradeResponse {
    #[serde(default, alias = "new_balance")]
    pub balance: Option<f64>,
    pub is_win: bool,
    #[serde(default)]
    pub gift: Option<GiftPayload>,
}

impl UpgradeResponse {
    /// Pairs the declared outcome with the wheel segments; a returned gift replaces the target segment.
    pub fn into_outcome(self, mut segments: Vec<PrizeItem>) -> SpinOutcome {
        if let (true, Some(gift), Some(first)) = (self.is_win, self.gift, segments.first_mut()) {
            *first = PrizeItem::from(gift).with_win_flag(true);
        }
        SpinOutcome {
            balance: self.balance,
            candidates: segments,
            landing: Landing::Upgrade { is_win: self.is_win },
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GiftActionRequest {
    pub gift_id: String,
}

impl GiftActionRequest {
    pub fn new(gift_id: &str) -> Result<Self, ValidationError> {
        validate_gift_id(gift_id)?;
        Ok(Self { gift_id: gift_id.to_string() })
    }
}

#[derive(Debug, Deserialize)]
pub struct GiftActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "new_balance")]
    pub balance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GiftActionResponse {
    pub fn into_result(self) -> Result<Option<f64>, SpinError> {
        if self.success {
            Ok(self.balance)
        } else {
            Err(SpinError::Backend {
                status: 200,
                message: self.message.unwrap_or_else(|| "action refused".to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin_wheel::flagged_index;

    const SPIN_BODY: &str = r#"{
        "balance": 12.5,
        "gifts": [
            {"link": "https://nft/a.json", "title": "Plush Pepe", "price": 40.0, "gift_id": "a"},
            {"link": "https://nft/b.png", "title": "Durov's Cap", "price": 9.0, "model": "Classic", "number": 77, "gift_id": "b"},
            {"link": "https://nft/c.png", "title": "Lol Pop", "price": 1.5, "gift_id": "c"},
            {"link": "https://nft/d.png", "title": "Snake Box", "price": 2.0},
            {"link": "https://nft/e.png", "title": "Jelly Bunny", "price": 3.0},
            {"link": "https://nft/f.png", "title": "Homemade Cake", "price": 1.0}
        ]
    }"#;

    fn response() -> SpinResponse {
        serde_json::from_str(SPIN_BODY).unwrap()
    }

    #[test]
    fn test_payload_conversion() {
        let items = into_prize_items(response().gifts);
        assert_eq!(items[1].identifier.as_deref(), Some("b"));
        assert_eq!(items[1].attribute_lines(), vec!["Model: Classic", "#77"]);
        assert!(items[0].attributes.is_none());
        assert_eq!(items[3].identifier, None);
    }

    #[test]
    fn test_explicit_index_wins() {
        let mut resp = response();
        resp.winning_index = Some(1);
        resp.win_gift = Some(resp.gifts[2].clone());
        assert_eq!(resp.resolve_winning_index(SpinVariant::Strip).unwrap(), 1);
    }

    #[test]
    fn test_win_gift_located_by_id_then_link() {
        let mut resp = response();
        resp.win_gift = Some(resp.gifts[2].clone());
        assert_eq!(resp.resolve_winning_index(SpinVariant::Strip).unwrap(), 2);
        resp.win_gift = Some(resp.gifts[4].clone());
        assert_eq!(resp.resolve_winning_index(SpinVariant::Strip).unwrap(), 4);
    }

    #[test]
    fn test_fixed_fallback_and_range() {
        let resp = response();
        assert_eq!(resp.resolve_winning_index(SpinVariant::Strip).unwrap(), 4);
        assert_eq!(resp.resolve_winning_index(SpinVariant::Wheel).unwrap(), 5);

        let mut short = response();
        short.gifts.truncate(3);
        assert!(matches!(short.resolve_winning_index(SpinVariant::Strip), Err(SpinError::Malformed(_))));

        let mut bad = response();
        bad.winning_index = Some(6);
        assert!(matches!(bad.resolve_winning_index(SpinVariant::Strip), Err(SpinError::Malformed(_))));
    }

    #[test]
    fn test_outcome_flags_only_resolved_winner() {
        let outcome = response().into_outcome(SpinVariant::Wheel).unwrap();
        assert_eq!(outcome.landing, Landing::Index(5));
        assert_eq!(flagged_index(&outcome.candidates), Some(5));
        assert_eq!(outcome.balance, Some(12.5));
    }

    #[test]
    fn test_spin_request_body() {
        let body = serde_json::to_value(SpinRequest { timestamp: 1_700_000_000_000 }).unwrap();
        assert_eq!(body, serde_json::json!({ "timestamp": 1_700_000_000_000u64 }));
    }

    #[test]
    fn test_new_balance_alias() {
        let resp: SpinResponse = serde_json::from_str(r#"{"new_balance": 3.0, "gifts": [], "winning_index": 0}"#).unwrap();
        assert_eq!(resp.balance, 3.0);
        assert!(resp.into_outcome(SpinVariant::Strip).is_err());
    }

    #[test]
    fn test_upgrade_outcome_replaces_target() {
        let multiplier = Multiplier::new(3).unwrap();
        let target = PrizeItem::new("Target", "t.json", 30.0);
        let stake = PrizeItem::new("Stake", "s.png", 10.0);
        let segments = crate::spin_upgrade::upgrade_segments(&target, &stake, multiplier);
        let body = r#"{"is_win": true, "gift": {"link": "u.json", "title": "Target", "price": 30.0, "number": 5, "gift_id": "t1"}}"#;
        let outcome = serde_json::from_str::<UpgradeResponse>(body).unwrap().into_outcome(segments);
        assert_eq!(outcome.landing, Landing::Upgrade { is_win: true });
        assert_eq!(outcome.candidates[0].identifier.as_deref(), Some("t1"));
        assert!(outcome.candidates[0].win_flag);
        assert_eq!(outcome.candidates.len(), 3);
    }

    #[test]
    fn test_requests_validate_ids() {
        assert!(GiftActionRequest::new("").is_err());
        assert!(UpgradeRequest::new("a1", "b 2", Multiplier::default()).is_err());
        let request = UpgradeRequest::new("a1", "b2", Multiplier::new(4).unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"gift_id": "a1", "target_gift_id": "b2", "multiplier": 4})
        );
    }

    #[test]
    fn test_action_response() {
        let ok: GiftActionResponse = serde_json::from_str(r#"{"success": true, "balance": 5.5}"#).unwrap();
        assert_eq!(ok.into_result().unwrap(), Some(5.5));
        let refused: GiftActionResponse = serde_json::from_str(r#"{"success": false, "message": "already sold"}"#).unwrap();
        assert_eq!(refused.into_result().unwrap_err().code(), "backend");
    }
}
