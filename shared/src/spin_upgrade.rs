use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{UPGRADE_BAND_MARGIN_DEG, UPGRADE_MAX_MULTIPLIER, UPGRADE_MIN_MULTIPLIER};
use crate::prize::PrizeItem;
use crate::spin_error::ValidationError;
use crate::spin_wheel::{normalize_degrees, segment_angle, WheelLayout};
use crate::validation::validate_multiplier;

/// Upgrade multiplier; also the number of wheel segments.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Multiplier(u8);

impl Multiplier {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        validate_multiplier(value)?;
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn segments(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Multiplier> {
        (UPGRADE_MIN_MULTIPLIER..=UPGRADE_MAX_MULTIPLIER).map(Multiplier)
    }

    /// Chance of landing on the winning segment, in percent.
    pub fn win_chance_percent(self) -> f64 {
        100.0 / self.0 as f64
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Multiplier::new(value)
    }
}

impl From<Multiplier> for u8 {
    fn from(multiplier: Multiplier) -> u8 {
        multiplier.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier(UPGRADE_MIN_MULTIPLIER)
    }
}

pub fn potential_reward(stake_value: f64, multiplier: Multiplier) -> f64 {
    stake_value * multiplier.get() as f64
}

/// Segment list for the upgrade wheel: the target gift first, then the stake repeated.
pub fn upgrade_segments(target: &PrizeItem, stake: &PrizeItem, multiplier: Multiplier) -> Vec<PrizeItem> {
    let mut segments = Vec::with_capacity(multiplier.segments());
    segments.push(target.clone().with_win_flag(true));
    for _ in 1..multiplier.segments() {
        segments.push(stake.clone().with_win_flag(false));
    }
    segments
}

/// Target whose value is closest to the potential reward without falling below the stake.
pub fn pick_upgrade_target<'a>(
    targets: &'a [PrizeItem],
    stake_value: f64,
    multiplier: Multiplier,
) -> Option<&'a PrizeItem> {
    let reward = potential_reward(stake_value, multiplier);
    targets
        .iter()
        .filter(|target| target.value > stake_value && target.identifier.is_some())
        .min_by(|a, b| {
            let da = (a.value - reward).abs();
            let db = (b.value - reward).abs();
            da.total_cmp(&db)
        })
}

/// Landing bands in the wheel's own frame. The win band straddles 0°
/// (segment 0's center); the loss band covers every other segment. Both keep
/// `margin` degrees away from the boundary between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingBands {
    half_segment: f64,
    margin: f64,
}

impl LandingBands {
    pub fn new(multiplier: Multiplier) -> Self {
        let half_segment = segment_angle(multiplier.segments()) / 2.0;
        Self {
            half_segment,
            margin: UPGRADE_BAND_MARGIN_DEG.min(half_segment / 4.0),
        }
    }

    pub fn win_band(&self) -> (f64, f64) {
        let edge = self.half_segment - self.margin;
        (-edge, edge)
    }

    pub fn loss_band(&self) -> (f64, f64) {
        (self.half_segment + self.margin, 360.0 - self.half_segment - self.margin)
    }

    pub fn sample<R: Rng + ?Sized>(&self, is_win: bool, rng: &mut R) -> f64 {
        let (low, high) = if is_win { self.win_band() } else { self.loss_band() };
        normalize_degrees(rng.gen_range(low..=high))
    }

    pub fn contains(&self, is_win: bool, landing: f64) -> bool {
        let landing = normalize_degrees(landing);
        if is_win {
            let (_, edge) = self.win_band();
            landing <= edge || landing >= 360.0 - edge
        } else {
            let (low, high) = self.loss_band();
            landing >= low && landing <= high
        }
    }
}

/// Rotation that puts `landing` (wheel frame) under the pointer.
pub fn upgrade_final_rotation(layout: &WheelLayout, landing: f64, cumulative_rotation: f64) -> f64 {
    layout.full_rotations as f64 * 360.0 + layout.pointer_angle - landing + cumulative_rotation
}

pub fn landed_segment(layout: &WheelLayout, multiplier: Multiplier, rotation: f64) -> Option<usize> {
    layout.segment_under_pointer(multiplier.segments(), rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_multiplier_range() {
        assert!(Multiplier::new(1).is_err());
        assert!(Multiplier::new(11).is_err());
        assert_eq!(Multiplier::all().count(), 9);
        assert_eq!(Multiplier::new(4).unwrap().win_chance_percent(), 25.0);
        assert!(serde_json::from_str::<Multiplier>("12").is_err());
        assert_eq!(serde_json::from_str::<Multiplier>("5").unwrap().get(), 5);
    }

    #[test]
    fn test_segments_put_target_first() {
        let target = PrizeItem::new("Target", "t.json", 50.0);
        let stake = PrizeItem::new("Stake", "s.png", 10.0);
        let segments = upgrade_segments(&target, &stake, Multiplier::new(5).unwrap());
        assert_eq!(segments.len(), 5);
        assert!(segments[0].win_flag);
        assert_eq!(segments[0].display_title, "Target");
        assert!(segments[1..].iter().all(|s| !s.win_flag && s.display_title == "Stake"));
        assert_eq!(potential_reward(10.0, Multiplier::new(5).unwrap()), 50.0);
    }

    #[test]
    fn test_pick_target_closest_to_reward() {
        let targets = vec![
            PrizeItem::new("Cheap", "c.png", 8.0).with_identifier("c"),
            PrizeItem::new("Mid", "m.png", 28.0).with_identifier("m"),
            PrizeItem::new("High", "h.png", 55.0).with_identifier("h"),
            PrizeItem::new("Unlisted", "u.png", 30.0),
        ];
        let three = Multiplier::new(3).unwrap();
        assert_eq!(pick_upgrade_target(&targets, 10.0, three).map(|t| t.title()), Some("Mid"));
        let ten = Multiplier::new(10).unwrap();
        assert_eq!(pick_upgrade_target(&targets, 10.0, ten).map(|t| t.title()), Some("High"));
        assert!(pick_upgrade_target(&targets, 100.0, three).is_none());
    }

    #[test]
    fn test_loss_never_shows_winning_segment() {
        let layout = WheelLayout::default();
        let multiplier = Multiplier::new(5).unwrap();
        let bands = LandingBands::new(multiplier);
        let mut rng = StdRng::seed_from_u64(0xfeed);
        let mut cumulative = 0.0;
        for _ in 0..2000 {
            let landing = bands.sample(false, &mut rng);
            assert!(bands.contains(false, landing));
            let rotation = upgrade_final_rotation(&layout, landing, cumulative);
            let segment = landed_segment(&layout, multiplier, rotation).unwrap();
            assert_ne!(segment, 0);
            cumulative += 360.0;
        }
    }

    #[test]
    fn test_bands_match_outcome_for_every_multiplier() {
        let layout = WheelLayout::default();
        let mut rng = StdRng::seed_from_u64(99);
        for multiplier in Multiplier::all() {
            let bands = LandingBands::new(multiplier);
            for _ in 0..300 {
                for is_win in [true, false] {
                    let landing = bands.sample(is_win, &mut rng);
                    assert!(bands.contains(is_win, landing));
                    assert!(!bands.contains(!is_win, landing));
                    let rotation = upgrade_final_rotation(&layout, landing, 0.0);
                    let segment = landed_segment(&layout, multiplier, rotation).unwrap();
                    assert_eq!(segment == 0, is_win, "multiplier {}", multiplier.get());
                }
            }
        }
    }

    #[test]
    fn test_band_edges() {
        let bands = LandingBands::new(Multiplier::new(2).unwrap());
        assert_eq!(bands.win_band(), (-88.0, 88.0));
        assert_eq!(bands.loss_band(), (92.0, 268.0));
    }
}
