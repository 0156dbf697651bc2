use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{WHEEL_FULL_ROTATIONS, WHEEL_JITTER_FRACTION, WHEEL_POINTER_ANGLE};
use crate::prize::PrizeItem;

/// Angular geometry of a segmented wheel. Angles are degrees, 0° at
/// 3 o'clock, increasing clockwise. Segment `i` is centered on `i * segment_angle`
/// before rotation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub full_rotations: u32,
    pub pointer_angle: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            full_rotations: WHEEL_FULL_ROTATIONS,
            pointer_angle: WHEEL_POINTER_ANGLE,
        }
    }
}

pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn segment_angle(total_segments: usize) -> f64 {
    if total_segments == 0 {
        360.0
    } else {
        360.0 / total_segments as f64
    }
}

/// Smallest multiple of 360 at or above the previous landing angle.
pub fn next_cumulative(previous_rotation: f64) -> f64 {
    (previous_rotation / 360.0).ceil().max(0.0) * 360.0
}

impl WheelLayout {
    pub fn target_angle(&self, total_segments: usize, winning_index: usize) -> f64 {
        self.pointer_angle - winning_index as f64 * segment_angle(total_segments)
    }

    pub fn final_rotation(
        &self,
        total_segments: usize,
        winning_index: usize,
        cumulative_rotation: f64,
        jitter_degrees: f64,
    ) -> f64 {
        self.full_rotations as f64 * 360.0
            + self.target_angle(total_segments, winning_index)
            + cumulative_rotation
            + jitter_degrees
    }

    /// Angle in the wheel's own frame that sits under the pointer at `rotation`.
    pub fn pointer_in_wheel_frame(&self, rotation: f64) -> f64 {
        normalize_degrees(self.pointer_angle - rotation)
    }

    pub fn segment_under_pointer(&self, total_segments: usize, rotation: f64) -> Option<usize> {
        if total_segments == 0 {
            return None;
        }
        let segment = segment_angle(total_segments);
        let local = self.pointer_in_wheel_frame(rotation);
        let index = ((local + segment / 2.0) / segment).floor() as usize;
        Some(index % total_segments)
    }

    /// Signed angular distance from segment `index`'s center to the pointer at `rotation`.
    pub fn pointer_offset(&self, total_segments: usize, index: usize, rotation: f64) -> f64 {
        let center = index as f64 * segment_angle(total_segments);
        let delta = normalize_degrees(center + rotation - self.pointer_angle);
        if delta > 180.0 {
            delta - 360.0
        } else {
            delta
        }
    }
}

pub fn max_jitter_degrees(total_segments: usize) -> f64 {
    segment_angle(total_segments) / 2.0 * WHEEL_JITTER_FRACTION
}

pub fn sample_jitter_degrees<R: Rng + ?Sized>(total_segments: usize, rng: &mut R) -> f64 {
    let bound = max_jitter_degrees(total_segments);
    rng.gen_range(-bound..=bound)
}

/// Position of the first item the caller pre-marked as the outcome.
pub fn flagged_index(items: &[PrizeItem]) -> Option<usize> {
    items.iter().position(|item| item.win_flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_rotation() {
        let layout = WheelLayout::default();
        let rotation = layout.final_rotation(6, 0, 0.0, 0.0);
        assert_eq!(rotation, 1710.0);
        assert_eq!(normalize_degrees(rotation), 270.0);
        assert_eq!(layout.segment_under_pointer(6, rotation), Some(0));
    }

    #[test]
    fn test_every_segment_aligns() {
        let layout = WheelLayout::default();
        for n in 1..=12 {
            for index in 0..n {
                let rotation = layout.final_rotation(n, index, 0.0, 0.0);
                assert!(layout.pointer_offset(n, index, rotation).abs() < 1e-9);
                assert_eq!(layout.segment_under_pointer(n, rotation), Some(index));
            }
        }
    }

    #[test]
    fn test_jitter_bound() {
        let layout = WheelLayout::default();
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=12 {
            for index in 0..n {
                let jitter = sample_jitter_degrees(n, &mut rng);
                assert!(jitter.abs() <= max_jitter_degrees(n));
                let rotation = layout.final_rotation(n, index, 720.0, jitter);
                let offset = layout.pointer_offset(n, index, rotation);
                assert!(offset.abs() <= jitter.abs() + 1e-9);
                assert_eq!(layout.segment_under_pointer(n, rotation), Some(index));
            }
        }
    }

    #[test]
    fn test_monotonic_across_spins() {
        let layout = WheelLayout::default();
        let first = layout.final_rotation(6, 3, 0.0, 0.0);
        let second = layout.final_rotation(6, 3, 360.0, 0.0);
        assert!(second > first);

        // Worst case: previous spin landed just past a turn, next target is the lowest angle.
        let mut previous = 0.0;
        for index in [0, 5, 1, 4, 2, 3, 5, 5] {
            let next = layout.final_rotation(6, index, next_cumulative(previous), 0.0);
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_next_cumulative() {
        assert_eq!(next_cumulative(0.0), 0.0);
        assert_eq!(next_cumulative(1710.0), 1800.0);
        assert_eq!(next_cumulative(1800.0), 1800.0);
    }

    #[test]
    fn test_flagged_index() {
        let items = vec![
            PrizeItem::new("a", "a.png", 1.0),
            PrizeItem::new("b", "b.png", 2.0).with_win_flag(true),
        ];
        assert_eq!(flagged_index(&items), Some(1));
        assert_eq!(flagged_index(&items[..1]), None);
    }
}
