use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Horizontal geometry of the strip. Every slot is `item_width + item_gap`
/// wide with the item centered in it, and the strip's left edge sits under
/// the pointer when untranslated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub item_width: f64,
    pub item_gap: f64,
}

impl StripLayout {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => Self { item_width: MOBILE_ITEM_WIDTH, item_gap: MOBILE_ITEM_GAP },
            DeviceClass::Desktop => Self { item_width: DESKTOP_ITEM_WIDTH, item_gap: DESKTOP_ITEM_GAP },
        }
    }

    pub fn slot_span(&self) -> f64 {
        self.item_width + self.item_gap
    }

    /// Center of the slot at `index`, measured from the strip's left edge.
    pub fn slot_center(&self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.slot_span()
    }

    /// Largest jitter that keeps the pointer over the winning item's own width.
    pub fn max_jitter(&self) -> f64 {
        self.item_width / 2.0 * STRIP_JITTER_FRACTION
    }

    pub fn sample_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let bound = self.max_jitter();
        if bound <= 0.0 {
            return 0.0;
        }
        rng.gen_range(-bound..=bound)
    }

    /// Signed distance from the pointer to the center of slot `index` at `translation`.
    pub fn pointer_distance(&self, index: usize, translation: f64) -> f64 {
        translation + self.slot_center(index)
    }

    /// Index of the tiled slot under the pointer, if the pointer is over the strip at all.
    pub fn slot_at_pointer(&self, translation: f64, tiled_len: usize) -> Option<usize> {
        let position = -translation;
        if position < 0.0 || self.slot_span() <= 0.0 {
            return None;
        }
        let index = (position / self.slot_span()).floor() as usize;
        (index < tiled_len).then_some(index)
    }
}

/// Concatenates `repetitions` copies of `items`.
pub fn tile_items<T: Clone>(items: &[T], repetitions: usize) -> Vec<T> {
    let mut tiled = Vec::with_capacity(items.len() * repetitions);
    for _ in 0..repetitions {
        tiled.extend_from_slice(items);
    }
    tiled
}

/// Copy number of a flattened strip index.
pub fn copy_of(index: usize, candidates: usize) -> usize {
    if candidates == 0 {
        0
    } else {
        index / candidates
    }
}

pub fn flattened_target_index(total_items: usize, winning_index: usize, target_copy: usize) -> usize {
    target_copy * total_items + winning_index
}

/// Translation that centers the winning item of copy `target_copy` under the pointer.
pub fn strip_target_offset(
    layout: &StripLayout,
    total_items: usize,
    winning_index: usize,
    target_copy: usize,
    jitter: f64,
) -> f64 {
    let target = flattened_target_index(total_items, winning_index, target_copy);
    -((target as f64 + 0.5) * layout.slot_span()) + jitter
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DESKTOP: StripLayout = StripLayout { item_width: 120.0, item_gap: 16.0 };

    #[test]
    fn test_tiling_correctness() {
        for n in 1..=14usize {
            let items: Vec<usize> = (100..100 + n).collect();
            for r in 1..=6usize {
                let strip = tile_items(&items, r);
                assert_eq!(strip.len(), n * r);
                for (i, value) in strip.iter().enumerate() {
                    assert_eq!(*value, items[i % n]);
                    assert!(copy_of(i, n) < r);
                }
            }
        }
    }

    #[test]
    fn test_tiling_empty() {
        let items: Vec<u8> = Vec::new();
        assert!(tile_items(&items, STRIP_REPETITIONS).is_empty());
        assert_eq!(copy_of(3, 0), 0);
    }

    #[test]
    fn test_target_offset_reference_value() {
        let offset = strip_target_offset(&DESKTOP, 6, 4, 2, 0.0);
        assert_eq!(offset, -2244.0);
    }

    #[test]
    fn test_centering_bound_over_jitter_range() {
        let bound = DESKTOP.max_jitter();
        assert!(bound < DESKTOP.item_width / 2.0);
        let steps = 40;
        for step in 0..=steps {
            let jitter = -bound + 2.0 * bound * step as f64 / steps as f64;
            let offset = strip_target_offset(&DESKTOP, 6, 4, STRIP_TARGET_COPY, jitter);
            let target = flattened_target_index(6, 4, STRIP_TARGET_COPY);
            let distance = DESKTOP.pointer_distance(target, offset);
            assert!((distance - jitter).abs() < 1e-9);
            assert!(distance.abs() <= jitter.abs() + 1e-9);
            assert_eq!(DESKTOP.slot_at_pointer(offset, 6 * STRIP_REPETITIONS), Some(target));
        }
    }

    #[test]
    fn test_sampled_jitter_lands_on_winner() {
        let mut rng = StdRng::seed_from_u64(7);
        let layout = StripLayout::for_device(DeviceClass::Mobile);
        for winning in 0..9 {
            for _ in 0..50 {
                let jitter = layout.sample_jitter(&mut rng);
                assert!(jitter.abs() <= layout.max_jitter());
                let offset = strip_target_offset(&layout, 9, winning, STRIP_TARGET_COPY, jitter);
                let slot = layout.slot_at_pointer(offset, 9 * STRIP_REPETITIONS).unwrap();
                assert_eq!(slot % 9, winning);
                assert_eq!(copy_of(slot, 9), STRIP_TARGET_COPY);
            }
        }
    }

    #[test]
    fn test_run_up_copies() {
        // Two full copies before and after the landing copy.
        assert!(STRIP_TARGET_COPY >= 2);
        assert!(STRIP_REPETITIONS - STRIP_TARGET_COPY - 1 >= 2);
    }

    #[test]
    fn test_device_class() {
        assert_eq!(DeviceClass::from_viewport_width(390.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(1280.0), DeviceClass::Desktop);
        assert_eq!(StripLayout::for_device(DeviceClass::Desktop), DESKTOP);
    }
}
