use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::prize::PrizeItem;
use crate::spin_api::SpinResponse;
use crate::spin_error::{SpinError, SpinRejected};
use crate::spin_strip::{strip_target_offset, tile_items, StripLayout};
use crate::spin_timer::{AnimationTimer, CubicBezier, Easing, TimerTick, Transition};
use crate::spin_upgrade::{landed_segment, upgrade_final_rotation, LandingBands, Multiplier};
use crate::spin_wheel::{next_cumulative, sample_jitter_degrees, WheelLayout};

pub const STRIP_EASING: CubicBezier = CubicBezier::new(0.12, 0.8, 0.32, 1.0);
pub const WHEEL_EASING: CubicBezier = CubicBezier::new(0.17, 0.67, 0.12, 0.99);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinVariant {
    Strip,
    Wheel,
    Upgrade,
}

impl SpinVariant {
    pub fn duration_ms(self) -> u32 {
        match self {
            SpinVariant::Strip => STRIP_SPIN_DURATION_MS,
            SpinVariant::Wheel => WHEEL_SPIN_DURATION_MS,
            SpinVariant::Upgrade => UPGRADE_SPIN_DURATION_MS,
        }
    }

    pub fn easing(self) -> Easing {
        match self {
            SpinVariant::Strip => Easing::Bezier(STRIP_EASING),
            SpinVariant::Wheel => Easing::Bezier(WHEEL_EASING),
            SpinVariant::Upgrade => Easing::EaseOutCubic,
        }
    }

    /// Index used when the backend embeds the winner at a fixed position.
    pub fn fallback_winning_index(self) -> Option<usize> {
        match self {
            SpinVariant::Strip => Some(STRIP_FALLBACK_WINNING_INDEX),
            SpinVariant::Wheel => Some(WHEEL_FALLBACK_WINNING_INDEX),
            SpinVariant::Upgrade => None,
        }
    }

    /// Whether the balance is charged by the spin request itself.
    pub fn deducts_on_start(self) -> bool {
        matches!(self, SpinVariant::Strip | SpinVariant::Wheel)
    }

    /// Whether dismissing a result asks the backend for a fresh candidate list.
    pub fn refetch_on_dismiss(self) -> bool {
        matches!(self, SpinVariant::Strip | SpinVariant::Upgrade)
    }

    pub fn is_wheel(self) -> bool {
        matches!(self, SpinVariant::Wheel | SpinVariant::Upgrade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinGeometry {
    Strip(StripLayout),
    Wheel(WheelLayout),
    Upgrade { layout: WheelLayout, multiplier: Multiplier },
}

impl SpinGeometry {
    pub fn variant(&self) -> SpinVariant {
        match self {
            SpinGeometry::Strip(_) => SpinVariant::Strip,
            SpinGeometry::Wheel(_) => SpinVariant::Wheel,
            SpinGeometry::Upgrade { .. } => SpinVariant::Upgrade,
        }
    }
}

/// How the backend declared the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Index(usize),
    Upgrade { is_win: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub balance: Option<f64>,
    pub candidates: Vec<PrizeItem>,
    pub landing: Landing,
}

/// A backend reply that made it onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartedSpin {
    pub target_offset: f64,
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionTick {
    Idle,
    Animating(f64),
    Revealed(PrizeItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// A spin is still animating; nothing was reset.
    Ignored,
    Reset { refetch_candidates: bool },
}

/// Per-spin state for one visual surface.
#[derive(Debug)]
pub struct SpinSession {
    geometry: SpinGeometry,
    candidate_items: Vec<PrizeItem>,
    pending_candidates: Option<Vec<PrizeItem>>,
    winning_index: Option<usize>,
    winning_item: Option<PrizeItem>,
    is_animating: bool,
    current_offset: f64,
    target_offset: f64,
    resting_rotation: f64,
    revealed_result: Option<PrizeItem>,
    timer: AnimationTimer,
}

impl SpinSession {
    pub fn new(geometry: SpinGeometry) -> Self {
        Self {
            geometry,
            candidate_items: Vec::new(),
            pending_candidates: None,
            winning_index: None,
            winning_item: None,
            is_animating: false,
            current_offset: 0.0,
            target_offset: 0.0,
            resting_rotation: 0.0,
            revealed_result: None,
            timer: AnimationTimer::new(),
        }
    }

    pub fn variant(&self) -> SpinVariant {
        self.geometry.variant()
    }

    pub fn geometry(&self) -> &SpinGeometry {
        &self.geometry
    }

    /// Swaps layout or multiplier between spins; refused mid-animation.
    pub fn set_geometry(&mut self, geometry: SpinGeometry) -> Result<(), SpinRejected> {
        if self.is_animating {
            return Err(SpinRejected::AlreadyAnimating);
        }
        self.geometry = geometry;
        Ok(())
    }

    pub fn candidates(&self) -> &[PrizeItem] {
        &self.candidate_items
    }

    /// Replaces the displayed list. While a spin animates the new list is
    /// held back until dismissal so index arithmetic stays valid.
    pub fn set_candidates(&mut self, items: Vec<PrizeItem>) {
        if self.is_animating {
            log::debug!("Deferring candidate refresh until the current spin is dismissed");
            self.pending_candidates = Some(items);
        } else {
            self.candidate_items = items;
        }
    }

    pub fn tiled_strip(&self) -> Vec<PrizeItem> {
        tile_items(&self.candidate_items, STRIP_REPETITIONS)
    }

    pub fn can_spin(&self) -> bool {
        !self.is_animating
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn winning_index(&self) -> Option<usize> {
        self.winning_index
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn revealed_result(&self) -> Option<&PrizeItem> {
        self.revealed_result.as_ref()
    }

    /// Value to render. Idle wheels keep showing where they last stopped.
    pub fn display_offset(&self) -> f64 {
        if !self.is_animating && self.revealed_result.is_none() && self.variant().is_wheel() {
            self.resting_rotation
        } else {
            self.current_offset
        }
    }

    /// Starts the animation for a backend-confirmed outcome. Returns the target offset.
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        outcome: SpinOutcome,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<f64, SpinRejected> {
        if self.is_animating {
            log::debug!("Spin rejected: previous spin still animating");
            return Err(SpinRejected::AlreadyAnimating);
        }
        let candidates = outcome.candidates;
        if candidates.is_empty() {
            return Err(SpinRejected::NoCandidates);
        }
        let len = candidates.len();

        let (winning_index, from, target) = match (self.geometry, outcome.landing) {
            (SpinGeometry::Strip(layout), Landing::Index(index)) => {
                if index >= len {
                    return Err(SpinRejected::IndexOutOfRange { index, len });
                }
                let jitter = layout.sample_jitter(rng);
                (index, 0.0, strip_target_offset(&layout, len, index, STRIP_TARGET_COPY, jitter))
            }
            (SpinGeometry::Wheel(layout), Landing::Index(index)) => {
                if index >= len {
                    return Err(SpinRejected::IndexOutOfRange { index, len });
                }
                let jitter = sample_jitter_degrees(len, rng);
                let cumulative = next_cumulative(self.resting_rotation);
                let target = layout.final_rotation(len, index, cumulative, jitter);
                (index, self.resting_rotation, target)
            }
            (SpinGeometry::Upgrade { layout, multiplier }, Landing::Upgrade { is_win }) => {
                if len != multiplier.segments() {
                    return Err(SpinRejected::LandingMismatch);
                }
                let landing = LandingBands::new(multiplier).sample(is_win, rng);
                let cumulative = next_cumulative(self.resting_rotation);
                let target = upgrade_final_rotation(&layout, landing, cumulative);
                let index = landed_segment(&layout, multiplier, target).ok_or(SpinRejected::NoCandidates)?;
                (index, self.resting_rotation, target)
            }
            _ => return Err(SpinRejected::LandingMismatch),
        };

        let variant = self.variant();
        self.timer.start(
            Transition {
                from,
                to: target,
                duration_ms: variant.duration_ms(),
                easing: variant.easing(),
            },
            now_ms,
        )?;

        self.winning_item = Some(candidates[winning_index].clone());
        self.candidate_items = candidates;
        self.pending_candidates = None;
        self.winning_index = Some(winning_index);
        self.revealed_result = None;
        self.current_offset = from;
        self.target_offset = target;
        self.is_animating = true;

        log::debug!(
            "{:?} spin started: index {} of {}, offset {:.2} -> {:.2}",
            variant,
            winning_index,
            len,
            from,
            target
        );
        Ok(target)
    }

    /// Applies the reply to a spin request. A failed or unusable reply leaves
    /// the session exactly as it was; the caller shows `user_message()`.
    pub fn begin_from_reply<R: Rng + ?Sized>(
        &mut self,
        reply: Result<SpinOutcome, SpinError>,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<StartedSpin, SpinError> {
        let outcome = reply.map_err(|err| {
            log::warn!("{:?} spin failed [{}]: {}", self.variant(), err.code(), err);
            err
        })?;
        let balance = outcome.balance;
        match self.begin(outcome, rng, now_ms) {
            Ok(target_offset) => Ok(StartedSpin { target_offset, balance }),
            Err(rejected) => {
                log::error!("{:?} spin confirmed by backend but not started: {}", self.variant(), rejected);
                Err(rejected.into())
            }
        }
    }

    /// Strip and wheel replies: resolves the winner, then starts.
    pub fn begin_from_response<R: Rng + ?Sized>(
        &mut self,
        reply: Result<SpinResponse, SpinError>,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<StartedSpin, SpinError> {
        let variant = self.variant();
        self.begin_from_reply(reply.and_then(|response| response.into_outcome(variant)), rng, now_ms)
    }

    /// Upgrade replies. The wheel is switched to the multiplier the request was
    /// sent with, so a picker change while the request was in flight cannot
    /// drop an outcome the backend already committed.
    pub fn begin_upgrade<R: Rng + ?Sized>(
        &mut self,
        multiplier: Multiplier,
        reply: Result<SpinOutcome, SpinError>,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<StartedSpin, SpinError> {
        if reply.is_ok() && self.can_spin() {
            let layout = match self.geometry {
                SpinGeometry::Upgrade { layout, .. } => layout,
                _ => WheelLayout::default(),
            };
            self.set_geometry(SpinGeometry::Upgrade { layout, multiplier })?;
        }
        self.begin_from_reply(reply, rng, now_ms)
    }

    pub fn tick(&mut self, now_ms: f64) -> SessionTick {
        match self.timer.tick(now_ms) {
            TimerTick::Idle => SessionTick::Idle,
            TimerTick::Running(value) => {
                self.current_offset = value;
                SessionTick::Animating(value)
            }
            TimerTick::Completed(value) => {
                self.current_offset = value;
                match self.reveal() {
                    Some(item) => SessionTick::Revealed(item),
                    None => SessionTick::Idle,
                }
            }
        }
    }

    /// Publishes the item captured when the spin started.
    fn reveal(&mut self) -> Option<PrizeItem> {
        self.is_animating = false;
        if self.variant().is_wheel() {
            self.resting_rotation = self.current_offset;
        }
        self.revealed_result = self.winning_item.clone();
        if let Some(item) = &self.revealed_result {
            log::info!("Spin finished on {:?}", item.title());
        }
        self.revealed_result.clone()
    }

    pub fn dismiss(&mut self) -> DismissOutcome {
        if self.is_animating {
            return DismissOutcome::Ignored;
        }
        let had_result = self.revealed_result.take().is_some();
        self.current_offset = 0.0;
        self.target_offset = 0.0;
        self.winning_index = None;
        self.winning_item = None;
        self.is_animating = false;
        if let Some(items) = self.pending_candidates.take() {
            self.candidate_items = items;
        }
        DismissOutcome::Reset {
            refetch_candidates: had_result && self.variant().refetch_on_dismiss(),
        }
    }
}
