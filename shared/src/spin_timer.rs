use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spin_error::SpinRejected;

/// `cubic-bezier(x1, y1, x2, y2)` timing function, evaluated in Rust.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Parameter `t` whose x coordinate equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-7 {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    pub fn ease(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(progress))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    Bezier(CubicBezier),
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

impl Easing {
    pub fn apply(&self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => progress,
            Easing::EaseOutCubic => ease_out_cubic(progress),
            Easing::Bezier(curve) => curve.ease(progress),
        }
    }
}

/// One timed move from `from` to `to`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return self.to;
        }
        let progress = elapsed_ms / self.duration_ms as f64;
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerTick {
    Idle,
    Running(f64),
    /// Emitted once per transition, on the first tick at or after its duration.
    Completed(f64),
}

struct ActiveTransition {
    transition: Transition,
    started_at_ms: f64,
    on_complete: Option<Box<dyn FnOnce(f64)>>,
}

/// Drives a single transition at a time on a caller-supplied millisecond clock.
/// Not cancellable: a started transition always runs to completion.
#[derive(Default)]
pub struct AnimationTimer {
    active: Option<ActiveTransition>,
}

impl fmt::Debug for AnimationTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationTimer")
            .field("transition", &self.active.as_ref().map(|a| a.transition))
            .field("started_at_ms", &self.active.as_ref().map(|a| a.started_at_ms))
            .finish()
    }
}

impl AnimationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref().map(|a| &a.transition)
    }

    pub fn start(&mut self, transition: Transition, now_ms: f64) -> Result<(), SpinRejected> {
        self.start_inner(transition, now_ms, None)
    }

    pub fn start_with<F>(&mut self, transition: Transition, now_ms: f64, on_complete: F) -> Result<(), SpinRejected>
    where
        F: FnOnce(f64) + 'static,
    {
        self.start_inner(transition, now_ms, Some(Box::new(on_complete)))
    }

    fn start_inner(
        &mut self,
        transition: Transition,
        now_ms: f64,
        on_complete: Option<Box<dyn FnOnce(f64)>>,
    ) -> Result<(), SpinRejected> {
        if self.active.is_some() {
            log::debug!("Ignoring transition start while another is running");
            return Err(SpinRejected::AlreadyAnimating);
        }
        self.active = Some(ActiveTransition {
            transition,
            started_at_ms: now_ms,
            on_complete,
        });
        Ok(())
    }

    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.active.as_ref().map(|a| {
            (a.started_at_ms + a.transition.duration_ms as f64 - now_ms).max(0.0)
        })
    }

    pub fn tick(&mut self, now_ms: f64) -> TimerTick {
        let Some(active) = &self.active else {
            return TimerTick::Idle;
        };
        let elapsed = now_ms - active.started_at_ms;
        if elapsed < active.transition.duration_ms as f64 {
            return TimerTick::Running(active.transition.value_at(elapsed.max(0.0)));
        }

        let Some(finished) = self.active.take() else {
            return TimerTick::Idle;
        };
        let value = finished.transition.to;
        if let Some(on_complete) = finished.on_complete {
            on_complete(value);
        }
        TimerTick::Completed(value)
    }
}
