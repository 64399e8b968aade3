use crate::data::dataset::PointRecord;
use crate::foundation::core::{FrameNumber, Limits};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use crate::foundation::math::ceil_steps;

/// Half-open time interval `(start, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Exclusive lower bound.
    pub start: f64,
    /// Inclusive upper bound.
    pub end: f64,
}

impl TimeWindow {
    /// Return `true` when `start < t <= end`.
    pub fn contains(self, t: f64) -> bool {
        self.start < t && t <= self.end
    }
}

/// Contiguous, non-overlapping windows covering a time interval with a fixed step.
///
/// Window `k` (0-based) spans `(b(k), b(k+1)]` with `b(k) = t_start + k * step`. Boundaries are
/// computed by multiplication so adjacent windows share the exact same boundary value. The last
/// window always reaches `t_end`, so every point in `(t_start, t_end]` lands in exactly one window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    start: f64,
    end: f64,
    step: f64,
    frames: u32,
}

impl Timeline {
    /// Build the window sequence for `tlim` advancing by `step`.
    ///
    /// The frame count is `ceil((t_end - t_start) / step)`.
    pub fn new(tlim: Limits, step: f64) -> AnimatorResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(AnimatorError::validation(format!(
                "time step must be finite and > 0 (got {step})"
            )));
        }
        let frames = ceil_steps(tlim.span(), step);
        let frames = u32::try_from(frames).map_err(|_| {
            AnimatorError::validation(format!("time step {step} yields too many frames"))
        })?;
        Ok(Self {
            start: tlim.min,
            end: tlim.max,
            step,
            frames,
        })
    }

    /// Number of windows (and therefore frames).
    pub fn len(&self) -> u32 {
        self.frames
    }

    /// Return `true` when there are no windows.
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Step between window starts.
    pub fn step(&self) -> f64 {
        self.step
    }

    fn boundary(&self, k: u32) -> f64 {
        self.start + f64::from(k) * self.step
    }

    /// Window for 1-based frame `n`, or `None` when out of range.
    pub fn window(&self, n: FrameNumber) -> Option<TimeWindow> {
        if n.0 == 0 || n.0 > self.frames {
            return None;
        }
        let k = n.0 - 1;
        let mut end = self.boundary(k + 1);
        if n.0 == self.frames {
            end = end.max(self.end);
        }
        Some(TimeWindow {
            start: self.boundary(k),
            end,
        })
    }

    /// All windows in order, paired with their frame numbers.
    pub fn windows(&self) -> impl Iterator<Item = (FrameNumber, TimeWindow)> + '_ {
        (1..=self.frames).filter_map(|n| {
            let n = FrameNumber(n);
            self.window(n).map(|w| (n, w))
        })
    }

    /// Points of `sorted` (ascending by time) that fall in `window`.
    pub fn select(sorted: &[PointRecord], window: TimeWindow) -> &[PointRecord] {
        let lo = sorted.partition_point(|p| p.t <= window.start);
        let hi = sorted.partition_point(|p| p.t <= window.end);
        &sorted[lo..hi.max(lo)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
