use crate::{Completion, Easing, RunFrame, ScrollMetrics};

/// A single animated scroll from the offset at call time toward a relative target.
///
/// A run is a plain value: it never touches the viewport. The adapter samples it once per
/// frame with the current time and writes the returned offset itself. Every sample is computed
/// from the same `start_ms`/`start_offset`, so a run replays identically under a fixed clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRun {
    start_offset: u64,
    target_offset: u64,
    delta: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl ScrollRun {
    /// Starts a run at `start_ms` from `start_offset`, moving by `delta` pixels.
    ///
    /// Positive deltas move toward higher offsets ("next"), negative toward lower ones.
    pub fn new(
        start_offset: u64,
        delta: f64,
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        debug_assert!(delta.is_finite(), "scroll delta must be finite (got {delta})");
        let delta = if delta.is_finite() { delta } else { 0.0 };
        let target_offset = Self::target_for(start_offset, delta);
        strace!(start_offset, target_offset, duration_ms, "ScrollRun::new");
        Self {
            start_offset,
            target_offset,
            delta,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// The absolute offset a run started at `start_offset` with `delta` aims for.
    ///
    /// Targets at or below zero clamp to `0`; everything else rounds to the nearest pixel.
    pub fn target_for(start_offset: u64, delta: f64) -> u64 {
        let raw = start_offset as f64 + delta;
        if raw <= 0.0 { 0 } else { round_px(raw) }
    }

    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    pub fn target_offset(&self) -> u64 {
        self.target_offset
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_forward(&self) -> bool {
        self.delta > 0.0
    }

    /// Returns `true` when the run has no time budget and should jump straight to its target.
    pub fn is_instant(&self) -> bool {
        !(self.duration_ms.is_finite() && self.duration_ms > 0.0)
    }

    /// Normalized elapsed time in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.is_instant() {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// The offset for normalized time `t`, rounded up to a whole pixel.
    ///
    /// At `t = 1` this is exactly `target_offset`, however many times it is evaluated.
    pub fn offset_for_progress(&self, t: f64) -> u64 {
        let start = self.start_offset as f64;
        let span = self.target_offset as f64 - start;
        ceil_px(self.easing.sample(t) * span + start)
    }

    pub fn offset_at(&self, now_ms: f64) -> u64 {
        self.offset_for_progress(self.progress(now_ms))
    }

    /// Samples the run at `now_ms`, never past `max_offset`.
    pub fn step(&self, now_ms: f64, max_offset: u64) -> RunFrame {
        let progress = self.progress(now_ms);
        RunFrame {
            offset: self.offset_for_progress(progress).min(max_offset),
            progress,
        }
    }

    /// The offset an instant jump lands on for a viewport that stops at `max_offset`.
    pub fn end_offset(&self, max_offset: u64) -> u64 {
        self.target_offset.min(max_offset)
    }

    /// Decides whether the run is over after a frame was applied.
    ///
    /// `current` must be read back from the viewport after the write, since the viewport may
    /// have clamped it.
    pub fn completion(&self, current: &ScrollMetrics, progress: f64) -> Option<Completion> {
        if current.offset == self.target_offset {
            Some(Completion::Target)
        } else if self.is_forward() && current.at_end() {
            Some(Completion::Edge)
        } else if progress >= 1.0 {
            Some(Completion::Elapsed)
        } else {
            None
        }
    }
}

/// Rounds a positive pixel value half-up.
pub(crate) fn round_px(v: f64) -> u64 {
    if !(v > 0.0) {
        return 0;
    }
    let floor = v as u64;
    if v - floor as f64 >= 0.5 {
        floor.saturating_add(1)
    } else {
        floor
    }
}

/// Rounds a pixel value up, saturating negatives and NaN to `0`.
fn ceil_px(v: f64) -> u64 {
    if !(v > 0.0) {
        return 0;
    }
    let floor = v as u64;
    if (floor as f64) < v {
        floor.saturating_add(1)
    } else {
        floor
    }
}
