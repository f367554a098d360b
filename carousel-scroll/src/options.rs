use crate::Easing;
use crate::run::round_px;

/// Configuration for an animated scroll controller.
///
/// With `feature = "serde"`, missing fields fall back to [`ScrollOptions::default`], so a
/// config file only needs to name what it overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// When `false`, every scroll jumps straight to its target.
    pub smooth: bool,
    /// Time budget for one animated scroll, in milliseconds.
    pub duration_ms: f64,
    pub easing: Easing,
    /// Fraction of the visible width moved by one page of carousel navigation.
    pub page_ratio: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            smooth: true,
            duration_ms: 300.0,
            easing: Easing::default(),
            page_ratio: 1.0,
        }
    }
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_page_ratio(mut self, page_ratio: f64) -> Self {
        self.page_ratio = page_ratio;
        self
    }

    /// The duration to actually animate with: `0` when smoothing is off.
    pub fn effective_duration_ms(&self) -> f64 {
        if self.smooth { self.duration_ms } else { 0.0 }
    }

    /// The unsigned pixel distance of one navigation page across a viewport
    /// `viewport_extent` wide. Non-positive or non-finite ratios count as `1.0`.
    pub fn page_delta(&self, viewport_extent: u64) -> f64 {
        let ratio = if self.page_ratio.is_finite() && self.page_ratio > 0.0 {
            self.page_ratio
        } else {
            1.0
        };
        round_px(viewport_extent as f64 * ratio) as f64
    }
}
