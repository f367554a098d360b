/// A snapshot of a horizontally scrollable viewport.
///
/// Extents are in device pixels along the scroll axis:
/// - `content_extent` is the full scrollable width (DOM `scrollWidth`)
/// - `viewport_extent` is the visible width (DOM `clientWidth`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset: u64,
    pub content_extent: u64,
    pub viewport_extent: u64,
}

impl ScrollMetrics {
    pub fn new(offset: u64, content_extent: u64, viewport_extent: u64) -> Self {
        Self {
            offset,
            content_extent,
            viewport_extent,
        }
    }

    /// The largest offset the viewport can scroll to.
    pub fn max_offset(&self) -> u64 {
        self.content_extent.saturating_sub(self.viewport_extent)
    }

    /// Returns `true` when scrolling any further forward is impossible.
    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn clamp_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_offset())
    }
}

/// Why an animation run stopped. Every variant is a normal completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completion {
    /// The viewport reached the run's target offset.
    Target,
    /// A forward run hit the end of the scrollable extent before its target.
    Edge,
    /// Time ran out while the viewport held the offset short of the target.
    Elapsed,
}

/// Carousel navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn signum(self) -> f64 {
        match self {
            Self::Previous => -1.0,
            Self::Next => 1.0,
        }
    }
}

/// One sampled frame of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunFrame {
    /// Offset to write to the viewport.
    pub offset: u64,
    /// Normalized elapsed time, in `[0, 1]`.
    pub progress: f64,
}
