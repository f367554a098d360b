use alloc::vec::Vec;

use carousel_scroll::ScrollMetrics;

/// A horizontally scrollable viewport the animator writes to.
///
/// The animator borrows a target for the duration of a single call and never stores it, so a
/// component can drop its viewport between frames as long as it cancels the pending frame.
pub trait ScrollTarget {
    /// The current geometry, or `None` once the viewport is detached.
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Sets the scroll offset through the element's plain setter (DOM `scrollLeft`).
    fn set_scroll_offset(&mut self, offset: u64);

    /// Sets the scroll offset through the fastest direct path available (DOM `scroll(x, 0)`).
    ///
    /// Defaults to [`ScrollTarget::set_scroll_offset`].
    fn scroll_to(&mut self, offset: u64) {
        self.set_scroll_offset(offset);
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &mut T {
    fn metrics(&self) -> Option<ScrollMetrics> {
        (**self).metrics()
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        (**self).set_scroll_offset(offset);
    }

    fn scroll_to(&mut self, offset: u64) {
        (**self).scroll_to(offset);
    }
}

/// An in-memory viewport that clamps writes like a browser scroll container.
///
/// Useful for headless hosts, simulations and tests. Every applied offset is recorded.
#[derive(Clone, Debug)]
pub struct ViewportModel {
    offset: u64,
    content_extent: u64,
    viewport_extent: u64,
    attached: bool,
    direct_set: bool,
    direct_writes: usize,
    plain_writes: usize,
    history: Vec<u64>,
}

impl ViewportModel {
    pub fn new(content_extent: u64, viewport_extent: u64) -> Self {
        Self {
            offset: 0,
            content_extent,
            viewport_extent,
            attached: true,
            direct_set: true,
            direct_writes: 0,
            plain_writes: 0,
            history: Vec::new(),
        }
    }

    /// Starts at `offset` (clamped), without recording a write.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset.min(self.max_offset());
        self
    }

    /// Whether the model exposes the direct-set path (`scroll_to`).
    pub fn with_direct_set(mut self, direct_set: bool) -> Self {
        self.direct_set = direct_set;
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn max_offset(&self) -> u64 {
        self.content_extent.saturating_sub(self.viewport_extent)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Changes the content width, e.g. when items are removed. The offset re-clamps.
    pub fn set_content_extent(&mut self, content_extent: u64) {
        self.content_extent = content_extent;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u64) {
        self.viewport_extent = viewport_extent;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Every offset applied through either setter, in order.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    pub fn direct_writes(&self) -> usize {
        self.direct_writes
    }

    pub fn plain_writes(&self) -> usize {
        self.plain_writes
    }

    fn apply(&mut self, offset: u64) {
        self.offset = offset.min(self.max_offset());
        self.history.push(self.offset);
    }
}

impl ScrollTarget for ViewportModel {
    fn metrics(&self) -> Option<ScrollMetrics> {
        self.attached.then(|| {
            ScrollMetrics::new(self.offset, self.content_extent, self.viewport_extent)
        })
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        if !self.attached {
            return;
        }
        self.plain_writes += 1;
        self.apply(offset);
    }

    fn scroll_to(&mut self, offset: u64) {
        if !self.direct_set {
            self.set_scroll_offset(offset);
            return;
        }
        if !self.attached {
            return;
        }
        self.direct_writes += 1;
        self.apply(offset);
    }
}
