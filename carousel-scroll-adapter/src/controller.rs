use carousel_scroll::{Direction, Easing, ScrollOptions};

use crate::{
    AnimateOutcome, FrameHandle, FrameOutcome, FrameScheduler, PendingScroll, Platform,
    ScrollTarget, animate, drive_frame,
};

/// A framework-neutral controller for one scrollable carousel.
///
/// This type does not hold the viewport. A carousel component owns one animator per scroll
/// container and drives it by calling:
/// - `scroll_by` / `scroll_page` on navigation input
/// - `on_frame(handle, ..)` for every frame the platform delivers
/// - `cancel` when the component unmounts
///
/// Starting a new scroll always supersedes the one in flight.
#[derive(Clone, Debug, Default)]
pub struct ScrollAnimator {
    options: ScrollOptions,
    pending: PendingScroll,
}

impl ScrollAnimator {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            pending: PendingScroll::new(),
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the options. A run already in flight keeps its own duration and easing.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
    }

    pub fn pending(&self) -> &PendingScroll {
        &self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn pending_handle(&self) -> Option<FrameHandle> {
        self.pending.handle()
    }

    /// The offset the run in flight is heading for.
    pub fn target_offset(&self) -> Option<u64> {
        self.pending.run().map(|r| r.target_offset())
    }

    /// Scrolls by `delta` pixels with the configured duration and easing.
    pub fn scroll_by<T, P>(
        &mut self,
        target: &mut T,
        platform: &mut P,
        delta: f64,
    ) -> AnimateOutcome
    where
        T: ScrollTarget + ?Sized,
        P: Platform + ?Sized,
    {
        let duration_ms = self.options.effective_duration_ms();
        let easing = self.options.easing;
        self.scroll_by_with(target, platform, delta, duration_ms, easing)
    }

    /// Scrolls by `delta` pixels with an explicit duration and easing.
    pub fn scroll_by_with<T, P>(
        &mut self,
        target: &mut T,
        platform: &mut P,
        delta: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> AnimateOutcome
    where
        T: ScrollTarget + ?Sized,
        P: Platform + ?Sized,
    {
        animate(target, delta, duration_ms, easing, &mut self.pending, platform)
    }

    /// Scrolls by `delta` pixels using an easing given by registry key.
    ///
    /// See [`Easing::from_name_or_default`] for how unknown keys are handled.
    pub fn scroll_by_named<T, P>(
        &mut self,
        target: &mut T,
        platform: &mut P,
        delta: f64,
        easing: &str,
    ) -> AnimateOutcome
    where
        T: ScrollTarget + ?Sized,
        P: Platform + ?Sized,
    {
        let duration_ms = self.options.effective_duration_ms();
        let easing = Easing::from_name_or_default(easing);
        self.scroll_by_with(target, platform, delta, duration_ms, easing)
    }

    /// Moves one page in `direction`: `page_ratio` of the visible width.
    pub fn scroll_page<T, P>(
        &mut self,
        target: &mut T,
        platform: &mut P,
        direction: Direction,
    ) -> AnimateOutcome
    where
        T: ScrollTarget + ?Sized,
        P: Platform + ?Sized,
    {
        let delta = target.metrics().map_or(0.0, |m| {
            direction.signum() * self.options.page_delta(m.viewport_extent)
        });
        self.scroll_by(target, platform, delta)
    }

    /// Delivers a frame requested by this animator.
    pub fn on_frame<T, P>(
        &mut self,
        handle: FrameHandle,
        target: &mut T,
        platform: &mut P,
    ) -> FrameOutcome
    where
        T: ScrollTarget + ?Sized,
        P: Platform + ?Sized,
    {
        drive_frame(handle, target, &mut self.pending, platform)
    }

    /// Stops the run in flight. Call this when the owning component goes away.
    ///
    /// Returns `true` when a pending frame was cancelled.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.pending.cancel(scheduler)
    }
}
