use alloc::collections::VecDeque;

/// Identifies one requested animation frame (the `requestAnimationFrame` id of a browser host).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A millisecond time source. Hosts should prefer a monotonic, high-resolution clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Schedules callbacks ahead of the next repaint.
///
/// The scheduler only hands out handles; the host is responsible for calling back into the
/// animator with each handle when its frame comes due.
pub trait FrameScheduler {
    /// Returns `false` when the environment has no frame scheduling at all. Animations then
    /// jump straight to their end offset.
    fn is_supported(&self) -> bool {
        true
    }

    /// Requests one frame. `None` means no frame will be delivered.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancels a previously requested frame. Unknown or already delivered handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything the animator needs from its environment.
pub trait Platform: Clock + FrameScheduler {}

impl<T: Clock + FrameScheduler + ?Sized> Platform for T {}

/// Combines a separate clock and scheduler into a [`Platform`].
#[derive(Clone, Debug, Default)]
pub struct Env<C, S> {
    pub clock: C,
    pub frames: S,
}

impl<C, S> Env<C, S> {
    pub fn new(clock: C, frames: S) -> Self {
        Self { clock, frames }
    }
}

impl<C: Clock, S> Clock for Env<C, S> {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

impl<C, S: FrameScheduler> FrameScheduler for Env<C, S> {
    fn is_supported(&self) -> bool {
        self.frames.is_supported()
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.cancel_frame(handle);
    }
}

/// Monotonic clock measured from its creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Wall-clock milliseconds since the Unix epoch, for hosts without a monotonic timer.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

#[cfg(feature = "std")]
impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// A clock that only moves when told to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// A frame queue the host (or a test) drains by hand.
///
/// Requested handles are delivered in request order by [`ManualFrames::next_due`]; cancelled
/// handles are removed and never delivered.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next_id: u64,
    queue: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops the next frame to deliver.
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Number of frames requested and not yet delivered or cancelled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.queue.push_back(handle);
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queue.len();
        self.queue.retain(|h| *h != handle);
        if self.queue.len() != before {
            self.cancelled += 1;
        }
    }
}

/// An environment without frame scheduling.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFrames;

impl FrameScheduler for NoFrames {
    fn is_supported(&self) -> bool {
        false
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        None
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}
