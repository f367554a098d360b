use carousel_scroll::ScrollRun;

use crate::{FrameHandle, FrameScheduler};

/// The in-flight run of one scroll target, plus the frame it is waiting on.
///
/// Owned by whoever owns the target (one slot per viewport). Starting a new run and tearing
/// the owner down both go through [`PendingScroll::cancel`], so a cancelled frame can never
/// write through to a viewport that moved on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingScroll {
    frame: Option<FrameHandle>,
    run: Option<ScrollRun>,
}

impl PendingScroll {
    pub const fn new() -> Self {
        Self {
            frame: None,
            run: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.frame.is_some()
    }

    pub fn handle(&self) -> Option<FrameHandle> {
        self.frame
    }

    pub fn run(&self) -> Option<&ScrollRun> {
        self.run.as_ref()
    }

    /// Cancels the pending frame, if any. Returns `true` when something was cancelled.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.run = None;
        match self.frame.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                strace!(handle = handle.id(), "PendingScroll::cancel");
                true
            }
            None => false,
        }
    }

    pub(crate) fn arm(&mut self, handle: FrameHandle, run: ScrollRun) {
        self.frame = Some(handle);
        self.run = Some(run);
    }

    /// Takes the run waiting on `handle`. Any other handle is stale and leaves the slot alone.
    pub(crate) fn take(&mut self, handle: FrameHandle) -> Option<ScrollRun> {
        if self.frame != Some(handle) {
            return None;
        }
        self.frame = None;
        self.run.take()
    }
}
