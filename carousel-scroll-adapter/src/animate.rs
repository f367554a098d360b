use carousel_scroll::{Completion, Easing, ScrollMetrics, ScrollRun};

use crate::{FrameHandle, PendingScroll, Platform, ScrollTarget};

/// Result of starting an animated scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimateOutcome {
    /// The target was detached. Nothing was written.
    Detached,
    /// No time budget or no frame scheduling: the target jumped straight to its end offset.
    Jumped { offset: u64 },
    /// The first frame was applied and the next one is scheduled.
    Scheduled { handle: FrameHandle, offset: u64 },
    /// The run finished on its first frame.
    Completed { offset: u64, completion: Completion },
}

/// Result of delivering one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameOutcome {
    /// The handle is not the one the slot is waiting on (cancelled or superseded).
    Stale,
    /// The target went away mid-run. The run is dropped.
    Detached,
    Continue { handle: FrameHandle, offset: u64 },
    Completed { offset: u64, completion: Completion },
}

impl FrameOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Continue { .. })
    }
}

/// Animates `target` by `delta` pixels relative to its current offset.
///
/// Any run already pending in `pending` is cancelled first. The first frame is evaluated
/// synchronously; later frames are driven by passing each delivered handle to [`drive_frame`].
pub fn animate<T, P>(
    target: &mut T,
    delta: f64,
    duration_ms: f64,
    easing: Easing,
    pending: &mut PendingScroll,
    platform: &mut P,
) -> AnimateOutcome
where
    T: ScrollTarget + ?Sized,
    P: Platform + ?Sized,
{
    pending.cancel(platform);

    let Some(metrics) = target.metrics() else {
        strace!("animate: target detached");
        return AnimateOutcome::Detached;
    };

    let run = ScrollRun::new(metrics.offset, delta, platform.now_ms(), duration_ms, easing);

    if run.is_instant() || !platform.is_supported() {
        let offset = jump(target, &run, &metrics);
        sdebug!(offset, "animate: jumped without animation");
        return AnimateOutcome::Jumped { offset };
    }

    match advance(run, target, pending, platform) {
        FrameOutcome::Continue { handle, offset } => AnimateOutcome::Scheduled { handle, offset },
        FrameOutcome::Completed { offset, completion } => {
            AnimateOutcome::Completed { offset, completion }
        }
        FrameOutcome::Detached | FrameOutcome::Stale => AnimateOutcome::Detached,
    }
}

/// Delivers the frame `handle` to the run waiting in `pending`.
pub fn drive_frame<T, P>(
    handle: FrameHandle,
    target: &mut T,
    pending: &mut PendingScroll,
    platform: &mut P,
) -> FrameOutcome
where
    T: ScrollTarget + ?Sized,
    P: Platform + ?Sized,
{
    let Some(run) = pending.take(handle) else {
        strace!(handle = handle.id(), "drive_frame: stale handle");
        return FrameOutcome::Stale;
    };
    advance(run, target, pending, platform)
}

fn advance<T, P>(
    run: ScrollRun,
    target: &mut T,
    pending: &mut PendingScroll,
    platform: &mut P,
) -> FrameOutcome
where
    T: ScrollTarget + ?Sized,
    P: Platform + ?Sized,
{
    let Some(before) = target.metrics() else {
        strace!("advance: target detached");
        return FrameOutcome::Detached;
    };

    let frame = run.step(platform.now_ms(), before.max_offset());
    target.scroll_to(frame.offset);

    let Some(current) = target.metrics() else {
        return FrameOutcome::Detached;
    };
    strace!(offset = current.offset, progress = frame.progress, "advance");

    if let Some(completion) = run.completion(&current, frame.progress) {
        return FrameOutcome::Completed {
            offset: current.offset,
            completion,
        };
    }

    match platform.request_frame() {
        Some(handle) => {
            pending.arm(handle, run);
            FrameOutcome::Continue {
                handle,
                offset: current.offset,
            }
        }
        None => {
            // Frames stopped coming: finish in place.
            let offset = jump(target, &run, &current);
            sdebug!(offset, "advance: frame request refused, jumped to end");
            let completion = target
                .metrics()
                .and_then(|m| run.completion(&m, 1.0))
                .unwrap_or(Completion::Elapsed);
            FrameOutcome::Completed { offset, completion }
        }
    }
}

fn jump<T: ScrollTarget + ?Sized>(target: &mut T, run: &ScrollRun, metrics: &ScrollMetrics) -> u64 {
    let offset = run.end_offset(metrics.max_offset());
    target.scroll_to(offset);
    target.metrics().map_or(offset, |m| m.offset)
}
