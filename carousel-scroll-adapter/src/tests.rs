use crate::*;

use std::vec::Vec;

type TestEnv = Env<ManualClock, ManualFrames>;

const FRAME_MS: f64 = 16.0;

fn env_at(now_ms: f64) -> TestEnv {
    Env::new(ManualClock::new(now_ms), ManualFrames::new())
}

/// Delivers frames every `FRAME_MS` until the queue runs dry.
fn drain(a: &mut ScrollAnimator, view: &mut ViewportModel, env: &mut TestEnv) -> Vec<FrameOutcome> {
    let mut out = Vec::new();
    while let Some(handle) = env.frames.next_due() {
        env.clock.advance(FRAME_MS);
        out.push(a.on_frame(handle, view, env));
        assert!(out.len() < 10_000, "run never terminated");
    }
    out
}

fn scheduled_handle(outcome: AnimateOutcome) -> FrameHandle {
    match outcome {
        AnimateOutcome::Scheduled { handle, .. } => handle,
        other => panic!("expected a scheduled run, got {other:?}"),
    }
}

#[test]
fn linear_run_reaches_half_distance_at_half_time() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(2_000, 400);
    let mut pending = PendingScroll::new();

    let started = animate(&mut view, 300.0, 200.0, Easing::Linear, &mut pending, &mut env);
    assert_eq!(started, AnimateOutcome::Scheduled {
        handle: FrameHandle::new(1),
        offset: 0
    });

    env.clock.set(100.0);
    let handle = env.frames.next_due().unwrap();
    match drive_frame(handle, &mut view, &mut pending, &mut env) {
        FrameOutcome::Continue { offset, .. } => assert!((149..=151).contains(&offset)),
        other => panic!("unexpected {other:?}"),
    }

    env.clock.set(200.0);
    let handle = env.frames.next_due().unwrap();
    assert_eq!(
        drive_frame(handle, &mut view, &mut pending, &mut env),
        FrameOutcome::Completed {
            offset: 300,
            completion: Completion::Target
        }
    );
    assert!(!pending.is_pending());
    assert_eq!(env.frames.pending(), 0);
}

#[test]
fn backward_run_clamps_at_zero_without_negative_frames() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(2_000, 400).with_offset(500);
    let mut a = ScrollAnimator::default();

    scheduled_handle(a.scroll_by(&mut view, &mut env, -600.0));
    assert_eq!(a.target_offset(), Some(0));

    let outcomes = drain(&mut a, &mut view, &mut env);
    assert_eq!(
        outcomes.last(),
        Some(&FrameOutcome::Completed {
            offset: 0,
            completion: Completion::Target
        })
    );
    for pair in view.history().windows(2) {
        assert!(pair[1] <= pair[0], "moved forward: {pair:?}");
    }
    assert_eq!(view.offset(), 0);
}

#[test]
fn missing_frame_scheduling_jumps_synchronously() {
    let mut env = Env::new(ManualClock::new(0.0), NoFrames);
    let mut view = ViewportModel::new(2_000, 400).with_offset(100);
    let mut pending = PendingScroll::new();

    let outcome = animate(&mut view, 250.0, 300.0, Easing::EaseInOutQuad, &mut pending, &mut env);
    assert_eq!(outcome, AnimateOutcome::Jumped { offset: 350 });
    assert_eq!(view.history(), &[350]);
    assert!(!pending.is_pending());
}

#[test]
fn forward_run_stops_early_at_the_scroll_extent() {
    let mut env = env_at(0.0);
    // Only 120px of scrollable extent.
    let mut view = ViewportModel::new(520, 400);
    let mut a = ScrollAnimator::default();

    scheduled_handle(a.scroll_by_with(&mut view, &mut env, 300.0, 200.0, Easing::Linear));
    let outcomes = drain(&mut a, &mut view, &mut env);

    assert_eq!(
        outcomes.last(),
        Some(&FrameOutcome::Completed {
            offset: 120,
            completion: Completion::Edge
        })
    );
    assert!(view.history().iter().all(|&off| off <= 120));
    assert!(env.clock.now_ms() < 200.0, "ran the full duration");
    assert!(!a.is_animating());
}

#[test]
fn forward_run_stops_when_content_shrinks_mid_run() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(2_000, 400);
    let mut a = ScrollAnimator::default();

    let started = a.scroll_by_with(&mut view, &mut env, 300.0, 300.0, Easing::Linear);
    let mut handle = scheduled_handle(started);
    for _ in 0..2 {
        assert_eq!(env.frames.next_due(), Some(handle));
        env.clock.advance(FRAME_MS);
        match a.on_frame(handle, &mut view, &mut env) {
            FrameOutcome::Continue { handle: next, .. } => handle = next,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(env.frames.next_due(), Some(handle));
    assert_eq!(view.offset(), 32);

    view.set_content_extent(440);
    env.clock.advance(FRAME_MS);
    assert_eq!(
        a.on_frame(handle, &mut view, &mut env),
        FrameOutcome::Completed {
            offset: 40,
            completion: Completion::Edge
        }
    );
}

#[test]
fn restarting_supersedes_the_run_in_flight() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    let first = scheduled_handle(a.scroll_by(&mut view, &mut env, 500.0));
    assert_eq!(env.frames.next_due(), Some(first));
    env.clock.advance(FRAME_MS);
    let stale = match a.on_frame(first, &mut view, &mut env) {
        FrameOutcome::Continue { handle, .. } => handle,
        other => panic!("unexpected {other:?}"),
    };
    let moved = view.offset();

    let second = scheduled_handle(a.scroll_by(&mut view, &mut env, 500.0));
    assert_ne!(second, stale);
    assert_eq!(env.frames.pending(), 1);
    assert_eq!(env.frames.cancelled(), 1);
    assert_eq!(a.pending_handle(), Some(second));
    assert_eq!(a.target_offset(), Some(moved + 500));

    // The superseded handle never writes.
    let writes = view.history().len();
    assert_eq!(a.on_frame(stale, &mut view, &mut env), FrameOutcome::Stale);
    assert_eq!(view.history().len(), writes);
    assert!(a.is_animating());

    let outcomes = drain(&mut a, &mut view, &mut env);
    assert_eq!(
        outcomes.last(),
        Some(&FrameOutcome::Completed {
            offset: moved + 500,
            completion: Completion::Target
        })
    );
}

#[test]
fn cancel_on_teardown_drops_the_pending_frame() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    let handle = scheduled_handle(a.scroll_by(&mut view, &mut env, 400.0));
    assert!(a.cancel(&mut env));
    assert!(!a.is_animating());
    assert_eq!(env.frames.pending(), 0);
    assert!(!a.cancel(&mut env));

    view.detach();
    assert_eq!(a.on_frame(handle, &mut view, &mut env), FrameOutcome::Stale);
}

#[test]
fn detached_target_is_a_silent_no_op() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    scheduled_handle(a.scroll_by(&mut view, &mut env, 400.0));
    let writes = view.history().len();

    view.detach();
    assert_eq!(a.scroll_by(&mut view, &mut env, 400.0), AnimateOutcome::Detached);
    assert_eq!(a.scroll_page(&mut view, &mut env, Direction::Next), AnimateOutcome::Detached);
    assert_eq!(view.history().len(), writes);
    // The earlier run was still cancelled.
    assert!(!a.is_animating());
    assert_eq!(env.frames.pending(), 0);
}

#[test]
fn detaching_mid_run_ends_it_quietly() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    scheduled_handle(a.scroll_by(&mut view, &mut env, 400.0));
    view.detach();

    let outcomes = drain(&mut a, &mut view, &mut env);
    assert_eq!(outcomes, [FrameOutcome::Detached]);
    assert!(!a.is_animating());
    assert_eq!(env.frames.pending(), 0);
}

#[test]
fn zero_duration_and_disabled_smoothing_jump() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    assert_eq!(
        a.scroll_by_with(&mut view, &mut env, 250.0, 0.0, Easing::Linear),
        AnimateOutcome::Jumped { offset: 250 }
    );

    a.set_options(ScrollOptions::default().with_smooth(false));
    assert_eq!(a.scroll_by(&mut view, &mut env, -100.0), AnimateOutcome::Jumped { offset: 150 });
    // Jumps are clamped to the extent too.
    assert_eq!(
        a.scroll_by(&mut view, &mut env, 10_000.0),
        AnimateOutcome::Jumped { offset: 2_400 }
    );
    assert_eq!(env.frames.requested(), 0);
}

#[test]
fn no_movement_completes_on_the_first_frame() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600).with_offset(200);
    let mut a = ScrollAnimator::default();

    assert_eq!(
        a.scroll_by(&mut view, &mut env, 0.0),
        AnimateOutcome::Completed {
            offset: 200,
            completion: Completion::Target
        }
    );

    let mut at_end = ViewportModel::new(1_000, 400).with_offset(600);
    assert_eq!(
        a.scroll_by(&mut at_end, &mut env, 100.0),
        AnimateOutcome::Completed {
            offset: 600,
            completion: Completion::Edge
        }
    );
    assert_eq!(env.frames.requested(), 0);
}

#[test]
fn backward_run_gives_up_when_target_leaves_the_extent() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(2_000, 400).with_offset(1_000);
    let mut a = ScrollAnimator::default();

    let started = a.scroll_by_with(&mut view, &mut env, -200.0, 100.0, Easing::Linear);
    let handle = scheduled_handle(started);
    assert_eq!(env.frames.next_due(), Some(handle));
    env.clock.advance(FRAME_MS);
    let next = match a.on_frame(handle, &mut view, &mut env) {
        FrameOutcome::Continue { handle, offset } => {
            assert_eq!(offset, 968);
            handle
        }
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(env.frames.pending(), 1);
    assert_eq!(a.pending_handle(), Some(next));

    // Max offset drops to 600, below the run's target of 800.
    view.set_content_extent(1_000);
    let outcomes = drain(&mut a, &mut view, &mut env);
    assert_eq!(
        outcomes.last(),
        Some(&FrameOutcome::Completed {
            offset: 600,
            completion: Completion::Elapsed
        })
    );
    assert!(env.clock.now_ms() >= 100.0);
}

#[test]
fn prefers_direct_set_when_available() {
    let mut env = env_at(0.0);
    let mut a = ScrollAnimator::default();

    let mut fast = ViewportModel::new(3_000, 600);
    a.scroll_by(&mut fast, &mut env, 300.0);
    drain(&mut a, &mut fast, &mut env);
    assert!(fast.direct_writes() > 0);
    assert_eq!(fast.plain_writes(), 0);

    let mut plain = ViewportModel::new(3_000, 600).with_direct_set(false);
    a.scroll_by(&mut plain, &mut env, 300.0);
    drain(&mut a, &mut plain, &mut env);
    assert_eq!(plain.direct_writes(), 0);
    assert!(plain.plain_writes() > 0);
    assert_eq!(plain.offset(), 300);
}

/// Grants a fixed number of frames, then refuses.
struct RationedFrames {
    left: usize,
    inner: ManualFrames,
}

impl FrameScheduler for RationedFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        self.inner.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.cancel_frame(handle);
    }
}

#[test]
fn refused_frame_request_finishes_in_place() {
    let mut env = Env::new(ManualClock::new(0.0), RationedFrames {
        left: 2,
        inner: ManualFrames::new(),
    });
    let mut view = ViewportModel::new(2_000, 400);
    let mut a = ScrollAnimator::default();

    a.scroll_by_with(&mut view, &mut env, 300.0, 200.0, Easing::Linear);
    let mut last = None;
    while let Some(handle) = env.frames.inner.next_due() {
        env.clock.advance(FRAME_MS);
        last = Some(a.on_frame(handle, &mut view, &mut env));
    }
    assert_eq!(
        last,
        Some(FrameOutcome::Completed {
            offset: 300,
            completion: Completion::Target
        })
    );
    assert!(env.clock.now_ms() < 200.0);
}

#[test]
fn page_navigation_moves_by_visible_width() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::new(ScrollOptions::new().with_smooth(false).with_page_ratio(0.5));

    let presses = [
        (Direction::Next, 300),
        (Direction::Next, 600),
        (Direction::Previous, 300),
        (Direction::Previous, 0),
        (Direction::Previous, 0),
    ];
    for (direction, offset) in presses {
        assert_eq!(
            a.scroll_page(&mut view, &mut env, direction),
            AnimateOutcome::Jumped { offset },
            "{direction:?}"
        );
    }
}

#[test]
fn named_easing_is_resolved_at_the_boundary() {
    let mut env = env_at(0.0);
    let mut view = ViewportModel::new(3_000, 600);
    let mut a = ScrollAnimator::default();

    scheduled_handle(a.scroll_by_named(&mut view, &mut env, 300.0, "easeOutCubic"));
    assert_eq!(a.pending().run().map(|r| r.easing()), Some(Easing::EaseOutCubic));
}

#[test]
fn runs_replay_identically_under_a_manual_clock() {
    let run = || {
        let mut env = env_at(5_000.0);
        let mut view = ViewportModel::new(4_000, 800).with_offset(120);
        let mut a = ScrollAnimator::new(ScrollOptions::new().with_easing(Easing::EaseInOutCubic));
        a.scroll_by(&mut view, &mut env, 777.0);
        drain(&mut a, &mut view, &mut env);
        view.history().to_vec()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.last(), Some(&897));
}

#[cfg(feature = "std")]
#[test]
fn monotonic_clock_never_goes_backwards() {
    let clock = MonotonicClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
    assert!(WallClock.now_ms() > 0.0);
}
