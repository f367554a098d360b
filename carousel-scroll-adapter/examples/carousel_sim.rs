use carousel_scroll_adapter::{
    AnimateOutcome, Clock, Direction, Easing, Env, FrameOutcome, ManualClock, ManualFrames,
    ScrollAnimator, ScrollOptions, ViewportModel,
};

fn main() {
    // Example: a carousel component driving animated paging without any real display.
    //
    // A host would:
    // - call scroll_page on arrow clicks
    // - feed every delivered frame handle back through on_frame
    // - call cancel when the carousel unmounts
    let mut env = Env::new(ManualClock::new(0.0), ManualFrames::new());
    let mut view = ViewportModel::new(4_200, 1_000);
    let mut carousel = ScrollAnimator::new(
        ScrollOptions::new()
            .with_duration_ms(240.0)
            .with_easing(Easing::EaseInOutCubic)
            .with_page_ratio(0.9),
    );

    for (press, direction) in [Direction::Next, Direction::Next, Direction::Previous]
        .into_iter()
        .enumerate()
    {
        let started = carousel.scroll_page(&mut view, &mut env, direction);
        println!("press={press} {direction:?} -> {started:?}");
        if !matches!(started, AnimateOutcome::Scheduled { .. }) {
            continue;
        }

        // Simulate a 60fps display.
        while let Some(handle) = env.frames.next_due() {
            env.clock.advance(16.0);
            match carousel.on_frame(handle, &mut view, &mut env) {
                FrameOutcome::Continue { offset, .. } => {
                    println!("  t={:.0}ms off={offset}", env.clock.now_ms());
                }
                done => println!("  t={:.0}ms {done:?}", env.clock.now_ms()),
            }
        }
    }

    // Interrupt a run halfway with a new press, then unmount.
    carousel.scroll_page(&mut view, &mut env, Direction::Next);
    for _ in 0..5 {
        if let Some(handle) = env.frames.next_due() {
            env.clock.advance(16.0);
            carousel.on_frame(handle, &mut view, &mut env);
        }
    }
    let superseded = carousel.scroll_page(&mut view, &mut env, Direction::Next);
    println!("superseded -> {superseded:?}, target={:?}", carousel.target_offset());
    println!("unmount cancelled={}", carousel.cancel(&mut env));
    println!("final offset={} max={}", view.offset(), view.max_offset());
}
