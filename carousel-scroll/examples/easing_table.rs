// Example: print every registered curve at a few sample points, then a sampled run.
use carousel_scroll::{Easing, ScrollRun};

fn main() {
    print!("{:<16}", "t");
    for i in 0..=4 {
        print!("{:>8.2}", i as f64 / 4.0);
    }
    println!();

    for easing in Easing::ALL {
        print!("{:<16}", easing.name());
        for i in 0..=4 {
            print!("{:>8.3}", easing.sample(i as f64 / 4.0));
        }
        println!();
    }

    // Names usually arrive as strings (props, config).
    let easing = Easing::from_name("easeOutQuart").unwrap_or_default();
    let run = ScrollRun::new(0, 600.0, 0.0, 240.0, easing);
    for now_ms in (0..=240).step_by(40) {
        println!("t={now_ms}ms off={}", run.offset_at(now_ms as f64));
    }
}
