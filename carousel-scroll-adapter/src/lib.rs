//! Frame-driven animated scrolling for carousel viewports.
//!
//! The `carousel-scroll` crate holds the math (easing registry, animation runs). This crate
//! wires it to a host:
//!
//! - Platform seams: a millisecond [`Clock`] and a [`FrameScheduler`] handing out frame handles
//! - A [`ScrollTarget`] trait for the viewport being scrolled
//! - [`animate`] / [`drive_frame`] plus an owned [`PendingScroll`] slot for cancellation
//! - [`ScrollAnimator`], a per-carousel controller on top of those
//! - Headless doubles ([`ManualClock`], [`ManualFrames`], [`NoFrames`], [`ViewportModel`])
//!
//! This crate is framework-agnostic (no DOM or GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animate;
mod controller;
mod pending;
mod platform;
mod target;

#[cfg(test)]
mod tests;

pub use animate::{AnimateOutcome, FrameOutcome, animate, drive_frame};
pub use controller::ScrollAnimator;
pub use pending::PendingScroll;
#[cfg(feature = "std")]
pub use platform::{MonotonicClock, WallClock};
pub use platform::{
    Clock, Env, FrameHandle, FrameScheduler, ManualClock, ManualFrames, NoFrames, Platform,
};
pub use target::{ScrollTarget, ViewportModel};

pub use carousel_scroll::{Completion, Direction, Easing, ScrollMetrics, ScrollOptions};
