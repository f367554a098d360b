//! Easing curves and animation-run math for horizontally scrolling carousels.
//!
//! For the frame-driven animator (clock/frame-scheduler seams, cancellation handles, test
//! doubles), see the `carousel-scroll-adapter` crate.
//!
//! This crate is UI-agnostic and holds no viewport. It answers three questions for an adapter:
//! - which curve a registry key names (`Easing`)
//! - where a relative scroll should end and where it is at time `t` (`ScrollRun`)
//! - whether the run is over after a frame was applied (`Completion`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
mod options;
mod run;
mod types;


pub use easing::Easing;
pub use error::UnknownEasing;
pub use options::ScrollOptions;
pub use run::ScrollRun;
pub use types::{Completion, Direction, RunFrame, ScrollMetrics};
