#![warn(missing_docs)]

//! placement: percentage-based window placement geometry.
//!
//! Moves and resizes a window to a rectangle given as percentage offsets of
//! the usable area of the display the window currently occupies.
//!
//! Two coordinate spaces are involved:
//! - window-reporting space, used by Accessibility: origin at the top-left
//!   of the primary display, Y grows downward;
//! - screen space, used by AppKit display frames: origin at the bottom-left
//!   of the primary display, Y grows upward.
//!
//! The pipeline is: validate offsets ([`OffsetSet`]), flip the window frame
//! into screen space ([`Flip`]), pick the display it overlaps most
//! ([`display::select`]), map the offsets onto that display's usable area
//! ([`OffsetSet::map`]), resolve the frame for fixed-size windows
//! ([`ResizePolicy`]), and flip back. [`plan()`] runs it as a pure function;
//! [`run`] drives a [`Desktop`] implementation end to end.

mod apply;
pub mod display;
mod error;
mod flip;
mod geom;
mod offsets;
pub mod ops;
mod plan;
mod policy;

#[cfg(test)]
mod property_tests;

pub use apply::{ApplyOutcome, Report, RunOptions, apply, run};
pub use display::DisplayInfo;
pub use error::{Error, Result};
pub use flip::{Flip, invert};
pub use geom::{Rect, approx_eq, overlap_1d};
pub use offsets::{OFFSET_COUNT, OffsetSet};
pub use ops::{Desktop, WindowHandle};
pub use plan::{Plan, WindowState, plan};
pub use policy::{Placement, ResizePolicy};
