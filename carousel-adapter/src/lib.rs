//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - Slide tweens for the page transition (adapter-driven; the core only
//!   gates whether animating is appropriate)
//! - Page anchoring (keep the viewer's place when a relayout changes how
//!   many items fit per page)
//! - A controller that owns the resize/settle/tween lifecycle, so tearing
//!   it down tears down every pending timer with it
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod key;
mod tween;


pub use anchor::{PageAnchor, apply_anchor, capture_active_anchor};
pub use controller::Controller;
pub use key::CarouselKey;
pub use tween::{Easing, Tween};
