//! A headless paginated carousel engine.
//!
//! For adapter-level utilities (slide tweens, page anchoring), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the layout and pagination logic behind an animated
//! content carousel: greedy width-fitting of items into a measured
//! container, adaptive per-page limits, page slicing with a wrapping cursor,
//! and animation gating across resize bursts.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the container width (on mount and on every resize)
//! - item extent estimates and (optionally) dynamic measurements
//! - paging clicks, wired to `next_page`/`prev_page`
//!
//! and to render one translated panel per [`PageSlot`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod debounce;
pub mod fit;
mod key;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use debounce::Debounce;
pub use options::{CarouselOptions, DEFAULT_LIMIT, DEFAULT_SPACING_FACTOR, OnChangeCallback};
pub use state::{FrameState, LayoutState, PagerState};
pub use types::{
    Extent, ItemKey, PageItem, PageItemKeyed, PageRange, PageSlot, SlideDirection,
};

#[doc(hidden)]
pub use key::KeyCacheKey;
