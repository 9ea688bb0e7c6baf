use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Extent, ItemKey};

/// A callback fired when a carousel state update occurs.
///
/// The second argument is `animation_enabled`.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Carousel<K>, bool) + Send + Sync>;

/// Default maximum items per page.
pub const DEFAULT_LIMIT: usize = 5;

/// Default width scale applied during fitting, accounting for inter-item
/// spacing. A tuning knob, not a load-bearing invariant.
pub const DEFAULT_SPACING_FACTOR: f32 = 1.5;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: heavy fields are stored in
/// `Arc`s so adapters can update a few fields and call
/// `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Number of items in the sequence. The items themselves stay with the
    /// caller; the engine only ever sees counts, keys and measurements.
    pub count: usize,

    /// Maximum items shown per page. The effective per-page limit is
    /// adaptively reduced from this (never below 1, never above it) to fit
    /// the measured container width.
    pub limit: usize,

    /// Width scale applied to each item during fitting.
    pub spacing_factor: f32,

    /// Size hint for an item, used until it is measured.
    pub estimate_extent: Arc<dyn Fn(usize) -> Extent + Send + Sync>,

    /// Stable identity for the item at an index. Measurements follow keys
    /// across reordering/replacement, and renderers use keys to keep
    /// per-item wrapper identity stable across repagination.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Enables/disables the engine. When disabled, query methods return
    /// empty results.
    pub enabled: bool,

    /// Initial container width, if the UI already knows it.
    pub initial_width: Option<u32>,

    /// Width assumed during fitting while the container is unmeasured.
    pub fallback_measure_width: u32,

    /// Width assumed for page translation while the container is unmeasured.
    pub fallback_content_width: u32,

    /// Settle delay before transition animation is re-enabled after a burst
    /// of resize events.
    pub animation_reset_delay_ms: u64,

    /// Optional callback fired when the engine's internal state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            limit: self.limit,
            spacing_factor: self.spacing_factor,
            estimate_extent: Arc::clone(&self.estimate_extent),
            get_item_key: Arc::clone(&self.get_item_key),
            enabled: self.enabled,
            initial_width: self.initial_width,
            fallback_measure_width: self.fallback_measure_width,
            fallback_content_width: self.fallback_content_width,
            animation_reset_delay_ms: self.animation_reset_delay_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a sequence keyed by index (`ItemKey = u64`).
    ///
    /// `estimate_extent(i)` should return the expected item footprint. The
    /// estimate is used until an item is measured.
    pub fn new(
        count: usize,
        estimate_extent: impl Fn(usize) -> Extent + Send + Sync + 'static,
    ) -> Self {
        Self::new_with_key(count, estimate_extent, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// Use this when you want measurements to follow items across
    /// reordering/replacement: `get_item_key(i)` should return a stable
    /// identity for the item at index `i`.
    pub fn new_with_key(
        count: usize,
        estimate_extent: impl Fn(usize) -> Extent + Send + Sync + 'static,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            limit: DEFAULT_LIMIT,
            spacing_factor: DEFAULT_SPACING_FACTOR,
            estimate_extent: Arc::new(estimate_extent),
            get_item_key: Arc::new(get_item_key),
            enabled: true,
            initial_width: None,
            fallback_measure_width: 300,
            fallback_content_width: 1000,
            animation_reset_delay_ms: 500,
            on_change: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_spacing_factor(mut self, spacing_factor: f32) -> Self {
        self.spacing_factor = spacing_factor;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the initial container width.
    pub fn with_initial_width(mut self, initial_width: Option<u32>) -> Self {
        self.initial_width = initial_width;
        self
    }

    pub fn with_fallback_widths(
        mut self,
        fallback_measure_width: u32,
        fallback_content_width: u32,
    ) -> Self {
        self.fallback_measure_width = fallback_measure_width;
        self.fallback_content_width = fallback_content_width;
        self
    }

    pub fn with_animation_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.animation_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<K>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("limit", &self.limit)
            .field("spacing_factor", &self.spacing_factor)
            .field("enabled", &self.enabled)
            .field("initial_width", &self.initial_width)
            .field("fallback_measure_width", &self.fallback_measure_width)
            .field("fallback_content_width", &self.fallback_content_width)
            .field(
                "animation_reset_delay_ms",
                &self.animation_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
