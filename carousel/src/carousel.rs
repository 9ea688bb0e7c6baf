use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::debounce::Debounce;
use crate::key::{KeyCacheKey, KeyExtentMap};
use crate::{
    CarouselOptions, Extent, FrameState, ItemKey, LayoutState, PageItem, PageItemKeyed, PageRange,
    PageSlot, PagerState, SlideDirection, fit,
};

/// A headless paginated carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; items are opaque and stay with the
///   caller. The engine only sees the item count, keys and measurements.
/// - Your adapter drives it by forwarding container resizes, item
///   measurements and paging clicks.
/// - Rendering is exposed via zero-allocation iteration APIs
///   (`for_each_page_*`), each page being a translated panel slot.
///
/// For slide tweens / page anchoring patterns, see the `carousel-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemKey> {
    options: CarouselOptions<K>,
    container_width: Option<u32>,
    active_index: usize,
    visible_limit: usize,
    animation_enabled: bool,
    slide_direction: Option<SlideDirection>,
    settle: Debounce<()>,

    extents: Vec<Extent>, // estimate until measured
    measured: Vec<bool>,
    key_extents: KeyExtentMap<K>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: KeyCacheKey> Carousel<K> {
    /// Creates a new carousel from options.
    ///
    /// If `options.initial_width` is set, it is applied immediately and the
    /// first fitting pass runs against it.
    pub fn new(options: CarouselOptions<K>) -> Self {
        cdebug!(
            count = options.count,
            limit = options.limit,
            enabled = options.enabled,
            "Carousel::new"
        );
        let mut c = Self {
            container_width: options.initial_width,
            active_index: 0,
            visible_limit: options.limit.max(1),
            animation_enabled: true,
            slide_direction: None,
            settle: Debounce::new(options.animation_reset_delay_ms),
            extents: Vec::new(),
            measured: Vec::new(),
            key_extents: KeyExtentMap::<K>::new(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.rebuild_estimates();
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    fn reset_to_initial(&mut self) {
        self.container_width = self.options.initial_width;
        self.active_index = 0;
        self.animation_enabled = true;
        self.slide_direction = None;
        self.settle.cancel();
    }

    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_count = self.options.count;
        let prev_limit = self.options.limit;
        let prev_spacing = self.options.spacing_factor;
        let was_enabled = self.options.enabled;
        let estimate_unchanged =
            Arc::ptr_eq(&self.options.estimate_extent, &options.estimate_extent);
        let get_item_key_unchanged = Arc::ptr_eq(&self.options.get_item_key, &options.get_item_key);
        self.options = options;
        self.settle.set_delay_ms(self.options.animation_reset_delay_ms);
        ctrace!(
            count = self.options.count,
            limit = self.options.limit,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );

        if !self.options.enabled {
            self.container_width = None;
            self.active_index = 0;
            self.animation_enabled = true;
            self.slide_direction = None;
            self.settle.cancel();
        } else if !was_enabled
            || self.options.count != prev_count
            || !estimate_unchanged
            || !get_item_key_unchanged
        {
            if !was_enabled {
                self.reset_to_initial();
            }
            self.rebuild_estimates();
        } else if self.options.limit != prev_limit || self.options.spacing_factor != prev_spacing {
            self.refit();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    ///
    /// This is useful when you want to update multiple options at once while
    /// letting the engine decide what needs to be rebuilt.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel<K>, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.animation_enabled);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// This is recommended for UI adapters: a resize event typically updates
    /// the container width, the animation flag and the settle timer together.
    /// Without batching, each setter may trigger `on_change`, which can be
    /// expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.container_width = None;
            self.active_index = 0;
            self.animation_enabled = true;
            self.slide_direction = None;
            self.settle.cancel();
        } else {
            self.reset_to_initial();
            self.refit();
        }
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_estimates();
        self.notify();
    }

    pub fn set_limit(&mut self, limit: usize) {
        if self.options.limit == limit {
            return;
        }
        self.options.limit = limit;
        self.refit();
        self.notify();
    }

    pub fn set_spacing_factor(&mut self, spacing_factor: f32) {
        if self.options.spacing_factor == spacing_factor {
            return;
        }
        self.options.spacing_factor = spacing_factor;
        self.refit();
        self.notify();
    }

    pub fn set_estimate_extent(&mut self, f: impl Fn(usize) -> Extent + Send + Sync + 'static) {
        self.options.estimate_extent = Arc::new(f);
        self.rebuild_estimates();
        self.notify();
    }

    pub fn set_get_item_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.options.get_item_key = Arc::new(f);
        self.rebuild_estimates();
        self.notify();
    }

    pub fn set_animation_reset_delay_ms(&mut self, delay_ms: u64) {
        self.options.animation_reset_delay_ms = delay_ms;
        self.settle.set_delay_ms(delay_ms);
        self.notify();
    }

    // ---- Measurement ----------------------------------------------------

    pub fn measure(&mut self, index: usize, extent: Extent) {
        if index >= self.options.count {
            return;
        }
        let key = self.key_for(index);
        self.measure_keyed(index, key, extent);
    }

    pub fn measure_keyed(&mut self, index: usize, key: K, extent: Extent) {
        if index >= self.options.count {
            return;
        }
        ctrace!(
            index,
            width = extent.width,
            height = extent.height,
            "measure_keyed"
        );
        if self.set_item_extent_keyed(index, key, extent) {
            self.refit();
        }
        self.notify();
    }

    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, Extent)>) {
        let mut changed = false;
        for (index, extent) in measurements {
            if index >= self.options.count {
                continue;
            }
            let key = self.key_for(index);
            changed |= self.set_item_extent_keyed(index, key, extent);
        }
        if changed {
            self.refit();
        }
        self.notify();
    }

    fn set_item_extent_keyed(&mut self, index: usize, key: K, extent: Extent) -> bool {
        let cur = self.extents[index];
        self.measured[index] = true;
        self.key_extents.insert(key, extent);
        if cur == extent {
            return false;
        }
        self.extents[index] = extent;
        true
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn item_extent(&self, index: usize) -> Option<Extent> {
        if !self.options.enabled {
            return None;
        }
        self.extents.get(index).copied()
    }

    pub fn reset_measurements(&mut self) {
        self.key_extents.clear();
        self.rebuild_estimates();
        self.notify();
    }

    /// Rebuilds per-index extents from the key-based cache and current
    /// estimates. Call this after your data set is reordered/changed while
    /// `count` stays the same.
    pub fn sync_item_keys(&mut self) {
        self.rebuild_estimates();
        self.notify();
    }

    /// Returns the number of cached measured extents (key → extent).
    pub fn measurement_cache_len(&self) -> usize {
        self.key_extents.len()
    }

    /// Iterates over the cached measured extents (key → extent) without
    /// allocations.
    pub fn for_each_cached_extent(&self, mut f: impl FnMut(&K, Extent)) {
        for (k, v) in self.key_extents.iter() {
            f(k, *v);
        }
    }

    /// Exports the cached measured extents as a `Vec` (useful for
    /// persistence).
    pub fn export_measurement_cache(&self) -> Vec<(K, Extent)>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.key_extents.len());
        self.for_each_cached_extent(|k, v| out.push((k.clone(), v)));
        out
    }

    /// Replaces the cached measured extents from an iterator (useful when
    /// restoring state).
    ///
    /// Note: this rebuilds internal per-index extents using the current key
    /// mapping.
    pub fn import_measurement_cache(&mut self, entries: impl IntoIterator<Item = (K, Extent)>) {
        self.key_extents.clear();
        let mut n = 0usize;
        for (k, v) in entries {
            self.key_extents.insert(k, v);
            n = n.saturating_add(1);
        }
        cdebug!(entries = n, "import_measurement_cache");
        self.rebuild_estimates();
        self.notify();
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    // ---- Resize & animation gating --------------------------------------

    pub fn container_width(&self) -> Option<u32> {
        self.container_width
    }

    pub fn set_container_width(&mut self, width: u32) {
        if self.container_width == Some(width) {
            return;
        }
        self.container_width = Some(width);
        self.refit();
        self.notify();
    }

    pub fn clear_container_width(&mut self) {
        if self.container_width.is_none() {
            return;
        }
        self.container_width = None;
        self.refit();
        self.notify();
    }

    /// The width used for page translation, falling back to
    /// `fallback_content_width` while unmeasured.
    pub fn content_width(&self) -> u32 {
        self.container_width
            .unwrap_or(self.options.fallback_content_width)
    }

    fn measure_width(&self) -> u32 {
        self.container_width
            .unwrap_or(self.options.fallback_measure_width)
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        if self.animation_enabled == enabled {
            return;
        }
        self.animation_enabled = enabled;
        self.notify();
    }

    /// Call this when the UI reports a container resize. Animation is
    /// disabled immediately so the resize-triggered relayout does not
    /// visibly slide; it is re-enabled by `update_animation` once no further
    /// resize arrives for `animation_reset_delay_ms`.
    pub fn notify_resize_event(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.settle.call((), now_ms);
        self.set_animation_enabled(false);
    }

    /// Advances the animation settle window.
    ///
    /// The width/limit recomputation is synchronous on every resize; only
    /// the animation re-enable is debounced.
    pub fn update_animation(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        if self.settle.poll(now_ms).is_some() {
            self.set_animation_enabled(true);
        }
    }

    /// Drops a pending animation re-enable. Call on teardown so a settled
    /// timer never fires into a dismantled component.
    pub fn cancel_animation_reset(&mut self) {
        self.settle.cancel();
    }

    /// Applies a container resize from your UI layer in a single coalesced
    /// update: stores the width, refits the visible limit, disables
    /// animation and restarts the settle window.
    pub fn apply_resize_event(&mut self, width: u32, now_ms: u64) {
        ctrace!(width, now_ms, "apply_resize_event");
        self.batch_update(|c| {
            c.set_container_width(width);
            c.notify_resize_event(now_ms);
        });
    }

    // ---- Pagination ------------------------------------------------------

    /// Items shown per page: the configured limit, adaptively reduced to fit
    /// the measured container width. Always in `1..=limit`.
    pub fn visible_limit(&self) -> usize {
        self.visible_limit
    }

    /// Number of pages. An empty item sequence still yields one (empty)
    /// page. Returns 0 when the engine is disabled.
    pub fn total_pages(&self) -> usize {
        if !self.options.enabled {
            return 0;
        }
        self.total_pages_inner()
    }

    fn total_pages_inner(&self) -> usize {
        fit::page_count(self.options.count, self.visible_limit)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_direction(&self) -> Option<SlideDirection> {
        self.slide_direction
    }

    /// Moves the cursor to `index`, clamped into `[0, total_pages)`.
    pub fn set_active_index(&mut self, index: usize) {
        if !self.options.enabled {
            return;
        }
        let clamped = index.min(self.total_pages_inner().saturating_sub(1));
        if clamped == self.active_index {
            return;
        }
        self.slide_direction = match clamped.cmp(&self.active_index) {
            cmp::Ordering::Greater => Some(SlideDirection::Forward),
            cmp::Ordering::Less => Some(SlideDirection::Backward),
            cmp::Ordering::Equal => self.slide_direction,
        };
        self.active_index = clamped;
        self.notify();
    }

    /// Advances to the next page, wrapping to page 0 past the last page.
    pub fn next_page(&mut self) {
        if !self.options.enabled {
            return;
        }
        let total = self.total_pages_inner();
        let next = if self.active_index + 1 >= total {
            0
        } else {
            self.active_index + 1
        };
        ctrace!(from = self.active_index, to = next, "next_page");
        if next == self.active_index {
            return;
        }
        self.active_index = next;
        self.slide_direction = Some(SlideDirection::Forward);
        self.notify();
    }

    /// Retreats to the previous page, wrapping to the last page before
    /// page 0.
    pub fn prev_page(&mut self) {
        if !self.options.enabled {
            return;
        }
        let total = self.total_pages_inner();
        let prev = if self.active_index == 0 {
            total.saturating_sub(1)
        } else {
            self.active_index - 1
        };
        ctrace!(from = self.active_index, to = prev, "prev_page");
        if prev == self.active_index {
            return;
        }
        self.active_index = prev;
        self.slide_direction = Some(SlideDirection::Backward);
        self.notify();
    }

    /// The item slice on `page`. Pages past the end are empty.
    pub fn page_range(&self, page: usize) -> PageRange {
        let count = self.options.count;
        let limit = self.visible_limit.max(1);
        let start = page.saturating_mul(limit).min(count);
        let end = start.saturating_add(limit).min(count);
        PageRange {
            start_index: start,
            end_index: end,
        }
    }

    pub fn active_range(&self) -> PageRange {
        self.page_range(self.active_index)
    }

    /// The page holding the item at `index`.
    pub fn page_of_item(&self, index: usize) -> Option<usize> {
        if index >= self.options.count {
            return None;
        }
        Some(index / self.visible_limit.max(1))
    }

    // ---- Slots -----------------------------------------------------------

    /// The horizontal translation of `page` relative to the active page.
    pub fn slot_offset(&self, page: usize) -> i64 {
        let width = self.content_width() as i64;
        (page as i64 - self.active_index as i64).saturating_mul(width)
    }

    pub fn page_slot(&self, page: usize) -> Option<PageSlot> {
        if !self.options.enabled || page >= self.total_pages_inner() {
            return None;
        }
        Some(PageSlot {
            index: page,
            range: self.page_range(page),
            offset: self.slot_offset(page),
        })
    }

    pub fn active_slot(&self) -> Option<PageSlot> {
        self.page_slot(self.active_index)
    }

    /// Iterates over every page panel in order, without allocations.
    pub fn for_each_page_slot(&self, mut f: impl FnMut(PageSlot)) {
        if !self.options.enabled {
            return;
        }
        for page in 0..self.total_pages_inner() {
            f(PageSlot {
                index: page,
                range: self.page_range(page),
                offset: self.slot_offset(page),
            });
        }
    }

    /// Collects page slots into `out` (clears `out` first).
    pub fn collect_page_slots(&self, out: &mut Vec<PageSlot>) {
        out.clear();
        self.for_each_page_slot(|s| out.push(s));
    }

    /// Iterates over the items on `page`, without allocations.
    pub fn for_each_page_item(&self, page: usize, mut f: impl FnMut(PageItem)) {
        if !self.options.enabled {
            return;
        }
        let range = self.page_range(page);
        for (slot, index) in (range.start_index..range.end_index).enumerate() {
            f(PageItem { index, page, slot });
        }
    }

    /// Iterates over the items on `page` with their stable keys, without
    /// allocations. Renderers use the key to keep per-item wrapper identity
    /// stable across repagination.
    pub fn for_each_page_item_keyed(&self, page: usize, mut f: impl FnMut(PageItemKeyed<K>)) {
        if !self.options.enabled {
            return;
        }
        let range = self.page_range(page);
        for (slot, index) in (range.start_index..range.end_index).enumerate() {
            f(PageItemKeyed {
                key: self.key_for(index),
                index,
                page,
                slot,
            });
        }
    }

    /// Collects the items on `page` into `out` (clears `out` first).
    pub fn collect_page_items(&self, page: usize, out: &mut Vec<PageItem>) {
        out.clear();
        self.for_each_page_item(page, |it| out.push(it));
    }

    /// Collects the keyed items on `page` into `out` (clears `out` first).
    pub fn collect_page_items_keyed(&self, page: usize, out: &mut Vec<PageItemKeyed<K>>) {
        out.clear();
        self.for_each_page_item_keyed(page, |it| out.push(it));
    }

    /// The tallest extent on the active page, so the viewport can be sized
    /// once and pages of differing content height do not cause layout jumps.
    /// 0 when nothing is there to measure.
    pub fn viewport_height(&self) -> u32 {
        if !self.options.enabled {
            return 0;
        }
        let range = self.active_range();
        fit::max_height(
            self.extents[range.start_index..range.end_index]
                .iter()
                .map(|e| e.height),
        )
    }

    // ---- Snapshots -------------------------------------------------------

    /// Returns a lightweight snapshot of the current layout measurements.
    pub fn layout_state(&self) -> LayoutState {
        LayoutState {
            container_width: self.container_width,
            visible_limit: self.visible_limit,
        }
    }

    /// Returns a lightweight snapshot of the paging cursor.
    pub fn pager_state(&self) -> PagerState {
        PagerState {
            active_index: self.active_index,
            animation_enabled: self.animation_enabled,
        }
    }

    /// Returns a combined snapshot of layout + pager state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            layout: self.layout_state(),
            pager: self.pager_state(),
        }
    }

    /// Restores the container width from a previously captured snapshot and
    /// re-runs the fitting pass against it.
    pub fn restore_layout_state(&mut self, layout: LayoutState) {
        self.batch_update(|c| match layout.container_width {
            Some(w) => c.set_container_width(w),
            None => c.clear_container_width(),
        });
    }

    /// Restores the paging cursor from a previously captured snapshot. The
    /// active index is clamped against the current page count.
    pub fn restore_pager_state(&mut self, pager: PagerState) {
        self.batch_update(|c| {
            c.set_active_index(pager.active_index);
            c.set_animation_enabled(pager.animation_enabled);
        });
    }

    /// Restores both layout + pager state from a previously captured
    /// snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.batch_update(|c| {
            c.restore_layout_state(frame.layout);
            c.restore_pager_state(frame.pager);
        });
    }

    // ---- Internals -------------------------------------------------------

    fn rebuild_estimates(&mut self) {
        cdebug!(
            count = self.options.count,
            cached = self.key_extents.len(),
            "rebuild_estimates"
        );
        self.extents.clear();
        self.measured.clear();
        self.extents.reserve_exact(self.options.count);
        self.measured.reserve_exact(self.options.count);

        for i in 0..self.options.count {
            let key = self.key_for(i);
            if let Some(&extent) = self.key_extents.get(&key) {
                self.extents.push(extent);
                self.measured.push(true);
            } else {
                self.extents.push((self.options.estimate_extent)(i));
                self.measured.push(false);
            }
        }
        self.refit();
    }

    /// Recomputes the visible limit from the active page's item widths and
    /// clamps the cursor against the new page count.
    ///
    /// The fit window starts at the active page's first item (the items a UI
    /// would currently have rendered and measured) and considers up to
    /// `limit` candidates, pulled back near the end of the sequence so a
    /// short last page never starves the fit.
    fn refit(&mut self) {
        let limit = self.options.limit.max(1);
        let count = self.options.count;
        if count == 0 {
            self.visible_limit = limit;
            self.active_index = 0;
            return;
        }

        let start = self
            .active_index
            .saturating_mul(self.visible_limit.max(1))
            .min(count.saturating_sub(limit));
        let end = start.saturating_add(limit).min(count);

        self.visible_limit = fit::visible_count(
            self.extents[start..end].iter().map(|e| e.width),
            self.measure_width(),
            self.options.spacing_factor,
            limit,
        );

        let total = self.total_pages_inner();
        if self.active_index >= total {
            self.active_index = total.saturating_sub(1);
        }
    }
}
