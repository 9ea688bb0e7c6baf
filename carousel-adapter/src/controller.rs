use carousel::{Carousel, CarouselOptions, Extent, ItemKey};

use crate::anchor::{self, PageAnchor};
use crate::key::CarouselKey;
use crate::tween::{Easing, Tween};

/// Owns a [`Carousel`] together with the transition state an adapter needs:
/// the slide tween and the resize settle timer. Everything is advanced from
/// `tick`, so there are no threads or callbacks to unhook; dropping the
/// controller discards every pending timer with it.
pub struct Controller<K: CarouselKey = ItemKey> {
    carousel: Carousel<K>,
    tween: Option<Tween>,
}

impl<K: CarouselKey> Controller<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel<K>) -> Self {
        Self {
            carousel,
            tween: None,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.carousel
    }

    pub fn into_carousel(mut self) -> Carousel<K> {
        self.carousel.cancel_animation_reset();
        self.carousel
    }

    // ---- Events ----------------------------------------------------------

    /// Feed a container resize. The relayout is synchronous; any in-flight
    /// slide is dropped because the engine has disabled animation for the
    /// settle window anyway.
    pub fn on_resize(&mut self, width: u32, now_ms: u64) {
        self.tween = None;
        self.carousel.apply_resize_event(width, now_ms);
    }

    pub fn on_measure(&mut self, index: usize, extent: Extent) {
        self.carousel.measure(index, extent);
    }

    pub fn on_measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, Extent)>) {
        self.carousel.measure_many(measurements);
    }

    // ---- Sliding ---------------------------------------------------------

    /// Advances to the next page (wrapping) and, when animation is enabled,
    /// starts a slide tween. Returns the new active page.
    pub fn slide_next(&mut self, now_ms: u64, duration_ms: u64, easing: Easing) -> usize {
        let from = self.carousel.active_index();
        self.carousel.next_page();
        self.begin_slide(from, now_ms, duration_ms, easing);
        self.carousel.active_index()
    }

    /// Retreats to the previous page (wrapping), animating like
    /// [`slide_next`](Self::slide_next).
    pub fn slide_prev(&mut self, now_ms: u64, duration_ms: u64, easing: Easing) -> usize {
        let from = self.carousel.active_index();
        self.carousel.prev_page();
        self.begin_slide(from, now_ms, duration_ms, easing);
        self.carousel.active_index()
    }

    /// Jumps to `page` (clamped), animating across the intervening pages.
    pub fn slide_to_page(
        &mut self,
        page: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> usize {
        let from = self.carousel.active_index();
        self.carousel.set_active_index(page);
        self.begin_slide(from, now_ms, duration_ms, easing);
        self.carousel.active_index()
    }

    /// Starts (or retargets) the tween that carries the pages from their
    /// pre-switch positions to the new resting offsets. The transient offset
    /// is added on top of each slot's `offset`; it starts at
    /// `(new_active - old_active) * content_width` and eases to zero.
    fn begin_slide(&mut self, old_active: usize, now_ms: u64, duration_ms: u64, easing: Easing) {
        let new_active = self.carousel.active_index();
        if new_active == old_active || !self.carousel.animation_enabled() {
            return;
        }
        let width = self.carousel.content_width() as i64;
        let start = (new_active as i64 - old_active as i64).saturating_mul(width);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "carousel",
            from = old_active,
            to = new_active,
            start,
            "begin_slide"
        );
        match &mut self.tween {
            Some(tween) => {
                let carried = tween.sample(now_ms).saturating_add(start);
                *tween = Tween::new(carried, 0, now_ms, duration_ms, easing);
            }
            None => self.tween = Some(Tween::new(start, 0, now_ms, duration_ms, easing)),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Drops the in-flight slide; the pages snap to their resting offsets.
    pub fn cancel_slide(&mut self) {
        self.tween = None;
    }

    /// Drops the slide and the pending animation re-enable. Call on
    /// teardown.
    pub fn cancel_pending(&mut self) {
        self.tween = None;
        self.carousel.cancel_animation_reset();
    }

    /// Advances time. While a slide is in flight this returns the transient
    /// offset to add to every page slot; otherwise it advances the resize
    /// settle window and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        if let Some(tween) = self.tween {
            let offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
            Some(offset)
        } else {
            self.carousel.update_animation(now_ms);
            None
        }
    }

    // ---- Anchoring -------------------------------------------------------

    pub fn capture_anchor(&self) -> Option<PageAnchor<K>> {
        anchor::capture_active_anchor(&self.carousel)
    }

    /// Moves the cursor back to the anchored item's page after a relayout.
    /// Never animated: anchoring restores a position, it is not a slide.
    pub fn apply_anchor(
        &mut self,
        anchor: &PageAnchor<K>,
        key_to_index: impl FnOnce(&K) -> Option<usize>,
    ) -> bool {
        self.tween = None;
        anchor::apply_anchor(&mut self.carousel, anchor, key_to_index)
    }
}

impl<K: CarouselKey + core::fmt::Debug> core::fmt::Debug for Controller<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("active_index", &self.carousel.active_index())
            .field("total_pages", &self.carousel.total_pages())
            .field("animating", &self.tween.is_some())
            .finish_non_exhaustive()
    }
}
