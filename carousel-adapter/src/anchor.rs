use carousel::Carousel;

use crate::key::CarouselKey;

/// A remembered position: the key of the first item on the active page.
///
/// Capture one before a relayout (resize, dataset mutation) and apply it
/// after, so the viewer stays on the page that still holds that item even
/// when the per-page fit changed underneath them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageAnchor<K> {
    pub key: K,
}

/// Captures an anchor at the first item of the active page, or `None` when
/// the engine is disabled or the page is empty.
pub fn capture_active_anchor<K: CarouselKey>(carousel: &Carousel<K>) -> Option<PageAnchor<K>> {
    if !carousel.enabled() {
        return None;
    }
    let range = carousel.active_range();
    if range.is_empty() {
        return None;
    }
    Some(PageAnchor {
        key: carousel.key_for(range.start_index),
    })
}

/// Re-targets the active page at the page now holding the anchored item.
///
/// `key_to_index` resolves the anchor key against the current dataset;
/// returning `None` (the item was removed) leaves the cursor where the
/// engine's own clamping put it. Returns whether the anchor was applied.
pub fn apply_anchor<K: CarouselKey>(
    carousel: &mut Carousel<K>,
    anchor: &PageAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    let Some(page) = carousel.page_of_item(index) else {
        return false;
    };
    carousel.set_active_index(page);
    true
}
