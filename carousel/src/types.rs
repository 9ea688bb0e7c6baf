/// A measured item footprint in pixels (or whatever unit your UI measures in).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The direction of the most recent page change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// A contiguous, non-overlapping slice of the item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// One positioned page panel.
///
/// All pages stack in the same physical region; `offset` is the horizontal
/// translation that shows or hides them. The active page sits at offset 0,
/// later pages to the right, earlier pages to the left, which yields a
/// sliding-door transition when the active index changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSlot {
    pub index: usize,
    pub range: PageRange,
    /// `(index - active_index) * content_width`.
    pub offset: i64,
}

impl PageSlot {
    pub fn is_active(&self) -> bool {
        self.offset == 0
    }
}

/// An item's position within the paginated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageItem {
    pub index: usize,
    /// The page this item lands on.
    pub page: usize,
    /// Position within the page, `0..visible_limit`.
    pub slot: usize,
}

/// A [`PageItem`] together with the item's stable key.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageItemKeyed<K> {
    pub key: K,
    pub index: usize,
    pub page: usize,
    pub slot: usize,
}

pub type ItemKey = u64;
