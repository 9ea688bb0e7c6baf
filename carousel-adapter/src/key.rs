#[cfg(feature = "std")]
pub trait CarouselKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> CarouselKey for T {}

#[cfg(not(feature = "std"))]
pub trait CarouselKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> CarouselKey for T {}
