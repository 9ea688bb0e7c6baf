/// A lightweight, serializable snapshot of the current layout measurements.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// `visible_limit` is informational: restoring a layout snapshot re-runs the
/// fitting pass against the restored width rather than trusting the stored
/// limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub container_width: Option<u32>,
    pub visible_limit: usize,
}

/// A lightweight, serializable snapshot of the paging cursor.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub active_index: usize,
    pub animation_enabled: bool,
}

/// A combined snapshot of layout + pager state.
///
/// This is useful for restoring UI state across frames or sessions without
/// coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub layout: LayoutState,
    pub pager: PagerState,
}
