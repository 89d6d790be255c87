use crate::{RenderMode, VisibleRange};

/// A lightweight snapshot of the renderer's layout state.
///
/// Useful for diagnostics and for restoring a scroll position across sessions without coupling
/// the renderer to any specific UI framework. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    pub item_height: f64,
    pub total_items: usize,
    pub total_height: f64,
    pub viewport_height: f64,
    pub scroll_top: f64,
    /// The range of the last render pass.
    pub range: VisibleRange,
    pub mode: RenderMode,
}
