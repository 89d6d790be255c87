use core::ops::Range;

/// A half-open index range `[start, end)` of rows to materialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The full range `[0, count)`.
    pub fn full(count: usize) -> Self {
        Self {
            start: 0,
            end: count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end.max(self.start)
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(r: VisibleRange) -> Self {
        r.indices()
    }
}

/// How the last render pass chose its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Only the buffered visible band is rendered.
    #[default]
    Windowed,
    /// Every row is rendered and both spacers collapse to zero (drag interactions).
    Full,
}

/// Animation mode for programmatic scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    /// Jump immediately (the DOM's `"auto"` behavior).
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spacer {
    Top,
    Bottom,
}

/// Where a rendered row goes inside the live viewport.
///
/// `top` is measured from the start of the full list, not from the first rendered row: the
/// viewport sits below the top spacer in flow, so hosts can use it as-is. Rows span the full
/// width (`left = right = 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowPlacement {
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

/// Summary of a completed render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderPass {
    pub range: VisibleRange,
    pub mode: RenderMode,
    /// Rows appended to the viewport.
    pub rendered: usize,
    /// Indexes for which `render_item` returned `None`.
    pub skipped: usize,
    pub spacer_top: f64,
    pub spacer_bottom: f64,
}
