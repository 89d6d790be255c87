use crate::VisibleRange;

/// Item count, row height and viewport geometry, plus everything derived from them.
///
/// All heights are pixels. The model never panics: a degenerate row height (zero, negative, NaN,
/// infinite) yields a zero total height and empty visible ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutModel {
    item_height: f64,
    total_items: usize,
    viewport_height: f64,
    scroll_top: f64,
}

impl LayoutModel {
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            total_items: 0,
            viewport_height: 0.0,
            scroll_top: 0.0,
        }
    }

    /// The configured row height, as given.
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// The row height if it is usable for layout math.
    pub fn row_height(&self) -> Option<f64> {
        is_valid_height(self.item_height).then_some(self.item_height)
    }

    /// Replaces the row height. Non-positive or non-finite values are rejected and leave the
    /// model untouched; returns whether the height was applied.
    pub fn set_item_height(&mut self, item_height: f64) -> bool {
        if !is_valid_height(item_height) {
            return false;
        }
        self.item_height = item_height;
        true
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    pub fn total_height(&self) -> f64 {
        self.row_height()
            .map_or(0.0, |h| self.total_items as f64 * h)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Negative and NaN heights are stored as 0 (an unlaid-out container).
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top.max(0.0);
    }

    /// Pixel offset of row `index` from the start of the list.
    pub fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.item_height
    }

    /// `floor(offset / item_height)`, with no bounds check.
    ///
    /// Callers validate the result against `total_items`. Degenerate inputs saturate rather than
    /// panic. `item_at_position(item_offset(i)) == i` holds for fractional heights too.
    pub fn item_at_position(&self, offset: f64) -> i64 {
        snap(offset / self.item_height).floor() as i64
    }

    /// Buffered range for the current scroll offset and viewport height.
    pub fn visible_range(&self, buffer_items: usize) -> VisibleRange {
        self.visible_range_for(self.scroll_top, self.viewport_height, buffer_items)
    }

    /// Buffered range for an arbitrary scroll offset and viewport height.
    ///
    /// `start = floor(scroll_top / h) - buffer`, `end = ceil((scroll_top + viewport) / h) + buffer`,
    /// clamped so that `0 <= start <= end <= total_items`. Partially visible rows are always
    /// included.
    pub fn visible_range_for(
        &self,
        scroll_top: f64,
        viewport_height: f64,
        buffer_items: usize,
    ) -> VisibleRange {
        let count = self.total_items;
        let Some(h) = self.row_height() else {
            return VisibleRange::EMPTY;
        };
        if count == 0 {
            return VisibleRange::EMPTY;
        }

        let scroll_top = scroll_top.max(0.0);
        let viewport_height = viewport_height.max(0.0);
        let first = to_index(snap(scroll_top / h).floor());
        let last = to_index(snap((scroll_top + viewport_height) / h).ceil());

        let end = last.saturating_add(buffer_items).min(count);
        let start = first.saturating_sub(buffer_items).min(end);
        VisibleRange { start, end }
    }

    /// Heights of the top and bottom spacers for a windowed range.
    pub fn spacer_heights(&self, range: VisibleRange) -> (f64, f64) {
        let Some(h) = self.row_height() else {
            return (0.0, 0.0);
        };
        let end = range.end.min(self.total_items);
        let start = range.start.min(end);
        let top = start as f64 * h;
        let bottom = (self.total_items - end) as f64 * h;
        (top, bottom)
    }
}

fn is_valid_height(h: f64) -> bool {
    h.is_finite() && h > 0.0
}

/// Rounds a row quotient to the nearest integer when it is within a few ulps of it, so that
/// `(i * h) / h` floors and ceils to `i`.
fn snap(q: f64) -> f64 {
    let r = q.round();
    if (q - r).abs() <= f64::EPSILON * 4.0 * r.abs().max(1.0) {
        r
    } else {
        q
    }
}

fn to_index(v: f64) -> usize {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    // Saturates at usize::MAX.
    v as usize
}
