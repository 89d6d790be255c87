use std::rc::Rc;

use crate::{
    ConfigError, Debounce, LayoutModel, LayoutSnapshot, ListConfig, ListHost, OnRenderCallback,
    RenderItem, RenderMode, RenderPass, RendererOptions, RowPlacement, ScrollBehavior, Spacer,
    Throttle, VisibleRange,
};

/// A windowed list renderer.
///
/// Displays a large, uniform-height collection inside a fixed-height scroll container while only
/// materializing the rows that intersect the viewport (plus `buffer_items` on each side). Two
/// spacers stand in for the rows above and below the window, so the container's native scrollbar
/// always reflects the full list.
///
/// The renderer is UI-agnostic:
/// - It reaches the element tree only through a [`ListHost`].
/// - The authoritative `[start, end)` range is renderer state; the host's rows are a disposable
///   projection rebuilt on every pass.
/// - Your adapter forwards scroll/resize events with a millisecond timestamp and calls
///   [`Self::tick`] when [`Self::next_deadline`] passes.
///
/// After every pass:
/// - `spacer_top + (end - start) * item_height + spacer_bottom == total_height`
/// - `0 <= start <= end <= len()`
///
/// While dragging ([`Self::set_dragging`]) every row is rendered and both spacers are 0.
pub struct WindowedListRenderer<T, H: ListHost> {
    host: H,
    config: ListConfig,
    render_item: RenderItem<T, H::Node>,
    on_render: Option<OnRenderCallback>,

    items: Rc<[T]>,
    layout: LayoutModel,
    dragging: bool,

    range: VisibleRange,
    mode: RenderMode,

    scroll_throttle: Throttle,
    resize_debounce: Debounce<f64>,
}

impl<T, H: ListHost> WindowedListRenderer<T, H> {
    /// Builds the scaffold inside `host` and starts listening.
    ///
    /// Nothing is rendered until [`Self::set_items`]. Degenerate configuration is accepted and
    /// renders nothing; use [`Self::try_new`] to reject it instead.
    pub fn new(mut host: H, options: RendererOptions<T, H::Node>) -> Self {
        let RendererOptions {
            config,
            render_item,
            on_render,
        } = options;

        let mut layout = LayoutModel::new(config.item_height);
        layout.set_viewport_height(host.client_height());
        layout.set_scroll_top(host.scroll_top());
        host.mount_scaffold(layout.viewport_height());

        wdebug!(
            item_height = config.item_height,
            buffer_items = config.buffer_items,
            viewport_height = layout.viewport_height(),
            "WindowedListRenderer::new"
        );

        Self {
            host,
            scroll_throttle: Throttle::new(config.scroll_throttle_ms),
            resize_debounce: Debounce::new(config.resize_debounce_ms),
            config,
            render_item,
            on_render,
            items: Rc::from(Vec::new()),
            layout,
            dragging: false,
            range: VisibleRange::EMPTY,
            mode: RenderMode::Windowed,
        }
    }

    /// Same as [`Self::new`], but rejects a non-positive row height or an empty announcer id.
    pub fn try_new(host: H, options: RendererOptions<T, H::Node>) -> Result<Self, ConfigError> {
        options.config.validate()?;
        Ok(Self::new(host, options))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.layout.total_items()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn item_height(&self) -> f64 {
        self.layout.item_height()
    }

    pub fn total_height(&self) -> f64 {
        self.layout.total_height()
    }

    pub fn viewport_height(&self) -> f64 {
        self.layout.viewport_height()
    }

    pub fn scroll_top(&self) -> f64 {
        self.layout.scroll_top()
    }

    pub fn buffer_items(&self) -> usize {
        self.config.buffer_items
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The mode of the last render pass.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn layout(&self) -> &LayoutModel {
        &self.layout
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            item_height: self.layout.item_height(),
            total_items: self.layout.total_items(),
            total_height: self.layout.total_height(),
            viewport_height: self.layout.viewport_height(),
            scroll_top: self.layout.scroll_top(),
            range: self.range,
            mode: self.mode,
        }
    }

    /// Replaces the backing collection and the render callback, then re-renders.
    pub fn set_items(
        &mut self,
        items: impl Into<Rc<[T]>>,
        render_item: impl Fn(&T, usize) -> Option<H::Node> + 'static,
    ) {
        self.render_item = Rc::new(render_item);
        self.replace_items(items);
    }

    /// Replaces the backing collection, keeping the current render callback.
    pub fn replace_items(&mut self, items: impl Into<Rc<[T]>>) {
        self.items = items.into();
        wdebug!(count = self.items.len(), "set_items");
        self.refresh();
    }

    /// Swaps the render callback and re-renders the current range.
    pub fn set_render_item(
        &mut self,
        render_item: impl Fn(&T, usize) -> Option<H::Node> + 'static,
    ) {
        self.render_item = Rc::new(render_item);
        self.update_viewport();
    }

    pub fn set_on_render(&mut self, on_render: Option<impl Fn(&RenderPass) + 'static>) {
        self.on_render = on_render.map(|f| -> OnRenderCallback { Rc::new(f) });
    }

    /// Re-derives the item count and total height, then forces a render pass.
    pub fn refresh(&mut self) {
        self.layout.set_total_items(self.items.len());
        self.update_viewport();
    }

    /// Replaces the row height and refreshes.
    ///
    /// Non-positive or non-finite heights are ignored.
    pub fn update_item_height(&mut self, item_height: f64) {
        if !self.layout.set_item_height(item_height) {
            wwarn!(item_height, "update_item_height: ignoring non-positive height");
            return;
        }
        self.config.item_height = item_height;
        self.refresh();
    }

    pub fn set_buffer_items(&mut self, buffer_items: usize) {
        if self.config.buffer_items == buffer_items {
            return;
        }
        self.config.buffer_items = buffer_items;
        self.update_viewport();
    }

    /// Enters (`true`) or leaves (`false`) full mode and re-renders immediately.
    pub fn set_dragging(&mut self, dragging: bool) {
        wdebug!(dragging, "set_dragging");
        self.dragging = dragging;
        self.update_viewport();
    }

    /// Smoothly scrolls the container so that row `index` is at the top.
    pub fn scroll_to_item(&mut self, index: usize) {
        self.scroll_to_item_with(index, ScrollBehavior::Smooth);
    }

    /// Scrolls the container so that row `index` is at the top.
    ///
    /// Out-of-range indexes are ignored and no scroll command is issued.
    pub fn scroll_to_item_with(&mut self, index: usize, behavior: ScrollBehavior) {
        if index >= self.layout.total_items() {
            wtrace!(
                index,
                count = self.layout.total_items(),
                "scroll_to_item: out of range"
            );
            return;
        }
        let top = self.layout.item_offset(index);
        wtrace!(index, top, ?behavior, "scroll_to_item");
        self.host.scroll_to(top, behavior);
    }

    /// The range of the last render pass. Does not recompute.
    pub fn visible_range(&self) -> VisibleRange {
        self.range
    }

    /// The indexes of the last render pass, ascending.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.range.indices().collect()
    }

    /// `floor(offset / item_height)`. The result is not clamped to `[0, len())`.
    pub fn item_at_position(&self, offset: f64) -> i64 {
        self.layout.item_at_position(offset)
    }

    /// Pixel offset of row `index` from the start of the list.
    pub fn item_offset(&self, index: usize) -> f64 {
        self.layout.item_offset(index)
    }

    /// Forwards a container `scroll` event.
    ///
    /// The first event of a burst re-measures and renders immediately; later events in the same
    /// interval are folded into a trailing pass run by [`Self::tick`]. Returns whether a pass ran.
    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        if !self.scroll_throttle.hit(now_ms) {
            return false;
        }
        self.sync_scroll_top();
        self.update_viewport();
        true
    }

    /// Forwards a window `resize` event.
    ///
    /// The container height is sampled now but only applied once the burst has been quiet for
    /// `resize_debounce_ms`, by [`Self::tick`].
    pub fn on_resize(&mut self, now_ms: u64) {
        let measured = self.host.client_height();
        wtrace!(now_ms, measured, "on_resize");
        self.resize_debounce.hit(now_ms, measured);
    }

    /// Runs the trailing scroll pass and/or the debounced resize when due.
    ///
    /// Returns whether a render pass ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let scrolled = self.scroll_throttle.poll(now_ms);
        let resized = self.resize_debounce.poll(now_ms);
        if !scrolled && resized.is_none() {
            return false;
        }

        if scrolled {
            self.sync_scroll_top();
        }
        if let Some(viewport_height) = resized {
            wdebug!(viewport_height, "resize applied");
            self.layout.set_viewport_height(viewport_height);
        }
        self.update_viewport();
        true
    }

    /// The earliest timestamp at which [`Self::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        match (
            self.scroll_throttle.deadline(),
            self.resize_debounce.deadline(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Tears down the scaffold and hands the host back.
    ///
    /// Consuming `self` drops the pending timers; no further pass can run.
    pub fn destroy(mut self) -> H {
        wdebug!(count = self.layout.total_items(), "destroy");
        self.scroll_throttle.cancel();
        self.resize_debounce.cancel();
        self.host.teardown();
        self.host
    }

    fn sync_scroll_top(&mut self) {
        let scroll_top = self.host.scroll_top();
        self.layout.set_scroll_top(scroll_top);
    }

    fn update_viewport(&mut self) {
        if self.dragging {
            let full = VisibleRange::full(self.layout.total_items());
            self.render(full, RenderMode::Full);
        } else {
            let range = self.layout.visible_range(self.config.buffer_items);
            self.render(range, RenderMode::Windowed);
        }
    }

    fn render(&mut self, range: VisibleRange, mode: RenderMode) {
        let (spacer_top, spacer_bottom) = match mode {
            RenderMode::Full => (0.0, 0.0),
            RenderMode::Windowed => self.layout.spacer_heights(range),
        };
        self.host.set_spacer_height(Spacer::Top, spacer_top);
        self.host.set_spacer_height(Spacer::Bottom, spacer_bottom);
        self.host.clear_viewport();

        let row_height = self.layout.row_height().unwrap_or(0.0);
        self.host.set_viewport_span(range.len() as f64 * row_height);
        let mut rendered = 0usize;
        let mut skipped = 0usize;
        for index in range.indices() {
            let Some(item) = self.items.get(index) else {
                break;
            };
            match (self.render_item)(item, index) {
                Some(node) => {
                    self.host.append_row(
                        node,
                        RowPlacement {
                            index,
                            top: index as f64 * row_height,
                            height: row_height,
                        },
                    );
                    rendered += 1;
                }
                None => {
                    wtrace!(index, "render_item returned None");
                    skipped += 1;
                }
            }
        }

        self.range = range;
        self.mode = mode;

        let total = self.layout.total_items();
        if let Some(announcer_id) = &self.config.announcer_id {
            let message = announcement(range, total);
            if !self.host.announce(announcer_id, &message) {
                wtrace!(announcer_id = announcer_id.as_str(), "announcer missing");
            }
        }

        let pass = RenderPass {
            range,
            mode,
            rendered,
            skipped,
            spacer_top,
            spacer_bottom,
        };
        wtrace!(
            start = range.start,
            end = range.end,
            ?mode,
            rendered,
            skipped,
            "render pass"
        );
        if let Some(cb) = &self.on_render {
            cb(&pass);
        }
    }
}

impl<T, H> core::fmt::Debug for WindowedListRenderer<T, H>
where
    H: ListHost + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedListRenderer")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("dragging", &self.dragging)
            .field("range", &self.range)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// The live-region text for a render pass.
///
/// `"Showing {start + 1} to {end} of {total}"`, or `"Showing 0 of {total}"` when nothing is in
/// range.
pub fn announcement(range: VisibleRange, total: usize) -> String {
    if range.is_empty() {
        return format!("Showing 0 of {total}");
    }
    format!("Showing {} to {} of {}", range.start + 1, range.end, total)
}
