use std::rc::Rc;

use crate::{ConfigError, RenderPass};

/// Well-known id of the screen-reader live region.
pub const DEFAULT_ANNOUNCER_ID: &str = "sr-announcer";

/// Produces a detached node for one item, or `None` to leave that index out of the pass.
///
/// Rendering is single-threaded, so the callback is reference counted with `Rc` and may capture
/// UI handles that are not `Send`.
pub type RenderItem<T, N> = Rc<dyn Fn(&T, usize) -> Option<N>>;

/// Observer fired after every render pass.
pub type OnRenderCallback = Rc<dyn Fn(&RenderPass)>;

/// Plain-data renderer configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` and missing fields
/// fall back to their defaults, so it can be embedded in an application's own config file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Uniform row height in pixels. Must be positive.
    pub item_height: f64,
    /// Extra rows rendered past each viewport edge.
    pub buffer_items: usize,
    /// Minimum spacing between scroll-driven render passes.
    pub scroll_throttle_ms: u64,
    /// Quiet period before a resize burst is applied.
    pub resize_debounce_ms: u64,
    /// Id of the live region receiving range announcements; `None` disables announcements.
    pub announcer_id: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 48.0,
            buffer_items: 3,
            scroll_throttle_ms: 16,
            resize_debounce_ms: 150,
            announcer_id: Some(DEFAULT_ANNOUNCER_ID.to_owned()),
        }
    }
}

impl ListConfig {
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            ..Self::default()
        }
    }

    /// Checks the values the renderer would otherwise degrade on silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(ConfigError::InvalidItemHeight {
                height: self.item_height,
            });
        }
        if self.announcer_id.as_deref() == Some("") {
            return Err(ConfigError::EmptyAnnouncerId);
        }
        Ok(())
    }
}

/// Configuration for [`crate::WindowedListRenderer`].
///
/// Cheap to clone: the callbacks are stored in `Rc`s.
pub struct RendererOptions<T, N> {
    pub config: ListConfig,
    pub render_item: RenderItem<T, N>,
    pub on_render: Option<OnRenderCallback>,
}

impl<T, N> Clone for RendererOptions<T, N> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            render_item: Rc::clone(&self.render_item),
            on_render: self.on_render.clone(),
        }
    }
}

impl<T, N> RendererOptions<T, N> {
    /// Creates options with the default [`ListConfig`] and the given row height.
    pub fn new(item_height: f64, render_item: impl Fn(&T, usize) -> Option<N> + 'static) -> Self {
        Self::from_config(ListConfig::new(item_height), render_item)
    }

    pub fn from_config(
        config: ListConfig,
        render_item: impl Fn(&T, usize) -> Option<N> + 'static,
    ) -> Self {
        Self {
            config,
            render_item: Rc::new(render_item),
            on_render: None,
        }
    }

    pub fn with_buffer_items(mut self, buffer_items: usize) -> Self {
        self.config.buffer_items = buffer_items;
        self
    }

    pub fn with_scroll_throttle_ms(mut self, interval_ms: u64) -> Self {
        self.config.scroll_throttle_ms = interval_ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.config.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_announcer_id(mut self, announcer_id: impl Into<String>) -> Self {
        self.config.announcer_id = Some(announcer_id.into());
        self
    }

    /// Disables range announcements.
    pub fn without_announcer(mut self) -> Self {
        self.config.announcer_id = None;
        self
    }

    pub fn with_render_item(
        mut self,
        render_item: impl Fn(&T, usize) -> Option<N> + 'static,
    ) -> Self {
        self.render_item = Rc::new(render_item);
        self
    }

    pub fn with_on_render(mut self, on_render: Option<impl Fn(&RenderPass) + 'static>) -> Self {
        self.on_render = on_render.map(|f| -> OnRenderCallback { Rc::new(f) });
        self
    }
}

impl<T, N> core::fmt::Debug for RendererOptions<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RendererOptions")
            .field("config", &self.config)
            .field("on_render", &self.on_render.is_some())
            .finish_non_exhaustive()
    }
}
