//! A headless windowed list renderer.
//!
//! For a browser binding (web-sys scaffold, listeners, timers), see the `windowed-list-dom` crate.
//!
//! This crate keeps three quantities consistent while a very large, uniform-height list is
//! scrolled: the illusion of a fully populated scroll area (two spacers), the rendered subset of
//! rows, and the mapping between pixel offsets and item indexes.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the scroll container geometry (client height, scroll offset, a scroll-to primitive)
//! - a scaffold with a top spacer, a live viewport and a bottom spacer
//! - a millisecond clock for the scroll throttle and resize debounce (`on_scroll`, `on_resize`,
//!   `tick`)
//!
//! # Announcements
//!
//! After every render pass the renderer writes a summary into the live region named by
//! `ListConfig::announcer_id` (default `"sr-announcer"`):
//!
//! - `"Showing {start + 1} to {end} of {total}"` for a non-empty range, e.g.
//!   `"Showing 3 to 18 of 100"`;
//! - `"Showing 0 of {total}"` when the range is empty (an empty list, or a degenerate row height).
//!   The `"{start + 1} to {end}"` form would read `"1 to 0"` there.
//!
//! [`announcement`] produces the same text for hosts that render it themselves.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod host;
mod layout;
mod options;
mod renderer;
mod state;
mod timing;
mod types;


pub use error::ConfigError;
pub use host::{ListHost, ScrollContainer};
pub use layout::LayoutModel;
pub use options::{DEFAULT_ANNOUNCER_ID, ListConfig, OnRenderCallback, RenderItem, RendererOptions};
pub use renderer::{WindowedListRenderer, announcement};
pub use state::LayoutSnapshot;
pub use timing::{Debounce, Throttle};
pub use types::{RenderMode, RenderPass, RowPlacement, ScrollBehavior, Spacer, VisibleRange};
