//! Browser host for the `windowed-list` crate.
//!
//! The `windowed-list` crate is UI-agnostic and owns the layout math and render scheduling. This
//! crate binds it to a real scrollable element through web-sys:
//!
//! - [`DomHost`] builds the spacer / viewport / spacer scaffold and positions rows.
//! - [`DomWindowedList`] attaches the container `scroll` listener and the window `resize`
//!   listener, and drives the throttle/debounce deadlines with `setTimeout`.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod binding;
mod error;
mod host;

pub use binding::DomWindowedList;
pub use error::DomError;
pub use host::DomHost;

pub use windowed_list::{
    ListConfig, RenderMode, RenderPass, RendererOptions, ScrollBehavior, VisibleRange,
};
