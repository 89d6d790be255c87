use crate::{RowPlacement, ScrollBehavior, Spacer};

/// The scrollable element the list lives in.
pub trait ScrollContainer {
    /// Current client (visible) height in pixels.
    fn client_height(&self) -> f64;

    /// Current scroll offset in pixels.
    fn scroll_top(&self) -> f64;

    /// Scrolls the container to `top`.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

/// The element tree the renderer draws into.
///
/// A host owns the three-part scaffold (top spacer, live viewport, bottom spacer) inside its
/// container. The renderer is the only writer while it is alive.
///
/// Every method must degrade to a no-op when its target element is missing (removed externally,
/// not mounted yet, already torn down). Hosts never report errors back to the renderer.
pub trait ListHost: ScrollContainer {
    /// A detached row produced by `render_item`.
    type Node;

    /// Clears the container, then appends the top spacer, the viewport and the bottom spacer in
    /// that order. Spacers start at height 0 and are non-interactive; the viewport spans the full
    /// width and reserves at least `viewport_min_height` so an empty list keeps its scroll area.
    fn mount_scaffold(&mut self, viewport_min_height: f64);

    fn set_spacer_height(&mut self, spacer: Spacer, height: f64);

    /// Removes every row from the viewport.
    fn clear_viewport(&mut self);

    /// Sizes the viewport to the rendered range, `(end - start) * item_height`.
    ///
    /// Called once per pass, after [`Self::clear_viewport`] and before any row is appended. The
    /// span does not depend on which rows `render_item` actually produced, so the spacers and the
    /// viewport always add up to the full list height.
    fn set_viewport_span(&mut self, height: f64);

    /// Appends a row to the viewport, absolutely positioned per `placement`.
    fn append_row(&mut self, node: Self::Node, placement: RowPlacement);

    /// Writes `message` into the live region identified by `announcer_id`.
    ///
    /// Returns `false` when no such element exists; that is not an error.
    fn announce(&mut self, announcer_id: &str, message: &str) -> bool {
        let _ = (announcer_id, message);
        false
    }

    /// Clears the container and releases the scaffold elements.
    fn teardown(&mut self);
}
