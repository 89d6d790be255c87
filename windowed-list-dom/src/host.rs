use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollToOptions};
use windowed_list::{ListHost, RowPlacement, ScrollBehavior, ScrollContainer, Spacer};

/// A [`ListHost`] over a scrollable `HtmlElement`.
///
/// The container is expected to have a fixed height and `overflow-y: auto`. Inside it the host
/// keeps three children: a top spacer, the live viewport and a bottom spacer. Rows are absolutely
/// positioned inside the viewport; since the viewport already sits below the top spacer, a row's
/// list-relative offset is translated by the current top spacer height.
///
/// Every method is a no-op once the scaffold elements are gone (never mounted, failed to create,
/// torn down, or detached by someone else). Style and DOM errors are swallowed.
#[derive(Debug)]
pub struct DomHost {
    document: Document,
    container: HtmlElement,
    spacer_top: Option<HtmlElement>,
    viewport: Option<HtmlElement>,
    spacer_bottom: Option<HtmlElement>,
    top_offset: f64,
}

impl DomHost {
    /// Returns `None` when the container is not attached to a document.
    pub fn new(container: HtmlElement) -> Option<Self> {
        let document = container.owner_document()?;
        Some(Self {
            document,
            container,
            spacer_top: None,
            viewport: None,
            spacer_bottom: None,
            top_offset: 0.0,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn viewport(&self) -> Option<&HtmlElement> {
        self.viewport.as_ref()
    }

    fn create_div(&self) -> Option<HtmlElement> {
        self.document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn create_spacer(&self) -> Option<HtmlElement> {
        let spacer = self.create_div()?;
        set_style(&spacer, "height", "0px");
        set_style(&spacer, "position", "relative");
        set_style(&spacer, "pointer-events", "none");
        let _ = spacer.set_attribute("aria-hidden", "true");
        Some(spacer)
    }
}

impl ScrollContainer for DomHost {
    fn client_height(&self) -> f64 {
        self.container.client_height() as f64
    }

    fn scroll_top(&self) -> f64 {
        self.container.scroll_top() as f64
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Auto,
        });
        self.container.scroll_to_with_scroll_to_options(&opts);
    }
}

impl ListHost for DomHost {
    type Node = HtmlElement;

    fn mount_scaffold(&mut self, viewport_min_height: f64) {
        self.container.set_inner_html("");
        // Spacer resizes must not be compensated by browser scroll anchoring.
        set_style(&self.container, "overflow-anchor", "none");
        self.top_offset = 0.0;

        self.spacer_top = self.create_spacer();
        self.viewport = self.create_div();
        self.spacer_bottom = self.create_spacer();

        if let Some(viewport) = &self.viewport {
            set_style(viewport, "position", "relative");
            set_style(viewport, "width", "100%");
            set_style(viewport, "min-height", &px(viewport_min_height));
        }

        for el in [&self.spacer_top, &self.viewport, &self.spacer_bottom]
            .into_iter()
            .flatten()
        {
            if self.container.append_child(el).is_err() {
                dwarn!("mount_scaffold: append_child failed");
            }
        }
        dtrace!(viewport_min_height, "scaffold mounted");
    }

    fn set_spacer_height(&mut self, spacer: Spacer, height: f64) {
        let el = match spacer {
            Spacer::Top => {
                self.top_offset = height;
                self.spacer_top.as_ref()
            }
            Spacer::Bottom => self.spacer_bottom.as_ref(),
        };
        if let Some(el) = el {
            set_style(el, "height", &px(height));
        }
    }

    fn clear_viewport(&mut self) {
        if let Some(viewport) = &self.viewport {
            viewport.set_inner_html("");
        }
    }

    fn set_viewport_span(&mut self, height: f64) {
        if let Some(viewport) = &self.viewport {
            set_style(viewport, "height", &px(height));
        }
    }

    fn append_row(&mut self, node: HtmlElement, placement: RowPlacement) {
        let Some(viewport) = &self.viewport else {
            return;
        };
        let top = placement.top - self.top_offset;
        set_style(&node, "position", "absolute");
        set_style(&node, "top", &px(top));
        set_style(&node, "left", "0");
        set_style(&node, "right", "0");
        set_style(&node, "width", "100%");
        set_style(&node, "height", &px(placement.height));
        let _ = node.set_attribute("data-index", &placement.index.to_string());
        if viewport.append_child(&node).is_err() {
            dwarn!(index = placement.index, "append_row: append_child failed");
        }
    }

    fn announce(&mut self, announcer_id: &str, message: &str) -> bool {
        let Some(el) = self.document.get_element_by_id(announcer_id) else {
            return false;
        };
        el.set_text_content(Some(message));
        true
    }

    fn teardown(&mut self) {
        self.container.set_inner_html("");
        self.spacer_top = None;
        self.viewport = None;
        self.spacer_bottom = None;
        self.top_offset = 0.0;
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn px(v: f64) -> String {
    format!("{v}px")
}
