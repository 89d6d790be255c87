use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, Window};
use windowed_list::{
    LayoutSnapshot, RendererOptions, ScrollBehavior, VisibleRange, WindowedListRenderer,
};

use crate::{DomError, DomHost};

type Renderer<T> = WindowedListRenderer<T, DomHost>;

struct Inner<T: 'static> {
    window: Window,
    renderer: RefCell<Option<Renderer<T>>>,
    timeout: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl<T: 'static> Inner<T> {
    fn now_ms(&self) -> u64 {
        self.window
            .performance()
            .map_or(0.0, |p| p.now())
            .max(0.0) as u64
    }

    /// Runs `f` against the live renderer. Re-entrant calls (e.g. from `render_item`) and calls
    /// after teardown are dropped.
    fn with<R>(&self, f: impl FnOnce(&mut Renderer<T>, u64) -> R) -> Option<R> {
        let now_ms = self.now_ms();
        let mut guard = self.renderer.try_borrow_mut().ok()?;
        let renderer = guard.as_mut()?;
        Some(f(renderer, now_ms))
    }

    fn read<R>(&self, f: impl FnOnce(&Renderer<T>) -> R) -> Option<R> {
        let guard = self.renderer.try_borrow().ok()?;
        guard.as_ref().map(f)
    }

    /// Replaces any pending timeout with one for the renderer's next deadline.
    fn schedule(&self) {
        self.clear_timeout();
        let Some(deadline) = self.read(|r| r.next_deadline()).flatten() else {
            return;
        };
        let delay = deadline.saturating_sub(self.now_ms()).min(i32::MAX as u64) as i32;

        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        let scheduled = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                delay,
            );
        match scheduled {
            Ok(handle) => self.timeout.set(Some(handle)),
            Err(_) => {
                dwarn!(delay, "setTimeout failed");
            }
        }
    }

    /// Cancels the pending timeout and destroys the renderer, clearing the container.
    fn teardown(&self) {
        self.clear_timeout();
        self.tick.borrow_mut().take();
        let renderer = self
            .renderer
            .try_borrow_mut()
            .ok()
            .and_then(|mut guard| guard.take());
        if let Some(renderer) = renderer {
            renderer.destroy();
        }
    }

    fn clear_timeout(&self) {
        if let Some(handle) = self.timeout.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// A [`WindowedListRenderer`] wired to a live DOM container.
///
/// Construction builds the scaffold, attaches a `scroll` listener to the container and a
/// `resize` listener to `window`. Dropping the list (or calling [`Self::destroy`]) removes both
/// listeners, cancels the pending timeout and clears the container.
pub struct DomWindowedList<T: 'static> {
    inner: Rc<Inner<T>>,
    container: HtmlElement,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl<T: 'static> DomWindowedList<T> {
    pub fn new(
        container: HtmlElement,
        options: RendererOptions<T, HtmlElement>,
    ) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let host = DomHost::new(container.clone()).ok_or(DomError::NoDocument)?;
        let inner = Rc::new(Inner {
            window,
            renderer: RefCell::new(Some(WindowedListRenderer::new(host, options))),
            timeout: Cell::new(None),
            tick: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            with_inner(&weak, |inner| {
                inner.timeout.set(None);
                inner.with(|r, now_ms| r.tick(now_ms));
                inner.schedule();
            });
        }));

        let weak = Rc::downgrade(&inner);
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            with_inner(&weak, |inner| {
                inner.with(|r, now_ms| r.on_scroll(now_ms));
                inner.schedule();
            });
        });

        let weak = Rc::downgrade(&inner);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            with_inner(&weak, |inner| {
                inner.with(|r, now_ms| r.on_resize(now_ms));
                inner.schedule();
            });
        });

        if let Err(err) = container
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        {
            inner.teardown();
            return Err(DomError::listener("scroll", err));
        }
        if let Err(err) = inner
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            let _ = container
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            inner.teardown();
            return Err(DomError::listener("resize", err));
        }
        dtrace!("listeners attached");

        Ok(Self {
            inner,
            container,
            on_scroll,
            on_resize,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn set_items(
        &self,
        items: impl Into<Rc<[T]>>,
        render_item: impl Fn(&T, usize) -> Option<HtmlElement> + 'static,
    ) {
        self.inner.with(|r, _| r.set_items(items, render_item));
    }

    pub fn replace_items(&self, items: impl Into<Rc<[T]>>) {
        self.inner.with(|r, _| r.replace_items(items));
    }

    pub fn refresh(&self) {
        self.inner.with(|r, _| r.refresh());
    }

    pub fn update_item_height(&self, item_height: f64) {
        self.inner.with(|r, _| r.update_item_height(item_height));
    }

    pub fn set_dragging(&self, dragging: bool) {
        self.inner.with(|r, _| r.set_dragging(dragging));
    }

    pub fn scroll_to_item(&self, index: usize) {
        self.scroll_to_item_with(index, ScrollBehavior::Smooth);
    }

    pub fn scroll_to_item_with(&self, index: usize, behavior: ScrollBehavior) {
        self.inner.with(|r, _| r.scroll_to_item_with(index, behavior));
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.inner
            .read(|r| r.visible_range())
            .unwrap_or_default()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.inner
            .read(|r| r.visible_indices())
            .unwrap_or_default()
    }

    pub fn item_at_position(&self, offset: f64) -> i64 {
        self.inner
            .read(|r| r.item_at_position(offset))
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Option<LayoutSnapshot> {
        self.inner.read(|r| r.snapshot())
    }

    /// Runs `f` against the underlying renderer.
    pub fn with_renderer<R>(
        &self,
        f: impl FnOnce(&mut WindowedListRenderer<T, DomHost>) -> R,
    ) -> Option<R> {
        self.inner.with(|r, _| f(r))
    }

    /// Detaches listeners and clears the container.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<T: 'static> Drop for DomWindowedList<T> {
    fn drop(&mut self) {
        let _ = self.container.remove_event_listener_with_callback(
            "scroll",
            self.on_scroll.as_ref().unchecked_ref(),
        );
        let _ = self.inner.window.remove_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        );
        self.inner.teardown();
        dtrace!("destroyed");
    }
}

fn with_inner<T: 'static>(weak: &Weak<Inner<T>>, f: impl FnOnce(&Inner<T>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}
