// Example: a resize burst is applied once, with the last measured height.
use std::cell::Cell;
use std::rc::Rc;

use windowed_list::{
    ListHost, RendererOptions, RowPlacement, ScrollBehavior, ScrollContainer, Spacer,
    WindowedListRenderer,
};

struct ResizableHost {
    height: Rc<Cell<f64>>,
}

impl ScrollContainer for ResizableHost {
    fn client_height(&self) -> f64 {
        self.height.get()
    }

    fn scroll_top(&self) -> f64 {
        0.0
    }

    fn scroll_to(&mut self, _top: f64, _behavior: ScrollBehavior) {}
}

impl ListHost for ResizableHost {
    type Node = usize;

    fn mount_scaffold(&mut self, _viewport_min_height: f64) {}
    fn set_spacer_height(&mut self, _spacer: Spacer, _height: f64) {}
    fn clear_viewport(&mut self) {}
    fn set_viewport_span(&mut self, _height: f64) {}
    fn append_row(&mut self, _node: usize, _placement: RowPlacement) {}
    fn teardown(&mut self) {}
}

fn main() {
    let height = Rc::new(Cell::new(400.0));
    let host = ResizableHost {
        height: Rc::clone(&height),
    };
    let opts = RendererOptions::new(32.0, |_: &u64, i| Some(i)).with_resize_debounce_ms(150);
    let mut list = WindowedListRenderer::new(host, opts);
    list.replace_items((0..5_000u64).collect::<Vec<_>>());
    println!("initial range={:?}", list.visible_range());

    for (now_ms, h) in [(0u64, 500.0), (30, 640.0), (60, 720.0)] {
        height.set(h);
        list.on_resize(now_ms);
    }
    println!("pending until {:?}", list.next_deadline());
    list.tick(100);
    println!("at 100ms viewport={}", list.viewport_height());
    list.tick(210);
    println!("at 210ms viewport={} range={:?}", list.viewport_height(), list.visible_range());
}
