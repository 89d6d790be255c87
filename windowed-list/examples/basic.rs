// Example: drive the renderer with an in-memory host and watch the window move.
use windowed_list::{
    ListHost, RendererOptions, RowPlacement, ScrollBehavior, ScrollContainer, Spacer,
    WindowedListRenderer,
};

#[derive(Default)]
struct PrintHost {
    scroll_top: f64,
    rows: Vec<String>,
    spacers: (f64, f64),
}

impl ScrollContainer for PrintHost {
    fn client_height(&self) -> f64 {
        500.0
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_to(&mut self, top: f64, _behavior: ScrollBehavior) {
        self.scroll_top = top;
    }
}

impl ListHost for PrintHost {
    type Node = String;

    fn mount_scaffold(&mut self, _viewport_min_height: f64) {}

    fn set_spacer_height(&mut self, spacer: Spacer, height: f64) {
        match spacer {
            Spacer::Top => self.spacers.0 = height,
            Spacer::Bottom => self.spacers.1 = height,
        }
    }

    fn clear_viewport(&mut self) {
        self.rows.clear();
    }

    fn set_viewport_span(&mut self, _height: f64) {}

    fn append_row(&mut self, node: String, placement: RowPlacement) {
        self.rows.push(format!("{node}@{}", placement.top));
    }

    fn teardown(&mut self) {
        self.rows.clear();
    }
}

fn main() {
    let opts = RendererOptions::new(50.0, |title: &String, _| Some(title.clone()))
        .with_buffer_items(2)
        .with_on_render(Some(|pass: &windowed_list::RenderPass| {
            println!(
                "render {:?}: {} rows, spacers {} / {}",
                pass.range, pass.rendered, pass.spacer_top, pass.spacer_bottom
            );
        }));
    let mut list = WindowedListRenderer::new(PrintHost::default(), opts);

    let tasks: Vec<String> = (0..10_000).map(|i| format!("task #{i}")).collect();
    list.replace_items(tasks);
    println!("total_height={}", list.total_height());

    // A scroll burst: one leading pass, one trailing pass.
    for (now_ms, offset) in [(0u64, 1000.0), (4, 1200.0), (8, 1400.0)] {
        list.host_mut().scroll_top = offset;
        list.on_scroll(now_ms);
    }
    if let Some(deadline) = list.next_deadline() {
        list.tick(deadline);
    }
    println!("first row: {:?}", list.host().rows.first());

    list.scroll_to_item_with(9_000, ScrollBehavior::Instant);
    list.on_scroll(100);
    println!("after scroll_to_item: {:?}", list.visible_range());
    println!("item at 123456px: {}", list.item_at_position(123_456.0));

    list.set_dragging(true);
    println!("dragging renders {} rows", list.host().rows.len());
    list.set_dragging(false);

    list.destroy();
}
