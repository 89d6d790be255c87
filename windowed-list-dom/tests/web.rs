#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement};
use windowed_list::{ListHost, RowPlacement, ScrollContainer, Spacer, WindowedListRenderer};
use windowed_list_dom::{DomHost, DomWindowedList, RendererOptions, VisibleRange};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container(height: u32) -> HtmlElement {
    let doc = document();
    let el = doc.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    el.style().set_property("height", &format!("{height}px")).unwrap();
    el.style().set_property("overflow-y", "auto").unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn fire(target: &web_sys::EventTarget, name: &str) {
    target.dispatch_event(&Event::new(name).unwrap()).unwrap();
}

fn child_height(el: &HtmlElement, index: u32) -> i32 {
    let mut child = el.first_element_child().unwrap();
    for _ in 0..index {
        child = child.next_element_sibling().unwrap();
    }
    child.dyn_into::<HtmlElement>().unwrap().offset_height()
}

fn row(label: &str) -> Option<HtmlElement> {
    let el = document().create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
    el.set_text_content(Some(label));
    Some(el)
}

#[wasm_bindgen_test]
fn mount_builds_three_part_scaffold() {
    let el = container(500);
    let mut host = DomHost::new(el.clone()).unwrap();
    host.mount_scaffold(500.0);
    assert_eq!(el.child_element_count(), 3);
    assert_eq!(host.client_height(), 500.0);
    assert_eq!(el.style().get_property_value("overflow-anchor").unwrap(), "none");

    host.set_spacer_height(Spacer::Top, 100.0);
    let top = el.first_element_child().unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(top.style().get_property_value("height").unwrap(), "100px");

    host.append_row(
        row("a").unwrap(),
        RowPlacement {
            index: 2,
            top: 100.0,
            height: 50.0,
        },
    );
    host.set_viewport_span(250.0);
    let viewport = host.viewport().unwrap();
    assert_eq!(viewport.style().get_property_value("height").unwrap(), "250px");
    assert_eq!(viewport.child_element_count(), 1);
    let first = viewport.first_element_child().unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(first.style().get_property_value("top").unwrap(), "0px");
    assert_eq!(first.get_attribute("data-index").as_deref(), Some("2"));

    host.teardown();
    assert_eq!(el.child_element_count(), 0);
    // No-ops once the scaffold is gone.
    host.set_spacer_height(Spacer::Bottom, 10.0);
    host.clear_viewport();
    el.remove();
}

#[wasm_bindgen_test]
fn renderer_draws_only_the_window() {
    let el = container(500);
    let host = DomHost::new(el.clone()).unwrap();
    let opts = RendererOptions::new(50.0, |item: &u32, _| row(&item.to_string()));
    let mut r = WindowedListRenderer::new(host, opts);
    r.replace_items((0..1000).collect::<Vec<u32>>());

    assert_eq!(r.visible_range(), VisibleRange::new(0, 13));
    assert_eq!(r.host().viewport().unwrap().child_element_count(), 13);

    let host = r.destroy();
    assert_eq!(host.container().child_element_count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn announcer_receives_range_text() {
    let doc = document();
    let announcer = doc.create_element("div").unwrap();
    announcer.set_id("sr-announcer");
    doc.body().unwrap().append_child(&announcer).unwrap();

    let el = container(500);
    let list = DomWindowedList::new(
        el.clone(),
        RendererOptions::new(50.0, |item: &u32, _| row(&item.to_string())),
    )
    .unwrap();
    list.replace_items((0..100).collect::<Vec<u32>>());
    assert_eq!(
        announcer.text_content().as_deref(),
        Some("Showing 1 to 13 of 100")
    );

    list.set_dragging(true);
    assert_eq!(list.visible_range(), VisibleRange::full(100));
    list.set_dragging(false);
    assert_eq!(list.visible_indices().len(), 13);

    list.destroy();
    assert_eq!(el.child_element_count(), 0);
    announcer.remove();
    el.remove();
}

#[wasm_bindgen_test]
fn skipped_trailing_row_keeps_full_scroll_height() {
    let el = container(200);
    let host = DomHost::new(el.clone()).unwrap();
    let opts = RendererOptions::new(50.0, |item: &u32, index| {
        if index == 25 {
            None
        } else {
            row(&item.to_string())
        }
    })
    .with_buffer_items(2);
    let mut r = WindowedListRenderer::new(host, opts);
    r.replace_items((0..100).collect::<Vec<u32>>());

    el.set_scroll_top(1000);
    r.on_scroll(0);
    assert_eq!(r.visible_range(), VisibleRange::new(18, 26));
    assert_eq!(r.host().viewport().unwrap().child_element_count(), 7);

    assert_eq!(child_height(&el, 0), 900);
    assert_eq!(child_height(&el, 1), 400);
    assert_eq!(child_height(&el, 2), 3700);
    let sum: i32 = (0..3).map(|i| child_height(&el, i)).sum();
    assert_eq!(sum as f64, r.total_height());

    r.destroy();
    el.remove();
}

#[wasm_bindgen_test]
async fn scroll_burst_settles_on_final_offset() {
    let el = container(500);
    let list = DomWindowedList::new(
        el.clone(),
        RendererOptions::new(50.0, |item: &u32, _| row(&item.to_string())),
    )
    .unwrap();
    list.replace_items((0..1000).collect::<Vec<u32>>());
    assert_eq!(list.visible_range(), VisibleRange::new(0, 13));

    for offset in [1000, 1500, 2000] {
        el.set_scroll_top(offset);
        fire(&el, "scroll");
    }
    sleep(100).await;
    // floor(2000 / 50) - 3 .. ceil(2500 / 50) + 3
    assert_eq!(list.visible_range(), VisibleRange::new(37, 53));
    assert_eq!(list.snapshot().unwrap().scroll_top, 2000.0);

    list.destroy();
    el.remove();
}

#[wasm_bindgen_test]
async fn resize_burst_applies_after_quiet_period() {
    let el = container(500);
    let window = web_sys::window().unwrap();
    let list = DomWindowedList::new(
        el.clone(),
        RendererOptions::new(50.0, |item: &u32, _| row(&item.to_string()))
            .with_resize_debounce_ms(50),
    )
    .unwrap();
    list.replace_items((0..1000).collect::<Vec<u32>>());

    for height in [600, 700, 800] {
        el.style().set_property("height", &format!("{height}px")).unwrap();
        fire(&window, "resize");
    }
    assert_eq!(list.snapshot().unwrap().viewport_height, 500.0);
    assert_eq!(list.visible_range(), VisibleRange::new(0, 13));

    sleep(200).await;
    assert_eq!(list.snapshot().unwrap().viewport_height, 800.0);
    assert_eq!(list.visible_range(), VisibleRange::new(0, 19));

    list.destroy();
    el.remove();
}

#[wasm_bindgen_test]
async fn destroy_cancels_pending_passes() {
    let el = container(500);
    let list = DomWindowedList::new(
        el.clone(),
        RendererOptions::new(50.0, |item: &u32, _| row(&item.to_string())),
    )
    .unwrap();
    list.replace_items((0..1000).collect::<Vec<u32>>());

    el.set_scroll_top(1000);
    fire(&el, "scroll");
    el.set_scroll_top(2000);
    fire(&el, "scroll");
    fire(&web_sys::window().unwrap(), "resize");
    list.destroy();
    assert_eq!(el.child_element_count(), 0);

    sleep(250).await;
    fire(&el, "scroll");
    fire(&web_sys::window().unwrap(), "resize");
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}
