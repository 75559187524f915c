use gloo_timers::callback::Timeout;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

fn smooth_scroll(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Fire-and-forget: after `delay_ms`, smoothly bring `target` to the top of the viewport.
/// Does nothing if the node is no longer mounted by then.
pub fn scroll_into_view_after(target: NodeRef, delay_ms: u32) {
    let timeout = Timeout::new(delay_ms, move || match target.cast::<Element>() {
        Some(element) => smooth_scroll(&element, ScrollLogicalPosition::Start),
        None => log::debug!("scroll target unmounted before timer fired"),
    });
    timeout.forget();
}

pub fn scroll_to_anchor(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => smooth_scroll(&element, ScrollLogicalPosition::Start),
        None => log::warn!("anchor #{} not found", id),
    }
}
