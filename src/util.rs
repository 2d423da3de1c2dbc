// DOM measurement helpers shared by the map components.
use crate::state::Size;
use web_sys::Element;
use yew::NodeRef;

/// Rendered size of the element behind `node`, or zero if it is not mounted yet.
pub fn measure(node: &NodeRef) -> Size {
    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            Size::new(rect.width(), rect.height())
        })
        .unwrap_or_default()
}

pub fn goal_count(done: usize, total: usize) -> String {
    format!("{done}/{total} goals")
}
