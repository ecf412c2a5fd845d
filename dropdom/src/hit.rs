use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, |el| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, |_| true)
}

/// Find the focusable element at the given coordinates.
pub fn hit_test_focusable(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, |el| el.focusable)
}

/// Elements without a layout rectangle (hidden panels and their contents)
/// never match, and prune their whole subtree.
fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element(layout, child, x, y, accepts) {
                return Some(id);
            }
        }
    }

    if accepts(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
