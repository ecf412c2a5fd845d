use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};

pub type LayoutResult = HashMap<String, Rect>;

/// Height of the header strip in cells.
pub const HEADER_HEIGHT: u16 = 3;

const EDGE_PADDING: u16 = 1;
const GAP: u16 = 2;
const CELL_PADDING: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Get the center point of this rectangle.
    pub const fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// Lay out a header element: direct children flow left to right across a
/// strip of `HEADER_HEIGHT` cells, each sized from its label width. Floating
/// children (menu panels) are dropped below the strip, aligned to their
/// container's left edge and pulled back inside the viewport when they would
/// overflow on the right. A floating element is laid out only while its
/// visibility override is set; hidden panels (and everything inside them)
/// get no rectangle at all.
///
/// A container's rectangle covers its full-height slice of the strip, plus
/// its panel while the panel is visible, so point containment answers "is
/// this inside the widget" for both the trigger area and the open menu.
pub fn layout_header(root: &Element, width: u16) -> LayoutResult {
    let mut result = LayoutResult::new();
    result.insert(root.id.clone(), Rect::new(0, 0, width, HEADER_HEIGHT));

    let mut x = EDGE_PADDING;
    if let Content::Children(children) = &root.content {
        for child in children {
            let item_width = intrinsic_width(child);
            if item_width == 0 {
                continue;
            }
            let strip = Rect::new(x, 0, item_width, HEADER_HEIGHT);
            layout_item(child, strip, width, &mut result);
            x = x.saturating_add(item_width + GAP);
        }
    }

    result
}

fn layout_item(element: &Element, strip: Rect, total_width: u16, result: &mut LayoutResult) {
    match &element.content {
        Content::Children(children) => {
            let mut bounds = strip;
            let mut inner_x = strip.x;

            for child in children {
                if child.floating {
                    if let Some(panel_rect) = layout_panel(child, strip, total_width, result) {
                        bounds = bounds.union(panel_rect);
                    }
                } else {
                    let child_width = intrinsic_width(child);
                    if child_width == 0 {
                        continue;
                    }
                    result.insert(child.id.clone(), Rect::new(inner_x, 1, child_width, 1));
                    inner_x = inner_x.saturating_add(child_width);
                }
            }

            result.insert(element.id.clone(), bounds);
        }
        _ => {
            result.insert(element.id.clone(), Rect::new(strip.x, 1, strip.width, 1));
        }
    }
}

/// Lay out a visible floating panel under its container strip. Returns the
/// panel rectangle, or `None` when the panel stays hidden.
fn layout_panel(
    panel: &Element,
    strip: Rect,
    total_width: u16,
    result: &mut LayoutResult,
) -> Option<Rect> {
    if !panel.overrides.is_visible() {
        return None;
    }

    let panel_width = panel_width(panel);
    let x = strip.x.min(total_width.saturating_sub(panel_width));
    let offset = panel.overrides.translate_y.unwrap_or(0);
    let y = (i32::from(HEADER_HEIGHT) + i32::from(offset)).max(0) as u16;

    let rect = match &panel.content {
        Content::Children(items) => {
            let height = items.len().max(1) as u16;
            let rect = Rect::new(x, y, panel_width, height);
            for (row, item) in items.iter().enumerate() {
                result.insert(
                    item.id.clone(),
                    Rect::new(x, y.saturating_add(row as u16), panel_width, 1),
                );
            }
            rect
        }
        _ => Rect::new(x, y, panel_width, 1),
    };

    result.insert(panel.id.clone(), rect);
    Some(rect)
}

fn intrinsic_width(element: &Element) -> u16 {
    match &element.content {
        Content::Text(text) => text.width() as u16 + CELL_PADDING,
        Content::Children(children) => children
            .iter()
            .filter(|child| !child.floating)
            .map(intrinsic_width)
            .sum(),
        Content::None => 0,
    }
}

fn panel_width(panel: &Element) -> u16 {
    match &panel.content {
        Content::Children(items) => items.iter().map(intrinsic_width).max().unwrap_or(1).max(1),
        Content::Text(text) => text.width() as u16 + CELL_PADDING,
        Content::None => 1,
    }
}
