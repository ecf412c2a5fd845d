//! Dropdown menus over an element tree.
//!
//! A [`DropdownState`] discovers dropdown widgets in a document by their
//! marker classes, keeps at most one of them open at a time, and mirrors
//! every open/close transition into the document: the open marker class on
//! the container, `aria-expanded` on the toggle, and the visible override
//! set on the panel. All state changes go through the controller; nothing
//! else touches a widget's open flag.

mod controller;
mod events;
mod markers;
mod state;

use std::time::Duration;

pub use controller::DropdownState;
pub use markers::Markers;
pub use state::Widget;

/// Attribute mirrored onto the toggle control.
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Delay between a menu-link click and the panel collapsing, so the link's
/// own action is not interrupted by the visual close.
pub const MENU_LINK_CLOSE_DELAY: Duration = Duration::from_millis(50);
