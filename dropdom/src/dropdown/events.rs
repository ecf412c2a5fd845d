//! The event contract: which events move dropdown state, and how.

use std::time::Instant;

use crate::element::{find_element, is_within, path_to, Element};
use crate::event::{Event, Key};
use crate::layout::LayoutResult;

use super::controller::DropdownState;
use super::MENU_LINK_CLOSE_DELAY;

impl DropdownState {
    /// Feed one high-level event through the dropdown behavior. Returns
    /// true when dropdown state changed (or is about to, for deferred
    /// closes), so the host knows to re-present.
    ///
    /// `now` anchors deferred work; the host clock never gets read here.
    pub fn handle_event(
        &mut self,
        root: &mut Element,
        layout: &LayoutResult,
        event: &Event,
        now: Instant,
    ) -> bool {
        match event {
            Event::Click { target, x, y, .. } => {
                self.handle_click(root, layout, target.as_deref(), *x, *y, now)
            }

            // Escape closes everything, regardless of focus location
            Event::Key {
                key: Key::Escape, ..
            } => {
                let had_open = self.open_widget().is_some();
                self.close_all(root);
                had_open
            }

            // Focus landing outside every widget closes everything, but
            // only when something is actually open
            Event::Focus { target } => {
                if self.open_widget().is_some() && !self.focus_within_widget(root, target) {
                    self.close_all(root);
                    true
                } else {
                    false
                }
            }

            Event::MouseMove { x, y } => self.handle_hover(root, layout, *x, *y),

            _ => false,
        }
    }

    /// Apply deferred closes whose deadline has passed. The close applies
    /// to whatever state exists at fire time, including a widget that was
    /// reopened in the meantime.
    pub fn tick(&mut self, root: &mut Element, now: Instant) -> bool {
        let due = self.schedule.drain_due(now);
        let mut changed = false;
        for idx in due {
            log::debug!("[dropdown] deferred close fires for widget {idx}");
            changed |= self.is_open(idx);
            self.set_open(root, idx, false);
        }
        changed
    }

    fn handle_click(
        &mut self,
        root: &mut Element,
        layout: &LayoutResult,
        target: Option<&str>,
        x: u16,
        y: u16,
        now: Instant,
    ) -> bool {
        if let Some(target) = target {
            // A toggle click consumes the event outright: no link
            // navigation, and the outside-click path below never sees it
            if let Some(idx) = self.toggle_widget(root, target) {
                self.toggle(root, idx);
                return true;
            }

            // A link inside an open panel collapses the widget after a
            // short delay so the link's own action lands first
            if let Some(idx) = self.link_widget(root, target) {
                log::debug!("[dropdown] menu link clicked, deferring close of widget {idx}");
                self.schedule.defer(idx, MENU_LINK_CLOSE_DELAY, now);
                return true;
            }
        }

        // Anywhere outside every widget closes them all
        if self.widget_at(layout, x, y).is_none() {
            let had_open = self.open_widget().is_some();
            self.close_all(root);
            return had_open;
        }

        false
    }

    fn handle_hover(&mut self, root: &mut Element, layout: &LayoutResult, x: u16, y: u16) -> bool {
        // Touch hosts get no hover behavior at all; a scroll gesture must
        // not open menus
        if !self.input_mode().is_pointer() {
            return false;
        }

        let over = self.widget_at(layout, x, y);
        if over == self.hovered {
            return false;
        }

        if let Some(old) = self.hovered.take() {
            self.set_open(root, old, false);
        }
        if let Some(new) = over {
            self.set_open(root, new, true);
        }
        self.hovered = over;
        true
    }

    /// Which widget's toggle control (or a descendant of it) is `target`?
    fn toggle_widget(&self, root: &Element, target: &str) -> Option<usize> {
        self.widgets().iter().position(|widget| {
            widget
                .toggle
                .as_deref()
                .map(|toggle| is_within(root, toggle, target))
                .unwrap_or(false)
        })
    }

    /// Which open widget's panel holds `target`, with a link-like element
    /// (an href carrier) on the path from the panel down to it?
    fn link_widget(&self, root: &Element, target: &str) -> Option<usize> {
        self.widgets().iter().position(|widget| {
            if !widget.is_open() {
                return false;
            }
            let Some(panel_id) = widget.panel.as_deref() else {
                return false;
            };
            let Some(panel) = find_element(root, panel_id) else {
                return false;
            };
            path_to(panel, target)
                .map(|path| path.iter().any(|el| el.get_data("href").is_some()))
                .unwrap_or(false)
        })
    }

    /// Which widget's bounding region contains the point, if any.
    fn widget_at(&self, layout: &LayoutResult, x: u16, y: u16) -> Option<usize> {
        self.widgets().iter().position(|widget| {
            layout
                .get(&widget.container)
                .map(|rect| rect.contains(x, y))
                .unwrap_or(false)
        })
    }

    fn focus_within_widget(&self, root: &Element, target: &str) -> bool {
        self.widgets()
            .iter()
            .any(|widget| is_within(root, &widget.container, target))
    }
}
