//! Open/close state and its reflection into the document.

use std::time::Instant;

use crate::element::{find_element_mut, Element};
use crate::event::InputMode;
use crate::schedule::Schedule;
use crate::style::Overrides;

use super::state::{scan, Widget};
use super::{Markers, ARIA_EXPANDED};

/// Controller for every dropdown widget in a document.
///
/// Built once against a document root; the widget set does not re-scan.
/// Holds the open/close state for each widget and enforces mutual
/// exclusion: opening one widget closes the others first. Event bindings
/// and the deferred-close schedule live on the instance and are dropped
/// with it.
#[derive(Debug)]
pub struct DropdownState {
    markers: Markers,
    input_mode: InputMode,
    widgets: Vec<Widget>,
    pub(super) schedule: Schedule,
    pub(super) hovered: Option<usize>,
}

impl DropdownState {
    /// Scan `root` for dropdown widgets and take ownership of their state.
    pub fn attach(root: &Element, markers: Markers, input_mode: InputMode) -> Self {
        let widgets = scan(root, &markers);
        log::debug!(
            "[dropdown] attached {} widget(s), input mode {input_mode:?}",
            widgets.len()
        );
        Self {
            markers,
            input_mode,
            widgets,
            schedule: Schedule::new(),
            hovered: None,
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Whether the widget at `idx` is currently open.
    pub fn is_open(&self, idx: usize) -> bool {
        self.widgets.get(idx).map(Widget::is_open).unwrap_or(false)
    }

    /// The index of the open widget, if any. At most one can be open.
    pub fn open_widget(&self) -> Option<usize> {
        self.widgets.iter().position(Widget::is_open)
    }

    /// Earliest pending deferred-close deadline, for poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    /// Close every widget: drop the open marker, reset `aria-expanded`, and
    /// clear the panels' inline overrides so default (hidden) styling
    /// applies. Safe on an empty set, idempotent on a closed one.
    pub fn close_all(&mut self, root: &mut Element) {
        for idx in 0..self.widgets.len() {
            self.apply_closed(root, idx);
        }
    }

    /// Set one widget's open state. Opening closes all others first.
    /// Out-of-range indices and missing sub-elements are ignored.
    pub fn set_open(&mut self, root: &mut Element, idx: usize, desired: bool) {
        if idx >= self.widgets.len() {
            return;
        }

        if desired {
            self.close_all(root);
            self.apply_open(root, idx);
        } else {
            self.apply_closed(root, idx);
        }
    }

    /// Flip one widget's open state.
    pub fn toggle(&mut self, root: &mut Element, idx: usize) {
        let desired = !self.is_open(idx);
        self.set_open(root, idx, desired);
    }

    fn apply_open(&mut self, root: &mut Element, idx: usize) {
        let (container, toggle, panel) = self.widget_ids(idx);

        self.widgets[idx].is_open = true;
        log::debug!("[dropdown] open {container}");

        if let Some(el) = find_element_mut(root, &container) {
            el.add_class(&self.markers.open);
        }
        if let Some(id) = toggle {
            if let Some(el) = find_element_mut(root, &id) {
                el.set_attr(ARIA_EXPANDED, "true");
            }
        }
        if let Some(id) = panel {
            if let Some(el) = find_element_mut(root, &id) {
                el.overrides = Overrides::visible();
            }
        }
    }

    fn apply_closed(&mut self, root: &mut Element, idx: usize) {
        let (container, toggle, panel) = self.widget_ids(idx);

        if self.widgets[idx].is_open {
            log::debug!("[dropdown] close {container}");
        }
        self.widgets[idx].is_open = false;

        if let Some(el) = find_element_mut(root, &container) {
            el.remove_class(&self.markers.open);
        }
        if let Some(id) = toggle {
            if let Some(el) = find_element_mut(root, &id) {
                el.set_attr(ARIA_EXPANDED, "false");
            }
        }
        if let Some(id) = panel {
            if let Some(el) = find_element_mut(root, &id) {
                el.overrides.clear();
            }
        }
    }

    fn widget_ids(&self, idx: usize) -> (String, Option<String>, Option<String>) {
        let widget = &self.widgets[idx];
        (
            widget.container.clone(),
            widget.toggle.clone(),
            widget.panel.clone(),
        )
    }
}
