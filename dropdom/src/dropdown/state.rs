//! Widget discovery.

use crate::element::{collect_by_class, find_descendant_by_class, find_element, Element};

use super::Markers;

/// One discovered dropdown widget: a container grouping a toggle control and
/// a menu panel. Either sub-element may be absent; operations on a widget
/// skip the missing part silently.
#[derive(Debug, Clone)]
pub struct Widget {
    pub container: String,
    pub toggle: Option<String>,
    pub panel: Option<String>,
    pub(crate) is_open: bool,
}

impl Widget {
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Scan the document once for dropdown containers, in document order. The
/// resulting set is fixed for the controller's lifetime.
pub(crate) fn scan(root: &Element, markers: &Markers) -> Vec<Widget> {
    collect_by_class(root, &markers.container)
        .into_iter()
        .filter_map(|container_id| {
            let container = find_element(root, &container_id)?;
            let toggle = find_descendant_by_class(container, &markers.toggle).map(|el| el.id.clone());
            let panel = find_descendant_by_class(container, &markers.panel).map(|el| el.id.clone());

            if toggle.is_none() {
                log::debug!("[dropdown] container {container_id} has no toggle");
            }
            if panel.is_none() {
                log::debug!("[dropdown] container {container_id} has no panel");
            }

            Some(Widget {
                container: container_id,
                toggle,
                panel,
                is_open: false,
            })
        })
        .collect()
}
