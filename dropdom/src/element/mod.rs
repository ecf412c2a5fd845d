mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of all elements carrying `class`, in document order.
pub fn collect_by_class(root: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_by_class_recursive(root, class, &mut result);
    result
}

fn collect_by_class_recursive(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_class_recursive(child, class, result);
        }
    }
}

/// Find the first descendant of `element` carrying `class`, excluding
/// `element` itself. Document order.
pub fn find_descendant_by_class<'a>(element: &'a Element, class: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &element.content {
        for child in children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = find_descendant_by_class(child, class) {
                return Some(found);
            }
        }
    }
    None
}

/// The chain of elements from `root` down to the element with `id`,
/// inclusive on both ends. `None` if `id` is not in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut path) = path_to(child, id) {
                path.insert(0, root);
                return Some(path);
            }
        }
    }

    None
}

/// Whether the element with `id` sits inside the subtree rooted at
/// `ancestor_id` (an element is within itself).
pub fn is_within(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id)
        .map(|ancestor| find_element(ancestor, id).is_some())
        .unwrap_or(false)
}
