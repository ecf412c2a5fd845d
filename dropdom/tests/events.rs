use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton, MouseEvent,
    MouseEventKind,
};
use dropdom::{
    collect_focusable, find_element, hit_test, hit_test_any, hit_test_focusable, is_within,
    path_to, Element, Event, FocusState, Key, LayoutResult, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Click inside btn
    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));

    // Click inside root but outside btn
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));

    // Click outside everything
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    // Click in overlapping region - top should win
    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));

    // Click only in bottom (before overlap)
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    // Click on non-clickable element returns None
    assert_eq!(hit_test(&layout, &root, 15, 11), None);

    // hit_test_any returns it anyway
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_skips_subtrees_without_layout() {
    // A hidden panel has no rectangle; nothing inside it can be hit even
    // if a stale rectangle exists for the child
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("panel")
            .child(Element::link("Profile", "/account").id("item")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("item", Rect::new(10, 10, 10, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 12, 10), None);
}

#[test]
fn test_hit_test_focusable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Focusable").id("input").focusable(true))
        .child(Element::text("Plain").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("input", Rect::new(10, 10, 30, 3)),
        ("text", Rect::new(10, 20, 30, 3)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 15, 11),
        Some("input".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 15, 21), None);
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_path_to_and_is_within() {
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("widget")
            .child(Element::box_().id("menu").child(Element::link("A", "/a").id("a"))),
    );

    let path = path_to(&root, "a").unwrap();
    let ids: Vec<&str> = path.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, ["root", "widget", "menu", "a"]);

    assert!(is_within(&root, "widget", "a"));
    assert!(is_within(&root, "widget", "widget"));
    assert!(!is_within(&root, "menu", "widget"));
    assert!(!is_within(&root, "missing", "a"));

    assert!(path_to(&root, "missing").is_none());
}

#[test]
fn test_class_mutation_is_idempotent() {
    let mut root = Element::box_().id("root").class("dropdown");

    root.add_class("open");
    root.add_class("open");
    assert_eq!(root.classes, ["dropdown", "open"]);

    root.remove_class("open");
    root.remove_class("open");
    assert_eq!(root.classes, ["dropdown"]);

    assert!(find_element(&root, "root").is_some());
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    let root = Element::box_()
        .id("root")
        .child(Element::link("One", "/1").id("one"))
        .child(Element::box_().child(Element::link("Two", "/2").id("two")))
        .child(Element::text("plain"));

    assert_eq!(collect_focusable(&root), ["one", "two"]);
}

#[test]
fn test_focus_next_wraps_around() {
    let root = Element::box_()
        .id("root")
        .child(Element::link("One", "/1").id("one"))
        .child(Element::link("Two", "/2").id("two"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
    assert_eq!(focus.focus_next(&root), Some("two".to_string()));
    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
    assert_eq!(focus.focused(), Some("one"));
}

#[test]
fn test_focus_prev_starts_from_the_end() {
    let root = Element::box_()
        .id("root")
        .child(Element::link("One", "/1").id("one"))
        .child(Element::link("Two", "/2").id("two"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_prev(&root), Some("two".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("one".to_string()));

    assert!(focus.blur());
    assert!(!focus.blur());
}

// ============================================================================
// Raw event translation
// ============================================================================

#[test]
fn test_tab_emits_blur_focus_pairs() {
    let root = Element::box_()
        .id("root")
        .child(Element::link("One", "/1").id("one"))
        .child(Element::link("Two", "/2").id("two"));
    let layout = create_layout(&[("root", Rect::new(0, 0, 80, 3))]);
    let mut focus = FocusState::new();

    let raw = [CtEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))];
    let events = focus.process_events(&raw, &root, &layout);
    assert_eq!(
        events,
        [Event::Focus {
            target: "one".to_string()
        }]
    );

    let events = focus.process_events(&raw, &root, &layout);
    assert_eq!(
        events,
        [
            Event::Blur {
                target: "one".to_string()
            },
            Event::Focus {
                target: "two".to_string()
            }
        ]
    );
}

#[test]
fn test_escape_passes_through_as_key_event() {
    let root = Element::box_().id("root");
    let layout = create_layout(&[("root", Rect::new(0, 0, 80, 3))]);
    let mut focus = FocusState::new();

    let raw = [CtEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::Key {
            key: Key::Escape,
            ..
        }
    ));
}

#[test]
fn test_click_focuses_then_delivers_click() {
    let root = Element::box_()
        .id("root")
        .child(Element::link("One", "/1").id("one"));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 80, 3)),
        ("one", Rect::new(10, 1, 5, 1)),
    ]);
    let mut focus = FocusState::new();

    let raw = [CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: 12,
        row: 1,
        modifiers: KeyModifiers::NONE,
    })];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        [
            Event::Focus {
                target: "one".to_string()
            },
            Event::Click {
                target: Some("one".to_string()),
                x: 12,
                y: 1,
                button: MouseButton::Left,
            }
        ]
    );
    assert_eq!(focus.focused(), Some("one"));
}

#[test]
fn test_mouse_motion_passes_through() {
    let root = Element::box_().id("root");
    let layout = create_layout(&[("root", Rect::new(0, 0, 80, 3))]);
    let mut focus = FocusState::new();

    let raw = [CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 4,
        row: 2,
        modifiers: KeyModifiers::NONE,
    })];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(events, [Event::MouseMove { x: 4, y: 2 }]);
}
