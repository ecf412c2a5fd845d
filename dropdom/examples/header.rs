use std::fs::File;
use std::time::Instant;

use dropdom::{
    find_element, find_element_mut, layout_header, lighten, DropdownState, Element, Event,
    FocusState, InputMode, Key, Markers, Rgb, Style, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const HEADER_BG: Rgb = Rgb::new(32, 36, 48);

fn main() -> Result<(), dropdom::terminal::Error> {
    // Set up file logging
    let log_file = File::create("header.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut root = ui();
    let mut dropdowns = DropdownState::attach(&root, Markers::default(), InputMode::Pointer);
    let mut focus = FocusState::new();

    loop {
        let (width, _) = term.size()?;
        let layout = layout_header(&root, width);
        term.draw(&root, &layout)?;

        // Wake in time for the earliest deferred close, otherwise park on input
        let timeout = dropdowns
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));
        let raw = term.poll(timeout)?;

        let events = focus.process_events(&raw, &root, &layout);
        let now = Instant::now();

        for event in &events {
            if let Event::Key {
                key: Key::Char('q'),
                ..
            } = event
            {
                return Ok(());
            }

            dropdowns.handle_event(&mut root, &layout, event, now);

            // The link's own action: just log where we would navigate
            if let Event::Click {
                target: Some(target),
                ..
            } = event
            {
                if let Some(href) = find_element(&root, target).and_then(|el| el.get_data("href"))
                {
                    log::info!("navigate to {href}");
                }
            }
        }

        dropdowns.tick(&mut root, Instant::now());
        restyle(&mut root, &dropdowns);
    }
}

/// Presentation-layer reaction to the open marker: highlight the toggle of
/// whichever widget is open.
fn restyle(root: &mut Element, dropdowns: &DropdownState) {
    for widget in dropdowns.widgets() {
        let Some(toggle_id) = widget.toggle.as_deref() else {
            continue;
        };
        if let Some(el) = find_element_mut(root, toggle_id) {
            el.style.background = widget.is_open().then(|| lighten(HEADER_BG, 0.1));
        }
    }
}

fn ui() -> Element {
    Element::row()
        .id("header")
        .style(Style::new().background(HEADER_BG))
        .child(
            Element::text("Shopfront")
                .id("brand")
                .style(Style::new().bold().foreground(Rgb::new(240, 200, 90))),
        )
        .child(Element::link("Search", "/search").id("search"))
        .child(dropdown(
            "account",
            "Account ▾",
            &[
                ("Profile", "/account"),
                ("Orders", "/orders"),
                ("Sign out", "/logout"),
            ],
        ))
        .child(dropdown(
            "cart",
            "Cart (2) ▾",
            &[("View cart", "/cart"), ("Checkout", "/checkout")],
        ))
}

fn dropdown(name: &str, label: &str, links: &[(&str, &str)]) -> Element {
    Element::box_()
        .id(name)
        .class("header-action")
        .class("dropdown")
        .child(
            Element::text(label)
                .id(format!("{name}-toggle"))
                .class("dropdown-toggle")
                .clickable(true)
                .focusable(true)
                .attr("aria-expanded", "false")
                .attr("aria-haspopup", "true")
                .style(Style::new().foreground(Rgb::new(235, 235, 240))),
        )
        .child(
            Element::box_()
                .id(format!("{name}-menu"))
                .class("dropdown-menu")
                .floating(true)
                .style(Style::new().background(Rgb::new(44, 48, 64)))
                .children(
                    links
                        .iter()
                        .map(|(label, href)| Element::link(*label, *href).class("menu-link")),
                ),
        )
}
