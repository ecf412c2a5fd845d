use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal,
};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::style::{self, Rgb};

const DEFAULT_BACKDROP: Rgb = Rgb::new(24, 24, 32);
const DEFAULT_FOREGROUND: Rgb = Rgb::new(220, 220, 220);

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

/// Raw-mode terminal with mouse capture, plus a minimal painter for an
/// element tree that already has layout rectangles. Restores the terminal
/// on drop.
pub struct Terminal {
    stdout: io::Stdout,
    backdrop: Rgb,
}

impl Terminal {
    pub fn new() -> Result<Self, Error> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            backdrop: DEFAULT_BACKDROP,
        })
    }

    pub fn size(&self) -> Result<(u16, u16), Error> {
        Ok(terminal::size()?)
    }

    /// Base color that translucent panels composite against.
    pub fn set_backdrop(&mut self, color: Rgb) {
        self.backdrop = color;
    }

    /// Wait up to `timeout` (or indefinitely with `None`) for terminal
    /// events, then drain everything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<CrosstermEvent>, Error> {
        let mut events = Vec::new();

        match timeout {
            Some(dur) => {
                if !event::poll(dur)? {
                    return Ok(events);
                }
                events.push(event::read()?);
            }
            None => {
                events.push(event::read()?);
            }
        }

        while event::poll(Duration::from_millis(0))? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    pub fn draw(&mut self, root: &Element, layout: &LayoutResult) -> Result<(), Error> {
        queue!(
            self.stdout,
            ResetColor,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let backdrop = self.backdrop;
        self.paint(root, layout, backdrop)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Elements without a rectangle (hidden panels) are skipped entirely.
    /// An element's opacity override composites its background toward the
    /// inherited one, which children then inherit.
    fn paint(&mut self, element: &Element, layout: &LayoutResult, inherited: Rgb) -> Result<(), Error> {
        let Some(rect) = layout.get(&element.id).copied() else {
            return Ok(());
        };

        let mut background = element.style.background.unwrap_or(inherited);
        if let Some(opacity) = element.overrides.opacity {
            background = style::mix(inherited, background, opacity);
        }

        if element.style.background.is_some() || element.overrides.opacity.is_some() {
            let blank = " ".repeat(rect.width as usize);
            for row in rect.top()..rect.bottom() {
                queue!(
                    self.stdout,
                    cursor::MoveTo(rect.x, row),
                    SetBackgroundColor(to_crossterm(background)),
                    Print(&blank)
                )?;
            }
        }

        match &element.content {
            Content::Text(text) => {
                let foreground = element.style.foreground.unwrap_or(DEFAULT_FOREGROUND);
                queue!(
                    self.stdout,
                    cursor::MoveTo(rect.x + 1, rect.y),
                    SetBackgroundColor(to_crossterm(background)),
                    SetForegroundColor(to_crossterm(foreground))
                )?;
                if element.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    self.stdout,
                    Print(fit_to_width(text, rect.width.saturating_sub(2))),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            Content::Children(children) => {
                for child in children {
                    self.paint(child, layout, background)?;
                }
            }
            Content::None => {}
        }

        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Truncate to at most `width` display columns.
fn fit_to_width(text: &str, width: u16) -> String {
    let mut remaining = width as usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if w > remaining {
            break;
        }
        remaining -= w;
        out.push(ch);
    }
    out
}
