use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::event::{Event, convert};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode crossterm backend. Enters the alternate screen with mouse
/// capture on creation and restores the terminal on drop; frames are
/// flushed as a diff against the previously presented buffer.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Wait up to `timeout` for input, draining anything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(duration) => event::poll(duration)?,
            None => {
                if let Some(converted) = convert(&event::read()?) {
                    events.push(converted);
                }
                return Ok(events);
            }
        };

        if has_event {
            if let Some(converted) = convert(&event::read()?) {
                events.push(converted);
            }
            while event::poll(Duration::ZERO)? {
                if let Some(converted) = convert(&event::read()?) {
                    events.push(converted);
                }
            }
        }

        Ok(events)
    }

    /// Flush a frame, writing only the cells that changed since the last
    /// presented frame.
    pub fn present(&mut self, frame: &Buffer) -> Result<()> {
        if frame.width() != self.previous.width() || frame.height() != self.previous.height() {
            debug!(
                "terminal resized to {}x{}, full repaint",
                frame.width(),
                frame.height()
            );
            self.previous = Buffer::new(frame.width(), frame.height());
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in frame.diff(&self.previous) {
            // The wide char already occupies this space.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style.bold != last_style.bold {
                if cell.style.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.dim != last_style.dim {
                if cell.style.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.italic != last_style.italic {
                if cell.style.italic {
                    execute!(self.stdout, SetAttribute(Attribute::Italic))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoItalic))?;
                }
            }
            if cell.style.underline != last_style.underline {
                if cell.style.underline {
                    execute!(self.stdout, SetAttribute(Attribute::Underlined))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
                }
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.previous = frame.clone();
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
