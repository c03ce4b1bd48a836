// Console rendering.
// Clears the terminal and prints the banner, the colored topic and the verse text.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};

use crate::cache::CachedVerse;
use crate::esv::passage::{Span, spans};

/// Reminder printed above every verse.
pub const BANNER: &str = "Rejoice always, pray without ceasing, give thanks!";

/// Where the verse on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Requested from the ESV API this cycle.
    Fetched,
    /// Read from the local cache.
    Cached,
}

/// Colors used on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub banner: Color,
    pub fetched: Color,
    pub cached: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            banner: Color::Green,
            fetched: Color::Red,
            cached: Color::Blue,
            highlight: Color::Green,
            error: Color::Red,
        }
    }
}

impl Palette {
    /// Topic color for a verse of the given provenance.
    pub fn topic(&self, provenance: Provenance) -> Color {
        match provenance {
            Provenance::Fetched => self.fetched,
            Provenance::Cached => self.cached,
        }
    }
}

/// Terminal writer for the verse display and countdown.
pub struct Screen<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    /// Clear the screen and show a verse.
    pub fn show_verse(&mut self, verse: &CachedVerse, provenance: Provenance) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out)?;
        queue!(self.out, PrintStyledContent(BANNER.with(self.palette.banner)))?;
        writeln!(self.out)?;
        writeln!(self.out)?;
        queue!(
            self.out,
            PrintStyledContent(verse.topic.as_str().with(self.palette.topic(provenance)))
        )?;
        writeln!(self.out)?;

        for span in spans(&verse.text) {
            match span {
                Span::Plain(text) => queue!(self.out, Print(text))?,
                Span::Highlight(text) => {
                    queue!(self.out, PrintStyledContent(text.with(self.palette.highlight)))?
                }
            }
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Start the countdown line.
    pub fn countdown_start(&mut self) -> io::Result<()> {
        write!(self.out, "Waiting: ")?;
        self.out.flush()
    }

    /// Print the minutes remaining.
    pub fn countdown_tick(&mut self, remaining: u32) -> io::Result<()> {
        write!(self.out, "{} ", remaining)?;
        self.out.flush()
    }

    pub fn countdown_end(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Report a failed cycle.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        queue!(self.out, PrintStyledContent(message.with(self.palette.error)))?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print a non-fatal problem below the verse.
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        queue!(
            self.out,
            PrintStyledContent(format!("Warning: {}", message).with(self.palette.error))
        )?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print a plain one-line notice on its own line.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
