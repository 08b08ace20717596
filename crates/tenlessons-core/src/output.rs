//! Paced, color-coded terminal output.
//!
//! Text blocks are written one character at a time with a configurable
//! delay between characters, giving the terminal a typing effect. Styling
//! is plain ANSI SGR; no TUI framework. The delay is the sole pacing
//! parameter and a zero tick disables pacing entirely, which is how tests
//! run the full flow instantly.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Default per-character delay in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 15;

const WHITE: &str = "\x1b[37m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Visual role of an emitted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Prompts addressed to the user (white).
    Prompt,
    /// Lesson, goal, and summary content (green).
    Content,
    /// Comprehension questions (yellow).
    Question,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Prompt => WHITE,
            Style::Content => GREEN,
            Style::Question => YELLOW,
        }
    }
}

/// Writer that paces output character by character.
pub struct Emitter<W: Write> {
    writer: W,
    tick: Duration,
    color: bool,
}

impl Emitter<io::Stdout> {
    /// Emitter on stdout with the given tick and color switch.
    pub fn stdout(tick_ms: u64, color: bool) -> Self {
        Emitter::new(io::stdout(), tick_ms, color)
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W, tick_ms: u64, color: bool) -> Self {
        Self {
            writer,
            tick: Duration::from_millis(tick_ms),
            color,
        }
    }

    /// Write a styled block with per-character pacing.
    ///
    /// The color is always reset at the end of the block, whatever the
    /// content was.
    pub fn emit(&mut self, text: &str, style: Style) -> io::Result<()> {
        if self.color {
            write!(self.writer, "{}", style.sgr())?;
        }
        for ch in text.chars() {
            write!(self.writer, "{ch}")?;
            self.writer.flush()?;
            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
        }
        if self.color {
            write!(self.writer, "{RESET}")?;
        }
        self.writer.flush()
    }

    /// Write a plain status line without pacing or color.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }
}
