//! The hidden command console.
//!
//! A simulated command line: a session accumulates rendered lines (command
//! echoes, responses, achievement notices) and carries an open/closed flag,
//! while the [`Interpreter`] maps a line of input to a canned response or a
//! control action. Nothing here touches the screen; the frontend renders
//! the session however it likes and is expected to keep the newest line in
//! view.

mod commands;

pub use commands::{CommandEffect, Interpreter};

use std::fmt;

/// Prompt marker prefixed to echoed commands.
pub const PROMPT: &str = "$ ";

/// What kind of line a session entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of user input
    Command,
    /// Interpreter response
    Response,
    /// Out-of-band notice (achievement unlocks)
    Notice,
}

/// One rendered line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl fmt::Display for TerminalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Command => write!(f, "{PROMPT}{}", self.text),
            LineKind::Response | LineKind::Notice => f.write_str(&self.text),
        }
    }
}

/// Accumulated console output plus the open/closed flag.
///
/// The flag toggles independently of the content: closing the console
/// keeps its lines for the next time it opens, only `clear` empties them.
#[derive(Debug, Default)]
pub struct TerminalSession {
    lines: Vec<TerminalLine>,
    open: bool,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// All accumulated lines, oldest first.
    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the open/closed flag, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Drop every accumulated line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append an echo of user input.
    pub fn push_command(&mut self, input: &str) {
        self.lines.push(TerminalLine {
            kind: LineKind::Command,
            text: input.to_string(),
        });
    }

    /// Append a response line.
    pub fn push_response(&mut self, text: String) {
        self.lines.push(TerminalLine {
            kind: LineKind::Response,
            text,
        });
    }

    /// Append an out-of-band notice line.
    pub fn push_notice(&mut self, text: String) {
        self.lines.push(TerminalLine {
            kind: LineKind::Notice,
            text,
        });
    }
}
