//! Hidden key-sequence matcher.
//!
//! Keeps the most recent input codes in a bounded FIFO and compares them
//! against the fixed target sequence on every push. The matcher refires on
//! every completed match so the trigger can toggle its target repeatedly.

use std::collections::VecDeque;

/// A normalized input code.
///
/// Every key press maps to one of these; keys outside the target sequence
/// map to [`InputCode::Other`], which matches nothing and therefore breaks
/// an in-progress sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCode {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// The target sequence: ↑ ↑ ↓ ↓ ← → ← → B A.
pub const KONAMI_CODE: [InputCode; 10] = [
    InputCode::Up,
    InputCode::Up,
    InputCode::Down,
    InputCode::Down,
    InputCode::Left,
    InputCode::Right,
    InputCode::Left,
    InputCode::Right,
    InputCode::Char('b'),
    InputCode::Char('a'),
];

/// Bounded FIFO over the most recent input codes.
#[derive(Debug, Default)]
pub struct KonamiBuffer {
    recent: VecDeque<InputCode>,
}

impl KonamiBuffer {
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(KONAMI_CODE.len()),
        }
    }

    /// Record an input code, evicting the oldest past capacity.
    ///
    /// Returns `true` when the buffer now holds exactly the target
    /// sequence.
    pub fn push(&mut self, code: InputCode) -> bool {
        self.recent.push_back(code);
        if self.recent.len() > KONAMI_CODE.len() {
            self.recent.pop_front();
        }
        self.recent.len() == KONAMI_CODE.len()
            && self.recent.iter().zip(KONAMI_CODE.iter()).all(|(a, b)| a == b)
    }

    /// Number of codes currently buffered.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
