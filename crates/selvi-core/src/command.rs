//! Command-line mode — the `:` prompt.
//!
//! In command mode keystrokes go to a [`CommandLine`] accumulator instead of
//! the buffer. On Enter the accumulated text is trimmed, parsed into a
//! [`Command`], and executed by the editor.
//!
//! # Supported commands
//!
//! | Command | Action                                    | Quits?                 |
//! |---------|-------------------------------------------|------------------------|
//! | `:w`    | Save to the current file path             | no                     |
//! | `:q`    | Quit                                      | only if not dirty      |
//! | `:q!`   | Force quit (discard changes)              | yes                    |
//! | `:wq`   | Save, then quit whatever the save outcome | yes                    |
//!
//! Anything else parses to [`Command::Unknown`] and is ignored.

use std::fmt;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed command-line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:w` — save to the current path.
    Write,

    /// `:q` — quit unless the buffer is dirty.
    Quit,

    /// `:q!` — quit unconditionally.
    ForceQuit,

    /// `:wq` — save and quit.
    WriteQuit,

    /// Anything unrecognized, trimmed.
    Unknown(String),
}

impl Command {
    /// Parse command text. Surrounding whitespace is ignored; matching is
    /// exact and case-sensitive.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "w" => Self::Write,
            "q" => Self::Quit,
            "q!" => Self::ForceQuit,
            "wq" => Self::WriteQuit,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("w"),
            Self::Quit => f.write_str("q"),
            Self::ForceQuit => f.write_str("q!"),
            Self::WriteQuit => f.write_str("wq"),
            Self::Unknown(text) => f.write_str(text),
        }
    }
}

// ---------------------------------------------------------------------------
// CommandLine
// ---------------------------------------------------------------------------

/// The command-line input accumulator.
///
/// Text is only ever appended to or removed from the end. The leading `:`
/// is not stored — it's the renderer's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    input: String,
}

impl CommandLine {
    /// An empty command line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    /// The accumulated text.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True if nothing has been typed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Append a character.
    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last character. Returns `false` if there was nothing to
    /// remove.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Empty the accumulator.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Parse the accumulated text and empty the accumulator.
    pub fn take(&mut self) -> Command {
        let command = Command::parse(&self.input);
        self.input.clear();
        command
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
