//! Modal editing states.
//!
//! The editor is always in exactly one [`Mode`]. Each mode changes how the
//! dispatcher interprets input and how far right the cursor may rest:
//!
//! | Mode    | Cursor limit        | Purpose                           |
//! |---------|---------------------|-----------------------------------|
//! | Normal  | `0..len-1`          | Navigation, commands              |
//! | Insert  | `0..len`            | Typing text                       |
//! | Visual  | `0..len`            | Extending the selection           |
//! | Command | `0..len`            | Typing an ex command on `:`       |
//!
//! Only Normal keeps the cursor ON a character. Every other mode lets it sit
//! one past the end so insertion and whole-line selections can reach the
//! end of a line.

use std::fmt;

/// The current editing mode.
///
/// This is a pure data type — it holds what mode we're in, not the logic
/// for handling keys. The transition rule (selection collapses on entering
/// anything but Visual) lives in [`Editor::set_mode`](crate::editor::Editor::set_mode).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default mode. Keys are commands, not text input.
    #[default]
    Normal,
    /// Text entry mode. Keys produce characters in the buffer.
    Insert,
    /// Selection mode. Movement extends the selection head.
    Visual,
    /// Command-line mode. Keys go to the `:` accumulator.
    Command,
}

impl Mode {
    /// Label for the status line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
            Self::Command => "COMMAND",
        }
    }

    /// True if the cursor may sit one past the last character of a line.
    #[inline]
    #[must_use]
    pub const fn cursor_past_end(self) -> bool {
        !matches!(self, Self::Normal)
    }

    /// True in Visual mode, where movement extends rather than collapses.
    #[inline]
    #[must_use]
    pub const fn is_visual(self) -> bool {
        matches!(self, Self::Visual)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
