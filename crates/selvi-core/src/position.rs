//! Buffer coordinates.
//!
//! Lines and columns are 0-indexed; a column counts chars within its line.
//! Only the [`Display`](fmt::Display) impl shifts to 1-indexed, for status
//! lines.

use std::fmt;

/// A `(line, col)` coordinate.
///
/// Never validated on construction: it may point past a line's end or past
/// the last line. Buffer primitives and the editor clamp it where it's used.
///
/// The derived order compares `line` first, then `col`, which is the order
/// [`Selection::start`](crate::selection::Selection::start) relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// This line, column `col`.
    #[inline]
    #[must_use]
    pub const fn with_col(self, col: usize) -> Self {
        Self { col, ..self }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}
