//! Anchor/head selections.
//!
//! A [`Selection`] is two positions: the **anchor**, fixed where the selection
//! began, and the **head**, which follows the cursor while the selection is
//! being extended. Moving the head past the anchor flips the direction of the
//! selection; [`start`](Selection::start) and [`end`](Selection::end) always
//! return the document-ordered endpoints, so buffer operations never care
//! which way the user dragged.
//!
//! Selections are plain `Copy` values. Extending or collapsing returns a new
//! selection instead of mutating in place; a caller holding an older value
//! keeps seeing exactly what it captured.

use std::fmt;

use crate::position::Position;

/// A selection between an anchor and a head.
///
/// Empty when `anchor == head` — that is the degenerate "just a cursor" case
/// the editor keeps outside visual mode.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    /// A selection from `anchor` to `head`.
    #[inline]
    #[must_use]
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection at `pos`.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// True when anchor and head coincide.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.anchor == self.head
    }

    /// The earlier endpoint in document order.
    #[inline]
    #[must_use]
    pub fn start(self) -> Position {
        self.anchor.min(self.head)
    }

    /// The later endpoint in document order.
    #[inline]
    #[must_use]
    pub fn end(self) -> Position {
        self.anchor.max(self.head)
    }

    /// True when `pos` lies within `[start, end]`. Both endpoints count.
    #[inline]
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        self.start() <= pos && pos <= self.end()
    }

    /// Move the head to `pos`, keeping the anchor.
    ///
    /// This is the only way a selection grows or shrinks: the anchor stays
    /// where visual mode began, so moving the head back towards it shrinks
    /// the selection and moving past it flips direction.
    #[inline]
    #[must_use]
    pub const fn extend_to(self, pos: Position) -> Self {
        Self {
            anchor: self.anchor,
            head: pos,
        }
    }

    /// Drop the anchor onto the head, leaving an empty selection at the head.
    #[inline]
    #[must_use]
    pub const fn collapse(self) -> Self {
        Self::point(self.head)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sel({}:{} -> {}:{})",
            self.anchor.line, self.anchor.col, self.head.line, self.head.col
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
