//! Text buffer — the fundamental unit of text storage.
//!
//! A `Buffer` is an ordered list of lines plus the file it came from and a
//! dirty flag. It offers the handful of mutation primitives the editor needs
//! (insert a char, split a line, backspace, delete a selection) and whole-file
//! load and save.
//!
//! # Design choices
//!
//! - **A `Vec<String>` of lines.** Edits splice one line (or join two), which
//!   is cheap at the sizes a single-buffer editor handles. Line endings are
//!   not stored: lines are split on `\n` when loading and joined with `\n`
//!   when saving.
//!
//! - **Never empty.** There is always at least one line, even for a new or
//!   fully-deleted document. Every primitive preserves that.
//!
//! - **Never fails on coordinates.** Cursor and selection values can go stale
//!   relative to the text after an edit. Every primitive clamps an
//!   out-of-range column and treats an out-of-range line as a no-op, so a
//!   stale position degrades gracefully instead of panicking.
//!
//! - **Columns are char offsets** within a line (see [`position`](crate::position)),
//!   so an edit can never split a UTF-8 sequence.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_NO_NAME_LABEL;
use crate::error::{BufferError, Result};
use crate::position::Position;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// Line-oriented text storage with file metadata.
pub struct Buffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// A buffer holding one empty line, with no file path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            path: None,
            dirty: false,
        }
    }

    /// A buffer holding `text`, split into lines the same way a file load
    /// splits them. Not dirty, no file path.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            path: None,
            dirty: false,
        }
    }

    // -- File I/O -----------------------------------------------------------

    /// Replace the buffer's contents with the file at `path`.
    ///
    /// `\r\n` is normalized to `\n` and the text is split on `\n`; an empty
    /// file yields a single empty line. If the file does not exist the buffer
    /// resets to a single empty line and remembers `path`, so a later save
    /// creates it. Either way the buffer is clean afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Read`] for any failure other than "not found".
    /// The buffer, including its path, is left exactly as it was.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let lines = match fs::read_to_string(path) {
            Ok(text) => split_lines(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist, starting empty", path.display());
                vec![String::new()]
            }
            Err(source) => {
                return Err(BufferError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        log::debug!("loaded {} ({} lines)", path.display(), lines.len());
        self.lines = lines;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Write the buffer to its file, lines joined with `\n`.
    ///
    /// Does nothing and succeeds when no path is set. Clears the dirty flag
    /// only when the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Write`] if the write fails; the dirty flag is
    /// left unchanged.
    pub fn save_file(&mut self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let content = self.contents();
        fs::write(path, &content).map_err(|source| BufferError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("wrote {} ({} bytes)", path.display(), content.len());
        self.dirty = false;
        Ok(())
    }

    // -- Text access --------------------------------------------------------

    /// Number of lines. Always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The text of line `n`, or `""` if `n` is out of range.
    #[inline]
    #[must_use]
    pub fn line(&self, n: usize) -> &str {
        self.lines.get(n).map_or("", String::as_str)
    }

    /// Length of line `n` in chars, or 0 if `n` is out of range.
    #[inline]
    #[must_use]
    pub fn line_len(&self, n: usize) -> usize {
        self.line(n).chars().count()
    }

    /// All lines joined with `\n` — exactly what [`save_file`](Self::save_file)
    /// writes.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    // -- Editing ------------------------------------------------------------

    /// Insert `ch` at `pos` and return the position just after it.
    ///
    /// The column is clamped to the line length. An out-of-range line is a
    /// no-op that returns `pos` unchanged.
    pub fn insert_char(&mut self, pos: Position, ch: char) -> Position {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return pos;
        };

        let col = pos.col.min(line.chars().count());
        let at = byte_offset(line, col);
        line.insert(at, ch);
        self.dirty = true;
        Position::new(pos.line, col + 1)
    }

    /// Split the line at `pos` and return the start of the new second half.
    ///
    /// The column is clamped to the line length. An out-of-range line is a
    /// no-op that returns `pos` unchanged.
    pub fn insert_newline(&mut self, pos: Position) -> Position {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return pos;
        };

        let col = pos.col.min(line.chars().count());
        let at = byte_offset(line, col);
        let rest = line.split_off(at);
        self.lines.insert(pos.line + 1, rest);
        self.dirty = true;
        Position::new(pos.line + 1, 0)
    }

    /// Backspace at `pos`.
    ///
    /// - Inside a line: removes the character before `pos`.
    /// - At column 0 of a later line: joins the line onto the previous one
    ///   and returns the join point.
    /// - At the very start of the buffer, on a missing line, or with a
    ///   column past the line end: no-op, returns `pos`.
    pub fn delete_char(&mut self, pos: Position) -> Position {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return pos;
        };
        let len = line.chars().count();

        if pos.col > 0 && pos.col <= len {
            let at = byte_offset(line, pos.col - 1);
            line.remove(at);
            self.dirty = true;
            return Position::new(pos.line, pos.col - 1);
        }

        if pos.col == 0 && pos.line > 0 {
            let current = self.lines.remove(pos.line);
            let prev = &mut self.lines[pos.line - 1];
            let join_col = prev.chars().count();
            prev.push_str(&current);
            self.dirty = true;
            return Position::new(pos.line - 1, join_col);
        }

        pos
    }

    /// Remove the text covered by `sel` and return its start.
    ///
    /// The direction of the selection doesn't matter. Both endpoints are
    /// clamped into the buffer first; a selection that starts past the last
    /// line removes nothing. Across lines, the start line's prefix is joined
    /// with the end line's suffix and every line in between is dropped. The
    /// buffer only becomes dirty if something was actually removed.
    pub fn delete_selection(&mut self, sel: Selection) -> Position {
        let start = sel.start();
        let Some((from, to)) = self.clamp_range(start, sel.end()) else {
            return start;
        };
        if from == to {
            return start;
        }

        if from.line == to.line {
            let line = &mut self.lines[from.line];
            let range = byte_offset(line, from.col)..byte_offset(line, to.col);
            line.replace_range(range, "");
        } else {
            let tail = {
                let end_line = &self.lines[to.line];
                end_line[byte_offset(end_line, to.col)..].to_owned()
            };
            let head = &mut self.lines[from.line];
            head.truncate(byte_offset(head, from.col));
            head.push_str(&tail);
            self.lines.drain(from.line + 1..=to.line);
        }

        self.dirty = true;
        start
    }

    /// The text covered by `sel`, with line breaks between lines as `\n`.
    ///
    /// Columns past a line's end are clamped to it, so a selection sitting
    /// entirely beyond the text yields `""`. Lines past the end of the buffer
    /// contribute nothing.
    #[must_use]
    pub fn selected_text(&self, sel: Selection) -> String {
        let (start, end) = (sel.start(), sel.end());

        if start.line == end.line {
            let line = self.line(start.line);
            let from = byte_offset(line, start.col);
            let to = byte_offset(line, end.col);
            return line[from..to].to_owned();
        }

        let mut text = String::new();
        let last = end.line.min(self.lines.len().saturating_sub(1));
        for n in start.line..=last {
            let line = self.line(n);
            if n == start.line {
                text.push_str(&line[byte_offset(line, start.col)..]);
                text.push('\n');
            } else if n == end.line {
                text.push_str(&line[..byte_offset(line, end.col)]);
            } else {
                text.push_str(line);
                text.push('\n');
            }
        }
        text
    }

    // -- Metadata -----------------------------------------------------------

    /// True if the content differs from the last successful load or save.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The file path this buffer is associated with, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The file path for display, or `[No Name]` when there is none.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.display_name_or(DEFAULT_NO_NAME_LABEL)
    }

    /// The file path for display, or `placeholder` when there is none.
    #[must_use]
    pub fn display_name_or<'a>(&'a self, placeholder: &'a str) -> Cow<'a, str> {
        self.path
            .as_deref()
            .map_or(Cow::Borrowed(placeholder), Path::to_string_lossy)
    }

    // -- Helpers ------------------------------------------------------------

    /// Clamp `[start, end]` into the buffer. `None` if `start` is past the
    /// last line.
    fn clamp_range(&self, start: Position, end: Position) -> Option<(Position, Position)> {
        let last = self.lines.len().checked_sub(1)?;
        if start.line > last {
            return None;
        }

        let from = start.with_col(start.col.min(self.line_len(start.line)));
        let to = if end.line > last {
            Position::new(last, self.line_len(last))
        } else {
            end.with_col(end.col.min(self.line_len(end.line)))
        };

        Some((from, to.max(from)))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.lines.len())
            .field("dirty", &self.dirty)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split file text into lines: `\r\n` becomes `\n`, then split on `\n`.
/// A trailing newline produces a trailing empty line, so joining the result
/// with `\n` gives back the normalized text.
fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Byte offset of char column `col` in `line`, clamped to the line's end.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
