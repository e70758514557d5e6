//! The editor — one buffer, one cursor, one selection, one mode.
//!
//! [`Editor`] is the state machine the input dispatcher drives and the
//! renderer reads. It owns:
//!
//! - the [`Buffer`] being edited,
//! - the cursor [`Position`],
//! - the current [`Selection`],
//! - the [`Mode`],
//! - the `:` [`CommandLine`] accumulator,
//! - a single-slot clipboard.
//!
//! # Invariants
//!
//! After every movement, mode change, selection, or deletion:
//!
//! - `cursor.line < buffer.line_count()`;
//! - `cursor.col <= line_len - 1` in Normal mode (0 on an empty line) and
//!   `cursor.col <= line_len` in every other mode;
//! - outside Visual mode the selection is an empty point on the cursor.
//!   In Visual mode movement moves only the head; the anchor stays put.
//!
//! Typing and pasting are thin wrappers over the buffer: they leave the
//! cursor just past the inserted text, which in Normal mode can be one past
//! the end until the next movement.
//!
//! Commands never fail on coordinates. The only fallible calls are file
//! load and save, which return [`BufferError`](crate::error::BufferError).

use std::borrow::Cow;
use std::path::Path;

use crate::buffer::Buffer;
use crate::command::{Command, CommandLine};
use crate::config::Config;
use crate::error::Result;
use crate::mode::Mode;
use crate::position::Position;
use crate::selection::Selection;
use crate::word;

/// Selection-first modal editor state.
#[derive(Debug)]
pub struct Editor {
    buffer: Buffer,
    cursor: Position,
    selection: Selection,
    mode: Mode,
    command_line: CommandLine,
    clipboard: String,
    config: Config,
}

impl Editor {
    // -- Construction -------------------------------------------------------

    /// A fresh editor: empty buffer, Normal mode, cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// A fresh editor using `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Position::ZERO,
            selection: Selection::point(Position::ZERO),
            mode: Mode::Normal,
            command_line: CommandLine::new(),
            clipboard: String::new(),
            config,
        }
    }

    /// A fresh editor with `path` loaded.
    ///
    /// # Errors
    ///
    /// Fails like [`Buffer::load_file`]: a missing file is fine, anything
    /// else unreadable is a [`BufferError::Read`](crate::error::BufferError::Read).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut editor = Self::new();
        editor.load_file(path)?;
        Ok(editor)
    }

    // -- File I/O -----------------------------------------------------------

    /// Load `path` into the buffer. See [`Buffer::load_file`].
    ///
    /// The cursor and selection are re-clamped to the new content.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Read`](crate::error::BufferError::Read) if the
    /// file exists but can't be read.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.buffer.load_file(path)?;
        self.clamp_cursor();
        self.sync_selection();
        Ok(())
    }

    /// Save the buffer. See [`Buffer::save_file`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Write`](crate::error::BufferError::Write) if the
    /// write fails.
    pub fn save_file(&mut self) -> Result<()> {
        self.buffer.save_file()
    }

    // -- Accessors ----------------------------------------------------------

    /// The current mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The current selection.
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The buffer, read-only.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Number of lines in the buffer.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Text of line `n`, `""` if out of range.
    #[inline]
    #[must_use]
    pub fn line(&self, n: usize) -> &str {
        self.buffer.line(n)
    }

    /// True if the buffer has unsaved changes.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// The file name to show, or the configured placeholder.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.buffer.display_name_or(&self.config.no_name_label)
    }

    /// Text typed at the `:` prompt so far.
    #[inline]
    #[must_use]
    pub fn command(&self) -> &str {
        self.command_line.input()
    }

    /// The last yanked text, `""` if nothing was yanked.
    #[inline]
    #[must_use]
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// The configuration this editor was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    // -- Mode ---------------------------------------------------------------

    /// Switch to `mode`.
    ///
    /// Entering any mode but Visual collapses the selection onto the cursor.
    /// Entering Visual keeps the selection as it is, so the next movement
    /// extends it. The cursor is re-clamped for the new mode. Switching to
    /// the mode already active changes nothing.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        log::trace!("mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.clamp_cursor();
        if !mode.is_visual() {
            self.selection = Selection::point(self.cursor);
        }
    }

    // -- Movement -----------------------------------------------------------

    /// Move by `d_line` lines and `d_col` columns, clamped to the buffer.
    pub fn move_cursor(&mut self, d_line: isize, d_col: isize) {
        self.cursor = Position::new(
            self.cursor.line.saturating_add_signed(d_line),
            self.cursor.col.saturating_add_signed(d_col),
        );
        self.settle_cursor();
    }

    /// Move to `pos`, clamped to the buffer.
    pub fn move_cursor_to(&mut self, pos: Position) {
        self.cursor = pos;
        self.settle_cursor();
    }

    /// Move to column 0.
    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
        self.settle_cursor();
    }

    /// Move to the last column the mode allows on this line.
    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.buffer.line_len(self.cursor.line);
        self.settle_cursor();
    }

    /// Move forward past the next word on this line, or to the start of
    /// the next line if the scan found nothing to pass over.
    ///
    /// The scan result is compared before clamping, so in Normal mode a
    /// cursor on the last character stays there: the scan moved one column
    /// past the end and the clamp pulls it back.
    pub fn move_word_forward(&mut self) {
        let line = self.buffer.line(self.cursor.line);
        let stop = word::forward_stop(line, self.cursor.col);

        self.cursor = if stop == self.cursor.col && self.cursor.line + 1 < self.buffer.line_count() {
            Position::new(self.cursor.line + 1, 0)
        } else {
            self.cursor.with_col(stop)
        };
        self.settle_cursor();
    }

    /// Move back to the start of the current or previous word, or to the end
    /// of the previous line from column 0.
    pub fn move_word_backward(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                let prev = self.cursor.line - 1;
                self.cursor = Position::new(prev, self.buffer.line_len(prev));
            }
        } else {
            let line = self.buffer.line(self.cursor.line);
            self.cursor.col = word::backward_stop(line, self.cursor.col);
        }
        self.settle_cursor();
    }

    // -- Selection ----------------------------------------------------------

    /// Select the whole cursor line, `{line, 0}` to `{line, len}`, and move
    /// the cursor to the end of it.
    pub fn select_line(&mut self) {
        let line = self.cursor.line;
        let start = Position::new(line, 0);
        let end = Position::new(line, self.buffer.line_len(line));
        self.selection = Selection::new(start, end);
        self.cursor = end;
        self.clamp_cursor();
    }

    /// Select the word under the cursor and move the cursor to its end.
    /// Does nothing if the cursor is not on a word character.
    pub fn select_word(&mut self) {
        let line = self.buffer.line(self.cursor.line);
        let Some((start, end)) = word::bounds_at(line, self.cursor.col) else {
            return;
        };
        self.selection = Selection::new(self.cursor.with_col(start), self.cursor.with_col(end));
        self.cursor = self.selection.head;
        self.clamp_cursor();
    }

    // -- Editing ------------------------------------------------------------

    /// Delete the selected text. Does nothing if the selection is empty.
    pub fn delete_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.cursor = self.buffer.delete_selection(self.selection);
        self.clamp_cursor();
        self.selection = Selection::point(self.cursor);
    }

    /// Copy the selected text into the clipboard, replacing what was there.
    /// Does nothing if the selection is empty.
    pub fn yank_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.clipboard = self.buffer.selected_text(self.selection);
    }

    /// Insert the clipboard at the cursor, one character at a time, splitting
    /// lines at each `\n`. Does nothing if the clipboard is empty.
    ///
    /// Like [`insert_char`](Self::insert_char), the cursor is left just after
    /// the pasted text without re-clamping.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        for ch in self.clipboard.chars() {
            self.cursor = if ch == '\n' {
                self.buffer.insert_newline(self.cursor)
            } else {
                self.buffer.insert_char(self.cursor, ch)
            };
        }
        self.selection = Selection::point(self.cursor);
    }

    /// Type `ch` at the cursor and leave the cursor just after it.
    ///
    /// No clamp: the cursor may rest one past the end even in Normal mode,
    /// until the next movement or mode change.
    pub fn insert_char(&mut self, ch: char) {
        self.cursor = self.buffer.insert_char(self.cursor, ch);
        self.selection = Selection::point(self.cursor);
    }

    /// Split the line at the cursor.
    pub fn insert_newline(&mut self) {
        self.cursor = self.buffer.insert_newline(self.cursor);
        self.selection = Selection::point(self.cursor);
    }

    /// Delete the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        self.cursor = self.buffer.delete_char(self.cursor);
        self.clamp_cursor();
        self.selection = Selection::point(self.cursor);
    }

    // -- Command line -------------------------------------------------------

    /// Append `ch` to the `:` accumulator.
    pub fn append_command(&mut self, ch: char) {
        self.command_line.push(ch);
    }

    /// Drop the last character of the `:` accumulator.
    pub fn backspace_command(&mut self) {
        self.command_line.backspace();
    }

    /// Empty the `:` accumulator.
    pub fn clear_command(&mut self) {
        self.command_line.clear();
    }

    /// Run the accumulated command and clear the accumulator. Returns `true`
    /// if the editor should exit.
    ///
    /// A save failure from `w` or `wq` is logged, not returned: `wq` still
    /// quits. Unrecognized commands are ignored.
    pub fn execute_command(&mut self) -> bool {
        match self.command_line.take() {
            Command::Write => {
                self.save_and_log();
                false
            }
            Command::Quit => {
                if self.buffer.is_dirty() {
                    log::trace!("refusing to quit with unsaved changes");
                }
                !self.buffer.is_dirty()
            }
            Command::ForceQuit => true,
            Command::WriteQuit => {
                self.save_and_log();
                true
            }
            Command::Unknown(text) => {
                log::trace!("ignoring command {text:?}");
                false
            }
        }
    }

    // -- Internals ----------------------------------------------------------

    fn save_and_log(&mut self) {
        if let Err(err) = self.buffer.save_file() {
            log::warn!("{err}");
        }
    }

    /// `pos` constrained to the buffer and the current mode's column limit.
    fn clamped(&self, pos: Position) -> Position {
        let line = pos.line.min(self.buffer.line_count().saturating_sub(1));
        let len = self.buffer.line_len(line);
        let max_col = if self.mode.cursor_past_end() {
            len
        } else {
            len.saturating_sub(1)
        };
        Position::new(line, pos.col.min(max_col))
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.clamped(self.cursor);
    }

    /// Extend the selection head to the cursor in Visual mode, otherwise
    /// collapse it onto the cursor.
    fn sync_selection(&mut self) {
        self.selection = if self.mode.is_visual() {
            self.selection.extend_to(self.cursor)
        } else {
            Selection::point(self.cursor)
        };
    }

    fn settle_cursor(&mut self) {
        self.clamp_cursor();
        self.sync_selection();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::BufferError;

    fn pos(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    /// An editor over `text` with a clean buffer, cursor at the origin.
    fn editor(text: &str) -> Editor {
        let mut ed = Editor::new();
        ed.buffer = Buffer::from_text(text);
        ed
    }

    fn lines(ed: &Editor) -> Vec<&str> {
        (0..ed.line_count()).map(|n| ed.line(n)).collect()
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_editor_state() {
        let ed = Editor::new();
        assert_eq!(ed.mode(), Mode::Normal);
        assert_eq!(ed.cursor(), Position::ZERO);
        assert!(ed.selection().is_empty());
        assert_eq!(ed.line_count(), 1);
        assert_eq!(ed.command(), "");
        assert_eq!(ed.clipboard(), "");
        assert!(!ed.is_dirty());
        assert_eq!(ed.display_name(), "[No Name]");
    }

    #[test]
    fn display_name_uses_config_label() {
        let ed = Editor::with_config(Config {
            no_name_label: "scratch".into(),
        });
        assert_eq!(ed.display_name(), "scratch");
    }

    // -- Clamping -----------------------------------------------------------

    #[test]
    fn normal_mode_stops_on_last_char() {
        let mut ed = editor("abc");
        ed.move_cursor_to(pos(0, 3));
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    #[test]
    fn insert_mode_may_sit_past_end() {
        let mut ed = editor("abc");
        ed.set_mode(Mode::Insert);
        ed.move_cursor_to(pos(0, 10));
        assert_eq!(ed.cursor(), pos(0, 3));
    }

    #[test]
    fn empty_line_pins_col_to_zero() {
        let mut ed = editor("abc\n\nxyz");
        ed.move_cursor_to(pos(1, 5));
        assert_eq!(ed.cursor(), pos(1, 0));
    }

    #[test]
    fn line_clamped_to_last() {
        let mut ed = editor("a\nb");
        ed.move_cursor_to(pos(40, 0));
        assert_eq!(ed.cursor(), pos(1, 0));
    }

    #[test]
    fn move_cursor_saturates_at_origin() {
        let mut ed = editor("abc\ndef");
        ed.move_cursor(-3, -7);
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    #[test]
    fn move_cursor_relative() {
        let mut ed = editor("abc\ndef");
        ed.move_cursor(1, 2);
        assert_eq!(ed.cursor(), pos(1, 2));
        ed.move_cursor(0, -1);
        assert_eq!(ed.cursor(), pos(1, 1));
    }

    #[test]
    fn leaving_insert_reclamps() {
        let mut ed = editor("abc");
        ed.set_mode(Mode::Insert);
        ed.move_to_line_end();
        assert_eq!(ed.cursor(), pos(0, 3));
        ed.set_mode(Mode::Normal);
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    // -- Line start/end -----------------------------------------------------

    #[test]
    fn line_end_depends_on_mode() {
        let mut ed = editor("hello");
        ed.move_to_line_end();
        assert_eq!(ed.cursor(), pos(0, 4));

        ed.set_mode(Mode::Insert);
        ed.move_to_line_end();
        assert_eq!(ed.cursor(), pos(0, 5));

        ed.move_to_line_start();
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    // -- Visual mode --------------------------------------------------------

    #[test]
    fn movement_collapses_outside_visual() {
        let mut ed = editor("hello world");
        ed.move_cursor(0, 3);
        assert_eq!(ed.selection(), Selection::point(pos(0, 3)));
    }

    #[test]
    fn visual_movement_extends_from_anchor() {
        let mut ed = editor("hello world");
        ed.move_cursor(0, 2);
        ed.set_mode(Mode::Visual);
        ed.move_cursor(0, 3);
        assert_eq!(ed.selection(), Selection::new(pos(0, 2), pos(0, 5)));

        // Back past the anchor flips direction.
        ed.move_cursor(0, -4);
        assert_eq!(ed.selection().start(), pos(0, 1));
        assert_eq!(ed.selection().end(), pos(0, 2));
    }

    #[test]
    fn redundant_set_mode_keeps_explicit_selection() {
        let mut ed = editor("hello world");
        ed.select_word();
        let before = ed.selection();
        ed.set_mode(Mode::Normal);
        assert_eq!(ed.selection(), before);
        assert_eq!(ed.cursor(), pos(0, 5));
    }

    #[test]
    fn reentering_visual_keeps_selection() {
        let mut ed = editor("hello");
        ed.set_mode(Mode::Visual);
        ed.move_cursor(0, 3);
        let before = ed.selection();
        ed.set_mode(Mode::Visual);
        assert_eq!(ed.selection(), before);
    }

    #[test]
    fn leaving_visual_collapses() {
        let mut ed = editor("hello");
        ed.set_mode(Mode::Visual);
        ed.move_cursor(0, 3);
        ed.set_mode(Mode::Normal);
        assert_eq!(ed.selection(), Selection::point(pos(0, 3)));
    }

    #[test]
    fn visual_line_end_selects_to_past_end() {
        let mut ed = editor("hello");
        ed.set_mode(Mode::Visual);
        ed.move_to_line_end();
        assert_eq!(ed.selection(), Selection::new(pos(0, 0), pos(0, 5)));
    }

    // -- Word motion --------------------------------------------------------

    #[test]
    fn word_forward_within_line() {
        let mut ed = editor("hello world foo");
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(0, 5));
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(0, 11));
    }

    #[test]
    fn word_forward_normal_mode_holds_last_char() {
        let mut ed = editor("abc\ndef");
        ed.move_cursor_to(pos(0, 2));
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    #[test]
    fn word_forward_wraps_from_line_end() {
        let mut ed = editor("abc\ndef");
        ed.set_mode(Mode::Insert);
        ed.move_cursor_to(pos(0, 3));
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(1, 0));
    }

    #[test]
    fn word_forward_wraps_from_empty_line() {
        let mut ed = editor("\nnext");
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(1, 0));
    }

    #[test]
    fn word_forward_insert_mode_stops_at_line_end_first() {
        let mut ed = editor("abc\ndef");
        ed.set_mode(Mode::Insert);
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(0, 3));
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(1, 0));
    }

    #[test]
    fn word_forward_last_line_end_stays() {
        let mut ed = editor("abc");
        ed.move_cursor_to(pos(0, 3));
        ed.move_word_forward();
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    #[test]
    fn word_backward_within_line() {
        let mut ed = editor("hello world");
        ed.move_cursor_to(pos(0, 8));
        ed.move_word_backward();
        assert_eq!(ed.cursor(), pos(0, 6));
        ed.move_word_backward();
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    #[test]
    fn word_backward_to_previous_line_end() {
        let mut ed = editor("abc\ndef");
        ed.move_cursor_to(pos(1, 0));
        ed.move_word_backward();
        // Normal mode clamps the past-end target onto the last char.
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    #[test]
    fn word_backward_at_origin_stays() {
        let mut ed = editor("abc");
        ed.move_word_backward();
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    #[test]
    fn word_motion_extends_in_visual() {
        let mut ed = editor("one two");
        ed.set_mode(Mode::Visual);
        ed.move_word_forward();
        assert_eq!(ed.selection(), Selection::new(pos(0, 0), pos(0, 3)));
        ed.move_word_backward();
        assert!(ed.selection().is_empty());
    }

    // -- Line / word selection ----------------------------------------------

    #[test]
    fn select_line_covers_whole_line() {
        let mut ed = editor("first\nsecond");
        ed.move_cursor(1, 2);
        ed.select_line();
        assert_eq!(ed.selection(), Selection::new(pos(1, 0), pos(1, 6)));
        // Normal mode keeps the cursor on the last char.
        assert_eq!(ed.cursor(), pos(1, 5));
    }

    #[test]
    fn select_line_in_visual_puts_cursor_on_end() {
        let mut ed = editor("first");
        ed.set_mode(Mode::Visual);
        ed.select_line();
        assert_eq!(ed.cursor(), pos(0, 5));
    }

    #[test]
    fn select_word_expands_both_ways() {
        let mut ed = editor("say hello_there!");
        ed.move_cursor_to(pos(0, 7));
        ed.select_word();
        assert_eq!(ed.selection(), Selection::new(pos(0, 4), pos(0, 15)));
        assert_eq!(ed.cursor(), pos(0, 15));
    }

    #[test]
    fn select_word_on_non_word_is_noop() {
        let mut ed = editor("a + b");
        ed.move_cursor_to(pos(0, 2));
        ed.select_word();
        assert!(ed.selection().is_empty());
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    // -- Delete / yank / paste ----------------------------------------------

    #[test]
    fn delete_empty_selection_is_noop() {
        let mut ed = editor("abc");
        ed.delete_selection();
        assert_eq!(lines(&ed), vec!["abc"]);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn delete_selected_word() {
        let mut ed = editor("hello world");
        ed.move_cursor_to(pos(0, 6));
        ed.select_word();
        ed.delete_selection();
        assert_eq!(lines(&ed), vec!["hello "]);
        assert_eq!(ed.cursor(), pos(0, 5));
        assert!(ed.selection().is_empty());
        assert!(ed.is_dirty());
    }

    #[test]
    fn delete_selected_line_leaves_empty_line() {
        let mut ed = editor("only");
        ed.select_line();
        ed.delete_selection();
        assert_eq!(lines(&ed), vec![""]);
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    #[test]
    fn yank_copies_without_changing_buffer() {
        let mut ed = editor("hello world");
        ed.select_word();
        ed.yank_selection();
        assert_eq!(ed.clipboard(), "hello");
        assert!(!ed.is_dirty());
    }

    #[test]
    fn yank_empty_selection_keeps_clipboard() {
        let mut ed = editor("hello world");
        ed.select_word();
        ed.yank_selection();
        ed.set_mode(Mode::Normal);
        ed.yank_selection();
        assert_eq!(ed.clipboard(), "hello");
    }

    #[test]
    fn paste_empty_clipboard_is_noop() {
        let mut ed = editor("abc");
        ed.paste();
        assert_eq!(lines(&ed), vec!["abc"]);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn paste_single_line() {
        let mut ed = editor("ab");
        ed.set_mode(Mode::Insert);
        ed.clipboard = "XY".into();
        ed.move_cursor_to(pos(0, 1));
        ed.paste();
        assert_eq!(lines(&ed), vec!["aXYb"]);
        assert_eq!(ed.cursor(), pos(0, 3));
        assert!(ed.selection().is_empty());
    }

    #[test]
    fn paste_multi_line() {
        let mut ed = editor("[]");
        ed.set_mode(Mode::Insert);
        ed.clipboard = "one\ntwo\nthree".into();
        ed.move_cursor_to(pos(0, 1));
        ed.paste();
        assert_eq!(lines(&ed), vec!["[one", "two", "three]"]);
        assert_eq!(ed.cursor(), pos(2, 5));
    }

    #[test]
    fn yank_then_paste_multi_line() {
        let mut ed = editor("ab\ncd");
        ed.set_mode(Mode::Visual);
        ed.move_cursor_to(pos(1, 1));
        ed.yank_selection();
        assert_eq!(ed.clipboard(), "ab\nc");

        ed.set_mode(Mode::Insert);
        ed.move_cursor_to(pos(1, 2));
        ed.paste();
        assert_eq!(lines(&ed), vec!["ab", "cdab", "c"]);
    }

    #[test]
    fn paste_in_normal_mode_ends_past_text() {
        let mut ed = Editor::new();
        ed.clipboard = "ab".into();
        ed.paste();
        assert_eq!(lines(&ed), vec!["ab"]);
        assert_eq!(ed.cursor(), pos(0, 2));
        assert_eq!(ed.selection(), Selection::point(pos(0, 2)));
    }

    // -- Insertion ----------------------------------------------------------

    #[test]
    fn insert_in_normal_mode_advances_past_char() {
        let mut ed = Editor::new();
        ed.insert_char('a');
        assert_eq!(lines(&ed), vec!["a"]);
        assert_eq!(ed.cursor(), pos(0, 1));

        // The next movement brings it back inside the line.
        ed.move_cursor(0, 0);
        assert_eq!(ed.cursor(), pos(0, 0));
    }

    #[test]
    fn typing_builds_lines() {
        let mut ed = Editor::new();
        ed.set_mode(Mode::Insert);
        for ch in "hi".chars() {
            ed.insert_char(ch);
        }
        ed.insert_newline();
        ed.insert_char('!');
        assert_eq!(lines(&ed), vec!["hi", "!"]);
        assert_eq!(ed.cursor(), pos(1, 1));
        assert!(ed.is_dirty());
    }

    #[test]
    fn backspace_joins_lines() {
        let mut ed = editor("ab\ncd");
        ed.set_mode(Mode::Insert);
        ed.move_cursor_to(pos(1, 0));
        ed.backspace();
        assert_eq!(lines(&ed), vec!["abcd"]);
        assert_eq!(ed.cursor(), pos(0, 2));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut ed = editor("ab");
        ed.backspace();
        assert_eq!(lines(&ed), vec!["ab"]);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn insert_collapses_visual_selection() {
        let mut ed = editor("ab");
        ed.set_mode(Mode::Visual);
        ed.move_cursor(0, 1);
        ed.insert_char('x');
        assert!(ed.selection().is_empty());
        assert_eq!(ed.selection().head, ed.cursor());
    }

    // -- Command line -------------------------------------------------------

    #[test]
    fn accumulator_edits() {
        let mut ed = Editor::new();
        ed.append_command('w');
        ed.append_command('q');
        assert_eq!(ed.command(), "wq");
        ed.backspace_command();
        assert_eq!(ed.command(), "w");
        ed.clear_command();
        assert_eq!(ed.command(), "");
        ed.backspace_command();
        assert_eq!(ed.command(), "");
    }

    fn run(ed: &mut Editor, text: &str) -> bool {
        for ch in text.chars() {
            ed.append_command(ch);
        }
        ed.execute_command()
    }

    #[test]
    fn quit_clean_buffer() {
        let mut ed = Editor::new();
        assert!(run(&mut ed, "q"));
        assert_eq!(ed.command(), "");
    }

    #[test]
    fn quit_refused_when_dirty() {
        let mut ed = Editor::new();
        ed.insert_char('a');
        assert!(!run(&mut ed, "q"));
        assert_eq!(lines(&ed), vec!["a"]);
        assert!(ed.is_dirty());
    }

    #[test]
    fn force_quit_when_dirty() {
        let mut ed = Editor::new();
        ed.insert_char('a');
        assert!(run(&mut ed, " q! "));
    }

    #[test]
    fn unknown_command_is_ignored() {
        let mut ed = Editor::new();
        ed.insert_char('a');
        assert!(!run(&mut ed, "wqa"));
        assert!(ed.is_dirty());
        assert_eq!(ed.command(), "");
    }

    #[test]
    fn write_without_path_does_not_quit() {
        let mut ed = Editor::new();
        ed.insert_char('a');
        assert!(!run(&mut ed, "w"));
        // No path: the save is a no-op, the buffer stays dirty.
        assert!(ed.is_dirty());
    }

    #[test]
    fn write_saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.txt");

        let mut ed = Editor::open(&path).unwrap();
        ed.set_mode(Mode::Insert);
        ed.insert_char('z');
        assert!(!run(&mut ed, "w"));
        assert!(!ed.is_dirty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "z");
    }

    // -- File I/O -----------------------------------------------------------

    #[test]
    fn load_reclamps_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.txt");
        std::fs::write(&path, "x").unwrap();

        let mut ed = editor("a long line\nand another");
        ed.move_cursor_to(pos(1, 8));
        ed.load_file(&path).unwrap();
        assert_eq!(ed.cursor(), pos(0, 0));
        assert_eq!(ed.selection(), Selection::point(pos(0, 0)));
    }

    #[test]
    fn load_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor("keep");
        let err = ed.load_file(dir.path()).unwrap_err();
        assert!(matches!(err, BufferError::Read { .. }));
        assert_eq!(lines(&ed), vec!["keep"]);
    }
}
