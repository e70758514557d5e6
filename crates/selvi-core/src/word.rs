//! Word classification and line-level word scans.
//!
//! A **word character** is an ASCII letter, digit, or underscore. Everything
//! else — spaces, tabs, punctuation, non-ASCII — is a non-word character.
//! This one predicate is shared by [`forward_stop`], [`backward_stop`], and
//! [`bounds_at`], so word motion and word selection always agree on where a
//! word begins and ends.
//!
//! The scans work on a single line. Crossing to a neighbouring line is the
//! editor's decision, not ours.
//!
//! # Punctuation
//!
//! Punctuation is never a stopping target in either direction. Forward motion
//! skips a leading run of non-word characters and stops where the following
//! word ends; backward motion walks back until a non-word character precedes
//! a word character. `foo.bar` therefore contains two stops (`foo` and `bar`)
//! for both directions, and a line of pure punctuation is crossed in one step.

/// True for `[A-Za-z0-9_]`.
#[inline]
#[must_use]
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Where a forward word scan starting at `col` stops.
///
/// Skips a run of non-word characters, then a run of word characters, and
/// returns the column of the first non-word character after the word — or
/// the line length if the word runs to the end. A `col` at or past the end
/// of the line is returned unchanged.
#[must_use]
pub fn forward_stop(line: &str, col: usize) -> usize {
    let mut stop = col;
    let mut in_word = false;

    for ch in line.chars().skip(col) {
        let word = is_word_char(ch);
        if in_word && !word {
            break;
        }
        in_word |= word;
        stop += 1;
    }

    stop
}

/// Where a backward word scan starting at `col` stops.
///
/// Steps one column left, skips spaces, then keeps walking left until the
/// character to the left is a non-word character and the current one is a
/// word character — the start of the word containing (or preceding) the
/// original position. Never goes below column 0; never reads past the line.
#[must_use]
pub fn backward_stop(line: &str, col: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let Some(last) = chars.len().checked_sub(1) else {
        return 0;
    };

    let mut idx = col.saturating_sub(1).min(last);

    while idx > 0 && chars[idx] == ' ' {
        idx -= 1;
    }

    while idx > 0 {
        if !is_word_char(chars[idx - 1]) && is_word_char(chars[idx]) {
            break;
        }
        idx -= 1;
    }

    idx
}

/// The `[start, end)` columns of the word under `col`.
///
/// Returns `None` if `col` is past the end of the line or the character
/// there is not a word character.
#[must_use]
pub fn bounds_at(line: &str, col: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    if !chars.get(col).copied().is_some_and(is_word_char) {
        return None;
    }

    let start = chars[..col]
        .iter()
        .rposition(|&ch| !is_word_char(ch))
        .map_or(0, |idx| idx + 1);
    let end = chars[col..]
        .iter()
        .position(|&ch| !is_word_char(ch))
        .map_or(chars.len(), |idx| col + idx);

    Some((start, end))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
