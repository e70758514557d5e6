//! # selvi-core — Editing engine for selvi
//!
//! Selection-first modal editing: movement and selection come first, and
//! mutating commands act on the current selection.
//!
//! - **[`position`]** — `Position` (line, col), 0-indexed
//! - **[`selection`]** — immutable anchor/head `Selection`
//! - **[`mode`]** — `Normal`, `Insert`, `Visual`, `Command`
//! - **[`word`]** — the word-character predicate and word scans
//! - **[`buffer`]** — line storage, file I/O, mutation primitives
//! - **[`command`]** — the `:` accumulator and ex command parsing
//! - **[`editor`]** — the `Editor` state machine tying it all together
//! - **[`config`]** / **[`error`]** — settings and failure types
//!
//! Rendering and key dispatch live outside this crate: they talk to the
//! [`Editor`] through its accessors and command methods only.

pub mod buffer;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod mode;
pub mod position;
pub mod selection;
pub mod word;

pub use buffer::Buffer;
pub use config::Config;
pub use editor::Editor;
pub use error::{BufferError, ConfigError};
pub use mode::Mode;
pub use position::Position;
pub use selection::Selection;
