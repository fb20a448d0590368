// Chunk: docs/chunks/gap_buffer_core - Gap buffer text storage engine
// Chunk: docs/chunks/cursor_projection - Line/column projection of the cursor offset

//! gap-edit-buffer: in-memory editable text storage backed by a gap buffer.
//!
//! The text lives in one growable array with a movable gap at the cursor, so
//! typing and deleting next to the cursor is amortized O(1). Hosts feed key
//! events into the cursor-relative operations and pull the text and the
//! cursor's line/column back out for rendering.
//!
//! # Example
//!
//! ```
//! use gap_edit_buffer::{GapBuffer, LineColumn};
//!
//! let mut buffer = GapBuffer::from_str("hello\nworld");
//! assert_eq!(buffer.cursor_offset(), 0);
//!
//! // Jump to the end and look at where the cursor is
//! buffer.set_cursor_offset(11).unwrap();
//! assert_eq!(buffer.cursor_line_column(), LineColumn::new(5, 1));
//!
//! // Up one line lands at the end of "hello"
//! buffer.move_cursor_up(1);
//! assert_eq!(buffer.cursor_offset(), 5);
//!
//! buffer.insert('!');
//! assert_eq!(buffer.text(), "hello!\nworld");
//! ```
//!
//! # Boundaries
//!
//! Moving or deleting past either end of the text is a no-op reported
//! through the return value (`false`, `None`, or zero lines moved). Bulk
//! moves that ask for more code points than exist return
//! [`GapBufferError::OutOfRange`] and leave the buffer untouched.
//!
//! The buffer stores `char` code points. It does not know about grapheme
//! clusters, display widths, undo history, or files.

mod error;
mod gap_buffer;
mod line_index;
mod types;

pub use error::GapBufferError;
pub use gap_buffer::GapBuffer;
pub use line_index::LineIndex;
pub use types::{Direction, LineColumn};
