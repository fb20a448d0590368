// Chunk: docs/chunks/bounded_cursor_moves - Typed errors for out-of-range cursor moves

//! Errors returned by fallible gap buffer operations.

use thiserror::Error;

use crate::types::Direction;

/// Represents all possible errors that can occur in the gap buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapBufferError {
    /// A cursor move asked for more code points than exist on that side of
    /// the cursor. The buffer is left untouched.
    #[error("cannot move cursor {direction} by {requested}: only {available} code points available")]
    OutOfRange {
        direction: Direction,
        requested: usize,
        available: usize,
    },
}
