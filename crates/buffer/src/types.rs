// Chunk: docs/chunks/cursor_projection - Line/column projection of the cursor offset

/// Cursor location as (column, line) where both are 0-indexed.
///
/// Columns count code points from the start of the line; the line separator
/// itself is never part of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LineColumn {
    pub column: usize,
    pub line: usize,
}

impl LineColumn {
    pub fn new(column: usize, line: usize) -> Self {
        Self { column, line }
    }
}

// Chunk: docs/chunks/bounded_cursor_moves - Typed errors for out-of-range cursor moves
/// Direction of a bulk cursor move, reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}
