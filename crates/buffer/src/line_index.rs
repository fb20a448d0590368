// Chunk: docs/chunks/cursor_projection - Line/column projection of the cursor offset

//! Line boundaries of the logical text.
//!
//! The index is rebuilt from a character iterator whenever a caller needs
//! line geometry (vertical cursor movement, line access). It is not kept in
//! sync with edits.

/// Code point that ends a line. It is stripped from line contents.
pub(crate) const LINE_SEPARATOR: char = '\n';

/// Tracks where each line starts in the logical text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Code point offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
    /// Total number of code points in the indexed text.
    total_len: usize,
}

impl LineIndex {
    /// Creates an index for empty text: a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            total_len: 0,
        }
    }

    /// Builds an index over `content`.
    pub fn from_chars<I>(content: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut index = Self::new();
        index.rebuild(content);
        index
    }

    /// Rebuilds the index from the given content. O(n).
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == LINE_SEPARATOR {
                self.line_starts.push(offset);
            }
        }
        self.total_len = offset;
    }

    /// Returns the number of lines. Always at least 1, even for empty text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the offset where the given line starts, or None if out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the offset one past the last code point of the given line.
    ///
    /// For all lines except the last, this points at the separator.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(self.total_len)
        }
    }

    /// Returns the length of the given line, excluding the separator.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Some(end - start)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
