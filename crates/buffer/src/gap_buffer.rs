// Chunk: docs/chunks/gap_buffer_core - Gap buffer text storage engine

//! Gap buffer implementation for efficient text editing.
//!
//! The storage is one `Vec<char>` laid out as
//!
//! ```text
//!  [ pre-gap text | gap (stale slots) | post-gap text ]
//!    0..pre_gap_len                     len - post_gap_len..len
//! ```
//!
//! The cursor always sits at the gap, so the cursor offset is simply the
//! length of the pre-gap region. Insertions and deletions at the cursor are
//! O(1) amortized; moving the cursor is O(distance).

use std::fmt;

use log::{debug, trace};

use crate::error::GapBufferError;
use crate::line_index::{LineIndex, LINE_SEPARATOR};
use crate::types::{Direction, LineColumn};

/// Capacity multiplier applied each time the gap runs out.
const GAP_GROWTH_FACTOR: usize = 2;
/// Capacity an empty buffer is treated as having when it first grows.
const MIN_GROWTH_BASE: usize = 1;
/// Value written into freshly allocated gap slots. Never observable.
const GAP_FILL: char = '\0';

/// A gap buffer holding code points with a cursor at the gap.
///
/// Benign boundary conditions (moving or deleting past either end) are
/// no-ops reported through the return value. Bulk moves that ask for more
/// code points than exist fail with [`GapBufferError::OutOfRange`] and leave
/// the buffer untouched.
#[derive(Debug)]
pub struct GapBuffer {
    /// Backing store. Capacity is `storage.len()`, gap included.
    storage: Vec<char>,
    /// Valid code points at the front of `storage`. Equals the cursor offset.
    pre_gap_len: usize,
    /// Valid code points at the back of `storage`.
    post_gap_len: usize,
}

impl GapBuffer {
    /// Creates an empty buffer with no storage and no gap.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            pre_gap_len: 0,
            post_gap_len: 0,
        }
    }

    /// Creates a buffer holding `text` with the cursor at offset 0.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// Replaces the whole content with `text`.
    ///
    /// The text becomes the post-gap region: the cursor lands at offset 0
    /// and the gap is empty until the next insertion grows it.
    pub fn set_text(&mut self, text: &str) {
        self.storage = text.chars().collect();
        self.pre_gap_len = 0;
        self.post_gap_len = self.storage.len();
        trace!("gap buffer loaded with {} code points", self.post_gap_len);
    }

    // ==================== Layout ====================

    fn gap_start(&self) -> usize {
        self.pre_gap_len
    }

    /// First index after the gap.
    fn post_gap_start(&self) -> usize {
        self.storage.len() - self.post_gap_len
    }

    fn gap_len(&self) -> usize {
        self.post_gap_start() - self.pre_gap_len
    }

    // ==================== Accessors ====================

    /// Returns the number of code points in the logical text.
    pub fn len(&self) -> usize {
        self.pre_gap_len + self.post_gap_len
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the backing store, gap included.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the cursor's linear offset into the logical text.
    pub fn cursor_offset(&self) -> usize {
        self.pre_gap_len
    }

    /// Returns the logical text: pre-gap region followed by post-gap region.
    pub fn text(&self) -> String {
        self.chars().collect()
    }

    /// Returns an iterator over the logical text, skipping the gap.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage[..self.pre_gap_len]
            .iter()
            .chain(self.storage[self.post_gap_start()..].iter())
            .copied()
    }

    /// Returns the code point at the given logical offset.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset >= self.len() {
            return None;
        }
        let physical = if offset < self.pre_gap_len {
            offset
        } else {
            offset + self.gap_len()
        };
        Some(self.storage[physical])
    }

    /// Returns the logical range `start..end` as a String.
    ///
    /// Both ends are clamped to the text; an empty or inverted range yields
    /// an empty string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }

    // ==================== Lines ====================
    // Chunk: docs/chunks/cursor_projection - Line/column projection of the cursor offset

    /// Returns the cursor position as (column, line).
    ///
    /// Only the pre-gap region is scanned, so this is O(cursor offset). It is
    /// recomputed on every call; hosts polling it per keystroke on very large
    /// buffers should cache the result.
    pub fn cursor_line_column(&self) -> LineColumn {
        let before = &self.storage[..self.pre_gap_len];
        match before.iter().rposition(|&ch| ch == LINE_SEPARATOR) {
            Some(last_separator) => {
                let line = before.iter().filter(|&&ch| ch == LINE_SEPARATOR).count();
                LineColumn::new(self.pre_gap_len - last_separator - 1, line)
            }
            None => LineColumn::new(self.pre_gap_len, 0),
        }
    }

    /// Builds a line index over the current text. O(n).
    pub fn line_index(&self) -> LineIndex {
        LineIndex::from_chars(self.chars())
    }

    /// Returns the number of lines. An empty buffer has one empty line.
    pub fn line_count(&self) -> usize {
        1 + self.chars().filter(|&ch| ch == LINE_SEPARATOR).count()
    }

    /// Returns the content of `line` without its separator.
    pub fn line_content(&self, line: usize) -> Option<String> {
        let index = self.line_index();
        let start = index.line_start(line)?;
        let end = index.line_end(line)?;
        Some(self.slice(start, end))
    }

    // ==================== Cursor movement ====================

    /// Relocates the gap so that the cursor sits at logical offset `offset`.
    ///
    /// O(distance). Callers validate `offset <= len()`.
    fn move_gap_to(&mut self, offset: usize) {
        debug_assert!(offset <= self.len());

        if offset < self.pre_gap_len {
            // Move gap left: the tail of the pre-gap text joins the post-gap text
            let shift = self.pre_gap_len - offset;
            let post_gap_start = self.post_gap_start();
            self.storage
                .copy_within(offset..self.pre_gap_len, post_gap_start - shift);
            self.pre_gap_len = offset;
            self.post_gap_len += shift;
        } else if offset > self.pre_gap_len {
            // Move gap right: the head of the post-gap text joins the pre-gap text
            let shift = offset - self.pre_gap_len;
            let post_gap_start = self.post_gap_start();
            self.storage
                .copy_within(post_gap_start..post_gap_start + shift, self.pre_gap_len);
            self.pre_gap_len += shift;
            self.post_gap_len -= shift;
        }
    }

    fn out_of_range(
        &self,
        direction: Direction,
        requested: usize,
        available: usize,
    ) -> GapBufferError {
        debug!(
            "rejected cursor move {} by {} at offset {} ({} available)",
            direction, requested, self.pre_gap_len, available
        );
        GapBufferError::OutOfRange {
            direction,
            requested,
            available,
        }
    }

    /// Moves the cursor one code point to the right.
    ///
    /// Returns false (and does nothing) when the cursor is already at the end.
    pub fn move_cursor_right(&mut self) -> bool {
        if self.post_gap_len == 0 {
            return false;
        }

        let ch = self.storage[self.post_gap_start()];
        self.storage[self.pre_gap_len] = ch;
        self.pre_gap_len += 1;
        self.post_gap_len -= 1;
        true
    }

    /// Moves the cursor `distance` code points to the left.
    ///
    /// A no-op when the cursor is already at the start.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] if `distance` exceeds the
    /// number of code points before the cursor.
    pub fn move_cursor_left(&mut self, distance: usize) -> Result<(), GapBufferError> {
        if self.pre_gap_len == 0 {
            return Ok(());
        }
        if distance > self.pre_gap_len {
            return Err(self.out_of_range(Direction::Left, distance, self.pre_gap_len));
        }

        self.move_gap_to(self.pre_gap_len - distance);
        Ok(())
    }

    /// Moves the cursor `distance` code points to the right.
    ///
    /// A no-op when the cursor is already at the end.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] if `distance` exceeds the
    /// number of code points after the cursor.
    pub fn move_cursor_right_by(&mut self, distance: usize) -> Result<(), GapBufferError> {
        if self.post_gap_len == 0 {
            return Ok(());
        }
        if distance > self.post_gap_len {
            return Err(self.out_of_range(Direction::Right, distance, self.post_gap_len));
        }

        self.move_gap_to(self.pre_gap_len + distance);
        Ok(())
    }

    /// Places the cursor at an absolute logical offset.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] if `offset > len()`.
    pub fn set_cursor_offset(&mut self, offset: usize) -> Result<(), GapBufferError> {
        if offset > self.len() {
            return Err(self.out_of_range(
                Direction::Right,
                offset - self.pre_gap_len,
                self.post_gap_len,
            ));
        }

        self.move_gap_to(offset);
        Ok(())
    }

    /// Places the cursor at a (column, line) location.
    ///
    /// The line is clamped to the last line and the column to the end of
    /// that line, so every input lands somewhere valid.
    pub fn set_cursor_line_column(&mut self, position: LineColumn) {
        let index = self.line_index();
        let line = position.line.min(index.line_count() - 1);
        self.move_to_column_on_line(&index, line, position.column);
    }

    /// Moves the cursor up by `distance` lines, one line at a time.
    ///
    /// Each step keeps the current column when the line above is long
    /// enough and lands at its end otherwise, so a short line passed on the
    /// way clamps the column for the remaining steps. Stops at the first
    /// line. Returns the number of lines actually moved.
    pub fn move_cursor_up(&mut self, distance: usize) -> usize {
        let index = self.line_index();
        let mut moved = 0;
        while moved < distance {
            let LineColumn { column, line } = self.cursor_line_column();
            if line == 0 {
                break;
            }
            self.move_to_column_on_line(&index, line - 1, column);
            moved += 1;
        }
        moved
    }

    /// Moves the cursor down by `distance` lines, one line at a time.
    ///
    /// Each step keeps the current column when the line below is long
    /// enough and lands at its end otherwise. Stops at the last line.
    /// Returns the number of lines actually moved.
    pub fn move_cursor_down(&mut self, distance: usize) -> usize {
        let index = self.line_index();
        let last_line = index.line_count() - 1;
        let mut moved = 0;
        while moved < distance {
            let LineColumn { column, line } = self.cursor_line_column();
            if line >= last_line {
                break;
            }
            self.move_to_column_on_line(&index, line + 1, column);
            moved += 1;
        }
        moved
    }

    fn move_to_column_on_line(&mut self, index: &LineIndex, line: usize, column: usize) {
        let (Some(start), Some(line_len)) = (index.line_start(line), index.line_len(line)) else {
            return;
        };
        self.move_gap_to(start + column.min(line_len));
    }

    // ==================== Mutations ====================

    /// Deletes the code point after the cursor (delete key).
    ///
    /// Returns the deleted code point, or None if at the end.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.post_gap_len == 0 {
            return None;
        }
        let ch = self.storage[self.post_gap_start()];
        self.post_gap_len -= 1;
        Some(ch)
    }

    /// Deletes the code point before the cursor (backspace).
    ///
    /// Returns the deleted code point, or None if at the beginning.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.pre_gap_len == 0 {
            return None;
        }
        self.pre_gap_len -= 1;
        Some(self.storage[self.pre_gap_len])
    }

    /// Inserts a code point at the cursor; the cursor ends up after it.
    ///
    /// O(1) amortized.
    pub fn insert(&mut self, ch: char) {
        self.ensure_gap(1);
        let at = self.gap_start();
        self.storage[at] = ch;
        self.pre_gap_len += 1;
    }

    /// Inserts a string at the cursor; the cursor ends up after its last
    /// code point.
    pub fn insert_str(&mut self, s: &str) {
        let chars: Vec<char> = s.chars().collect();
        self.ensure_gap(chars.len());
        let at = self.gap_start();
        self.storage[at..at + chars.len()].copy_from_slice(&chars);
        self.pre_gap_len += chars.len();
    }

    /// Grows the backing store until the gap holds at least `min_size` slots.
    fn ensure_gap(&mut self, min_size: usize) {
        while self.gap_len() < min_size {
            self.grow_gap();
        }
    }

    /// Doubles the backing store, keeping the gap at the cursor.
    ///
    /// Pre-gap text stays at the front; post-gap text is shifted to the end
    /// of the enlarged store, so the gap widens by the old capacity.
    fn grow_gap(&mut self) {
        let old_capacity = self.storage.len();
        let new_capacity = old_capacity.max(MIN_GROWTH_BASE) * GAP_GROWTH_FACTOR;
        let old_post_gap_start = self.post_gap_start();

        self.storage.resize(new_capacity, GAP_FILL);
        if self.post_gap_len > 0 {
            let new_post_gap_start = new_capacity - self.post_gap_len;
            self.storage
                .copy_within(old_post_gap_start..old_capacity, new_post_gap_start);
        }

        trace!(
            "grew gap buffer from {} to {} code points (cursor at {})",
            old_capacity,
            new_capacity,
            self.pre_gap_len
        );
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GapBuffer {
    fn from(text: &str) -> Self {
        Self::from_str(text)
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
