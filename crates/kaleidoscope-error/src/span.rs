//! Span - Source code location
//!
//! A Span represents a byte region inside one registered source buffer,
//! used to point diagnostics at the offending text.

use crate::source::BufferId;
use std::ops::Range;

/// Represents a position in a source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed, in bytes)
    pub column: u32,
    /// Byte offset from the beginning of the buffer
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// Represents a region in a source buffer (start to end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position (one past the last byte)
    pub end: Position,
    /// Buffer the span points into
    pub buffer_id: BufferId,
}

impl Span {
    pub fn new(start: Position, end: Position, buffer_id: BufferId) -> Self {
        Self { start, end, buffer_id }
    }

    /// Creates an empty span at a single position
    pub fn point(pos: Position, buffer_id: BufferId) -> Self {
        Self {
            start: pos,
            end: pos,
            buffer_id,
        }
    }

    /// Returns the length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Checks if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range covered by the span
    pub fn range(&self) -> Range<usize> {
        self.start.offset..self.end.offset.max(self.start.offset)
    }
}

/// Trait for types that have a location in the source
pub trait Spanned {
    fn span(&self) -> Span;
}
