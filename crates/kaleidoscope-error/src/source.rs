//! Source manager - owns the buffers being compiled
//!
//! Buffers are immutable byte sequences registered once and addressed by a
//! [`BufferId`] afterwards. Nothing here requires the bytes to be UTF-8.

use crate::error::SourceError;
use crate::span::{Position, Span};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Identifies a buffer registered with a [`SourceManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BufferId(u32);

impl BufferId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single registered buffer
#[derive(Debug)]
pub struct SourceBuffer {
    name: String,
    bytes: Box<[u8]>,
    /// Offset of each line (for fast lookup)
    line_starts: Vec<usize>,
}

impl SourceBuffer {
    pub fn new(name: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        let bytes: Box<[u8]> = Box::from(bytes.as_ref());
        let line_starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', &bytes).map(|i| i + 1))
            .collect();

        Self {
            name: name.into(),
            bytes,
            line_starts,
        }
    }

    /// Buffer identifier (usually the file path)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolves a byte offset to a line/column position.
    ///
    /// Offsets past the end are clamped to the end of the buffer.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.bytes.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let column = offset - self.line_starts[line_idx] + 1;

        Position::new(line_idx as u32 + 1, column as u32, offset)
    }

    /// Returns the text of a line (1-indexed) without its line terminator
    pub fn line(&self, line: u32) -> Option<&[u8]> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.bytes.len());

        let text = &self.bytes[start..end];
        Some(text.strip_suffix(b"\r").unwrap_or(text))
    }
}

/// Registry of every buffer taking part in a compilation
#[derive(Debug, Default)]
pub struct SourceManager {
    buffers: Vec<SourceBuffer>,
    /// Associates buffer identifiers to buffer IDs
    ids_by_name: HashMap<String, BufferId>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `bytes` into a new buffer and returns its ID
    pub fn add_buffer(&mut self, name: impl Into<String>, bytes: impl AsRef<[u8]>) -> BufferId {
        let id = BufferId::new(self.buffers.len() as u32);
        let buffer = SourceBuffer::new(name, bytes);

        tracing::debug!(
            buffer = %id,
            buffer_name = buffer.name(),
            bytes = buffer.len(),
            "registered source buffer"
        );

        self.ids_by_name.entry(buffer.name.clone()).or_insert(id);
        self.buffers.push(buffer);
        id
    }

    /// Reads a file from disk and registers it under its path
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<BufferId, SourceError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.add_buffer(path.display().to_string(), bytes))
    }

    pub fn buffer(&self, id: BufferId) -> Result<&SourceBuffer, SourceError> {
        self.buffers
            .get(id.as_u32() as usize)
            .ok_or(SourceError::UnknownBuffer(id))
    }

    /// Looks up the first buffer registered under `name`
    pub fn find_buffer(&self, name: &str) -> Option<BufferId> {
        self.ids_by_name.get(name).copied()
    }

    /// Returns a span covering the entire buffer.
    ///
    /// The start does not necessarily point at the first token; it may sit on
    /// whitespace or a comment.
    pub fn range_for_buffer(&self, id: BufferId) -> Result<Span, SourceError> {
        let buffer = self.buffer(id)?;
        Ok(Span::new(
            buffer.position_at(0),
            buffer.position_at(buffer.len()),
            id,
        ))
    }

    pub fn position_for_offset(&self, id: BufferId, offset: usize) -> Result<Position, SourceError> {
        let buffer = self.buffer(id)?;
        if offset > buffer.len() {
            return Err(SourceError::OffsetOutOfRange {
                buffer: id,
                offset,
                len: buffer.len(),
            });
        }
        Ok(buffer.position_at(offset))
    }

    /// Returns the bytes covered by `span`
    pub fn extract_text(&self, span: Span) -> Result<&[u8], SourceError> {
        let buffer = self.buffer(span.buffer_id)?;
        let (start, end) = (span.start.offset, span.end.offset);
        buffer
            .bytes()
            .get(start..end)
            .ok_or(SourceError::SpanOutOfRange {
                buffer: span.buffer_id,
                start,
                end,
                len: buffer.len(),
            })
    }

    /// Number of registered buffers
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
