//! Byte cursor over an immutable source buffer
//!
//! The cursor only moves forward. The end of the buffer is a bounds check,
//! never a sentinel byte, so zero bytes inside the buffer are plain data.

/// Scan position within a source buffer
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the current byte without advancing
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `n` positions ahead without advancing
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.source.get(self.pos + n).copied()
    }

    /// Byte immediately before `index`; `None` at the buffer start
    pub fn byte_before(&self, index: usize) -> Option<u8> {
        index.checked_sub(1).and_then(|i| self.source.get(i).copied())
    }

    /// Byte at an absolute offset
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.get(index).copied()
    }

    /// Advances by one byte; does nothing at the end
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consumes bytes while `pred` holds
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Moves to an absolute offset at or after the current one
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor only moves forward");
        debug_assert!(pos <= self.source.len(), "cursor moved out of range");
        self.pos = pos.min(self.source.len());
    }

    /// Advances to the next `\n` or `\r` without consuming it, or to the end
    pub fn skip_to_end_of_line(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.remaining()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Bytes from `start` up to the current position
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.pos]
    }

    /// Bytes from the current position to the end
    pub fn remaining(&self) -> &'src [u8] {
        &self.source[self.pos..]
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }
}
