//! The narrow capability scanners report problems through.
//!
//! A scanner only knows byte offsets into the buffer it walks. Turning an
//! offset into a line/column, attaching the buffer name and rendering are
//! left to whoever implements [`DiagnosticSink`].

use crate::diagnostic::{Diagnostic, Level};
use crate::error::SourceError;
use crate::source::{BufferId, SourceBuffer, SourceManager};
use crate::span::Span;
use crate::Diagnostics;

/// Receives diagnostics as `(offset, severity, message)`
pub trait DiagnosticSink {
    fn report(&mut self, offset: usize, level: Level, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, offset: usize, level: Level, message: &str) {
        (**self).report(offset, level, message);
    }
}

/// A diagnostic exactly as a scanner reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    pub offset: usize,
    pub level: Level,
    pub message: String,
}

impl DiagnosticSink for Vec<RawDiagnostic> {
    fn report(&mut self, offset: usize, level: Level, message: &str) {
        self.push(RawDiagnostic {
            offset,
            level,
            message: message.to_string(),
        });
    }
}

/// Resolves reports against one registered buffer into full diagnostics
#[derive(Debug)]
pub struct BufferDiagnostics<'sm> {
    buffer: &'sm SourceBuffer,
    buffer_id: BufferId,
    diagnostics: Diagnostics,
}

impl<'sm> BufferDiagnostics<'sm> {
    pub fn new(sources: &'sm SourceManager, buffer_id: BufferId) -> Result<Self, SourceError> {
        Ok(Self {
            buffer: sources.buffer(buffer_id)?,
            buffer_id,
            diagnostics: Diagnostics::new(),
        })
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

impl DiagnosticSink for BufferDiagnostics<'_> {
    fn report(&mut self, offset: usize, level: Level, message: &str) {
        let span = Span::point(self.buffer.position_at(offset), self.buffer_id);
        self.diagnostics
            .push(Diagnostic::new(level, message).with_label(span, ""));
    }
}
