//! Errors raised by the source manager

use crate::source::BufferId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures when registering or querying source buffers
#[derive(Debug, Error)]
pub enum SourceError {
    /// The buffer identifier was never handed out by this manager
    #[error("unknown source buffer {0}")]
    UnknownBuffer(BufferId),

    /// A byte offset lies past the end of its buffer
    #[error("offset {offset} is out of range for buffer {buffer} of {len} bytes")]
    OffsetOutOfRange {
        buffer: BufferId,
        offset: usize,
        len: usize,
    },

    /// A span does not fit inside its buffer
    #[error("span {start}..{end} is out of range for buffer {buffer} of {len} bytes")]
    SpanOutOfRange {
        buffer: BufferId,
        start: usize,
        end: usize,
        len: usize,
    },

    /// Reading a source file failed
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
