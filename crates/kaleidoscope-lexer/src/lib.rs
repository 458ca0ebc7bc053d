//! kaleidoscope-lexer - Lexer for the Kaleidoscope language
//!
//! This crate turns a source buffer into a stream of classified tokens with
//! one token of lookahead.
//!
//! # Features
//!
//! - Byte-oriented scanning; buffers need not be valid UTF-8
//! - `def` and `extern` keywords
//! - Operator fixity (prefix, postfix, infix) inferred from surrounding whitespace
//! - Recovery from editor placeholders such as `<#expr#>`
//! - Never fails: problems go to a [`DiagnosticSink`] and the stream still ends in eof
//!
//! # Example
//!
//! ```rust
//! use kaleidoscope_error::RawDiagnostic;
//! use kaleidoscope_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(b"def neg(x) -x", Vec::<RawDiagnostic>::new());
//! assert_eq!(lexer.peek().kind(), TokenKind::KwDef);
//!
//! for token in lexer.tokenize() {
//!     println!("{token}");
//! }
//! assert!(lexer.into_sink().is_empty());
//! ```

pub mod cursor;
pub mod lexer;
pub mod token;

pub use kaleidoscope_error::DiagnosticSink;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, KEYWORDS};

use kaleidoscope_error::{BufferDiagnostics, BufferId, Diagnostics, SourceError, SourceManager};

/// Tokenizes a registered buffer, resolving every report against it
pub fn tokenize_buffer(
    sources: &SourceManager,
    buffer_id: BufferId,
) -> Result<(Vec<Token<'_>>, Diagnostics), SourceError> {
    let sink = BufferDiagnostics::new(sources, buffer_id)?;
    let mut lexer = Lexer::for_buffer(sources, buffer_id, sink)?;
    let tokens = lexer.tokenize();
    tracing::debug!(buffer = %buffer_id, tokens = tokens.len(), "tokenized buffer");
    Ok((tokens, lexer.into_sink().into_diagnostics()))
}
