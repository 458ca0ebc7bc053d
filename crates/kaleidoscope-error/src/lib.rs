//! kaleidoscope-error - Source buffers and diagnostics for Kaleidoscope
//!
//! This crate owns everything the front end needs from its surroundings:
//! the source manager holding immutable buffers, spans into those buffers,
//! diagnostics and their terminal rendering, and the [`DiagnosticSink`]
//! capability scanners report through.
//!
//! # Example
//!
//! ```rust
//! use kaleidoscope_error::{Diagnostic, DiagnosticRenderer, SourceManager};
//!
//! let mut sources = SourceManager::new();
//! let id = sources.add_buffer("example.k", "def f(x) x $ 1");
//!
//! let span = sources.range_for_buffer(id).unwrap();
//! let diagnostic = Diagnostic::error("unexpected token").with_label(span, "in this definition");
//!
//! let renderer = DiagnosticRenderer::new(&sources).without_colors();
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod error;
pub mod sink;
pub mod source;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, Label, Level};
pub use error::SourceError;
pub use sink::{BufferDiagnostics, DiagnosticSink, RawDiagnostic};
pub use source::{BufferId, SourceBuffer, SourceManager};
pub use span::{Position, Span, Spanned};

/// Collection of diagnostics accumulated during compilation
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics
    pub fn render(&self, sources: &SourceManager) -> String {
        let renderer = DiagnosticRenderer::new(sources);
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
