//! Diagnostic - compiler-style error messages
//!
//! Generates messages with:
//! - Severity
//! - Precise location (`buffer:line:column`)
//! - Source code snippet with an underline

use crate::source::SourceManager;
use crate::span::{Span, Spanned};
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Fatal error - prevents compilation
    Error,
    /// Warning - does not prevent compilation
    Warning,
    /// Note - additional information
    Note,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// Returns the ANSI code for coloring (if terminal supports it)
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
            Level::Note => "\x1b[1;36m",    // Bold Cyan
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label pointing to a specific region of the code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Span of the region
    pub span: Span,
    /// Label message
    pub message: String,
    /// Whether this is the primary or secondary label
    pub primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }
}

impl Spanned for Label {
    fn span(&self) -> Span {
        self.span
    }
}

/// A complete diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Main message
    pub message: String,
    /// Labels pointing to the code
    pub labels: Vec<Label>,
    /// Additional notes
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Level::Note, message)
    }

    /// Adds a primary label
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Adds a secondary label
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Adds a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label, if any
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.primary).map(Spanned::span)
    }
}

/// Renders a diagnostic for display
pub struct DiagnosticRenderer<'a> {
    sources: &'a SourceManager,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(sources: &'a SourceManager) -> Self {
        Self {
            sources,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        // Line 1: error: message
        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };
        let bold = if self.use_colors { "\x1b[1m" } else { "" };
        let blue = if self.use_colors { "\x1b[1;34m" } else { "" };

        output.push_str(color);
        output.push_str(diagnostic.level.as_str());
        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        // Labels with code snippets
        for label in &diagnostic.labels {
            let Ok(buffer) = self.sources.buffer(label.span.buffer_id) else {
                continue;
            };

            // --> buffer:line:column
            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue,
                reset,
                buffer.name(),
                label.span.start.line,
                label.span.start.column
            ));

            let Some(line_bytes) = buffer.line(label.span.start.line) else {
                continue;
            };
            let line_content = String::from_utf8_lossy(line_bytes);
            let line_num = label.span.start.line;
            let padding = " ".repeat(line_num.to_string().len());

            // Empty line with bar
            output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));

            // Line with code
            output.push_str(&format!(
                " {}{}{} |{} {}\n",
                blue, line_num, reset, reset, line_content
            ));

            // Line with underline
            let col_start = label.span.start.column as usize;
            let underline_len = if label.span.start.line == label.span.end.line {
                label.span.end.column.saturating_sub(label.span.start.column).max(1) as usize
            } else {
                line_bytes.len().saturating_sub(col_start.saturating_sub(1)).max(1)
            };

            let spaces = " ".repeat(col_start.saturating_sub(1));
            let underline_char = if label.primary { '^' } else { '-' };
            let underline = underline_char.to_string().repeat(underline_len);
            let label_color = if label.primary { color } else { blue };

            output.push_str(&format!(
                " {} {}|{} {}{}{} {}",
                padding, blue, reset, spaces, label_color, underline, label.message
            ));
            output.push_str(reset);
            output.push('\n');
        }

        // Notes
        for note in &diagnostic.notes {
            output.push_str(&format!("  = {}note{}: {}\n", bold, reset, note));
        }

        output
    }
}
