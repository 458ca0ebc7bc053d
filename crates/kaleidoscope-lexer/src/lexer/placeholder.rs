//! Editor placeholder recovery
//!
//! Editors insert `<#name#>` markers for arguments still to be filled in.
//! One left in a source file is always an error, but it is lexed as a single
//! identifier so the rest of the line still makes sense to the parser.

use kaleidoscope_error::{DiagnosticSink, Level};

use super::Lexer;
use crate::token::TokenKind;

/// Finds the offset just past the `#>` closing the placeholder opened at
/// `start`.
///
/// The search gives up at a line feed or at another `<#`, so it never looks
/// past the current line.
fn find_placeholder_end(source: &[u8], start: usize) -> Option<usize> {
    let body = source.get(start + 2..)?;

    for (i, pair) in body.windows(2).enumerate() {
        match pair {
            [b'\n', _] | [b'<', b'#'] => return None,
            [b'#', b'>'] => return Some(start + 2 + i + 2),
            _ => {}
        }
    }

    None
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// Lexes `<#...#>` as an identifier, or the `<` as an operator when the
    /// placeholder is not closed on the same line.
    pub(super) fn lex_editor_placeholder(&mut self, start: usize) {
        debug_assert_eq!(self.cursor().current(), Some(b'<'));
        debug_assert_eq!(self.cursor().peek(1), Some(b'#'));

        match find_placeholder_end(self.cursor().source(), start) {
            Some(end) => {
                self.diagnose(start, Level::Error, "editor placeholder in source file");
                self.cursor_mut().seek(end);
                self.form_token(TokenKind::Identifier, start);
            }
            None => self.lex_operator(start),
        }
    }
}
