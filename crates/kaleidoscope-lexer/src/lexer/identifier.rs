//! Identifier and keyword lexing

use kaleidoscope_error::DiagnosticSink;

use super::Lexer;
use crate::token::TokenKind;

/// Checks if a byte can start an identifier
pub fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier.
///
/// Underscore only starts identifiers: `_a_b` lexes as `_a` followed by `_b`.
pub fn is_identifier_continuation(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// Lexes an identifier or a keyword
    pub(super) fn lex_identifier(&mut self, start: usize) {
        self.cursor_mut().advance();
        self.cursor_mut().eat_while(is_identifier_continuation);

        let text = self.cursor().slice_from(start);
        let kind = TokenKind::keyword_from_bytes(text).unwrap_or(TokenKind::Identifier);
        self.form_token(kind, start);
    }
}
