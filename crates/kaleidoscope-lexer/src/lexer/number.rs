//! Numeric literal lexing

use kaleidoscope_error::DiagnosticSink;

use super::Lexer;
use crate::token::TokenKind;

/// Checks if a byte can appear in a numeric literal
pub fn is_number_character(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// Lexes a run of digits containing at most one `.`.
    ///
    /// Every literal is a floating literal; a second `.` starts the next one.
    pub(super) fn lex_number(&mut self, start: usize) {
        let mut seen_dot = false;
        self.cursor_mut().eat_while(|b| match b {
            b'0'..=b'9' => true,
            b'.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        });

        self.form_token(TokenKind::FloatingLiteral, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::testing::{first, lex_all};
    use pretty_assertions::assert_eq;

    fn texts(source: &[u8]) -> Vec<String> {
        let (tokens, _) = lex_all(source);
        tokens
            .iter()
            .map(|t| t.as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_integers_are_floating() {
        let token = first(b"42");
        assert_eq!(token.kind(), TokenKind::FloatingLiteral);
        assert_eq!(token.as_str(), Some("42"));
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(texts(b"3.14 .5 7."), vec!["3.14", ".5", "7.", ""]);
    }

    #[test]
    fn test_second_dot_starts_new_literal() {
        assert_eq!(texts(b"1.2.3"), vec!["1.2", ".3", ""]);
        assert_eq!(texts(b"..1"), vec![".", ".1", ""]);
    }

    #[test]
    fn test_no_exponent_or_sign() {
        let (tokens, _) = lex_all(b"1e5");
        assert_eq!(tokens[0].as_str(), Some("1"));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].as_str(), Some("e5"));
    }

    #[test]
    fn test_number_then_identifier() {
        let (tokens, _) = lex_all(b"2x");
        assert_eq!(tokens[0].kind(), TokenKind::FloatingLiteral);
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }
}
