//! Operator lexing and fixity classification
//!
//! An operator run gets its fixity from what touches its two edges:
//!
//! | left edge | right edge | fixity  |
//! |-----------|------------|---------|
//! | bound     | bound      | infix   |
//! | unbound   | unbound    | infix   |
//! | bound     | unbound    | postfix |
//! | unbound   | bound      | prefix  |
//!
//! So `a+b` and `a + b` are both infix, `-a` is prefix and `a!` is postfix.

use kaleidoscope_error::DiagnosticSink;

use super::Lexer;
use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Checks if a byte belongs to the operator character set
pub fn is_operator_character(b: u8) -> bool {
    matches!(
        b,
        b'%' | b'!' | b'=' | b'<' | b'>' | b'-' | b'+' | b'*' | b'&' | b'|' | b'/'
    )
}

/// Whether the operator starting at `start` touches something on its left
pub fn is_left_bound(cursor: &Cursor<'_>, start: usize) -> bool {
    let Some(previous) = cursor.byte_before(start) else {
        return false;
    };
    !matches!(previous, b' ' | b'\r' | b'\n' | b'\t' | b'(' | 0)
}

/// Whether the operator ending before `end` touches something on its right.
///
/// A following comment counts as whitespace.
pub fn is_right_bound(cursor: &Cursor<'_>, end: usize) -> bool {
    let Some(next) = cursor.byte_at(end) else {
        return false;
    };
    !matches!(next, b' ' | b'\r' | b'\n' | b'\t' | b')' | 0 | b'#')
}

/// Maps the two edge tests to an operator kind
pub fn classify_operator(left_bound: bool, right_bound: bool) -> TokenKind {
    if left_bound == right_bound {
        TokenKind::InfixOperator
    } else if left_bound {
        TokenKind::PostfixOperator
    } else {
        TokenKind::PrefixOperator
    }
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// Lexes a maximal run of operator characters starting at `start`
    pub(super) fn lex_operator(&mut self, start: usize) {
        self.cursor_mut().eat_while(is_operator_character);

        let cursor = self.cursor();
        let end = cursor.position();
        let kind = classify_operator(is_left_bound(cursor, start), is_right_bound(cursor, end));
        self.form_token(kind, start);
    }
}
