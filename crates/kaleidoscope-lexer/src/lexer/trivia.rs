//! Whitespace and comment skipping

use kaleidoscope_error::{DiagnosticSink, Level};

use super::identifier::is_identifier_start;
use super::number::is_number_character;
use super::operator::is_operator_character;
use super::Lexer;

/// Bytes that may start a token, so trivia stops in front of them
fn starts_token(b: u8) -> bool {
    matches!(b, b'(' | b')')
        || is_identifier_start(b)
        || is_number_character(b)
        || is_operator_character(b)
}

impl<S: DiagnosticSink> Lexer<'_, S> {
    /// Skips whitespace, line breaks, embedded zero bytes and `#` comments.
    ///
    /// A byte that is neither trivia nor a token start is reported and left
    /// in place for the dispatcher.
    pub(super) fn skip_trivia(&mut self) {
        while let Some(b) = self.cursor().current() {
            match b {
                b' ' | b'\t' | b'\n' | 0x0B | 0x0C | 0 => self.cursor_mut().advance(),
                b'\r' => {
                    self.cursor_mut().advance();
                    if self.cursor().current() == Some(b'\n') {
                        self.cursor_mut().advance();
                    }
                }
                b'#' => self.skip_pound_comment(),
                b if starts_token(b) => return,
                _ => {
                    let offset = self.cursor().position();
                    self.diagnose(offset, Level::Error, "unexpected token");
                    return;
                }
            }
        }
    }

    /// Skips a `#` comment, leaving the line break for the next round
    fn skip_pound_comment(&mut self) {
        debug_assert_eq!(self.cursor().current(), Some(b'#'));
        self.cursor_mut().skip_to_end_of_line();
    }
}
