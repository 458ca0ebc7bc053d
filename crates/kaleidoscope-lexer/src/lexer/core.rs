//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its one-token-lookahead pull
//! interface and the dispatch from the first byte of a token to the
//! classifier that scans it.

use kaleidoscope_error::{BufferId, DiagnosticSink, Level, SourceError, SourceManager};

use super::identifier::is_identifier_start;
use super::number::is_number_character;
use super::operator::is_operator_character;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Kaleidoscope language.
///
/// The constructor scans the first token eagerly; afterwards the cursor only
/// moves when [`Lexer::lex`] hands out the buffered token. Problems in the
/// input never stop the scan: they are reported to the sink and the stream
/// still ends in [`TokenKind::Eof`].
pub struct Lexer<'src, S> {
    cursor: Cursor<'src>,
    sink: S,
    next_token: Token<'src>,
}

impl<'src, S: DiagnosticSink> Lexer<'src, S> {
    /// Creates a lexer that scans the whole of `source`
    pub fn new(source: &'src [u8], sink: S) -> Self {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            sink,
            next_token: Token::new(TokenKind::Eof, &source[..0], 0),
        };
        lexer.lex_impl();
        lexer
    }

    /// Creates a lexer over a buffer registered with `sources`
    pub fn for_buffer(
        sources: &'src SourceManager,
        buffer_id: BufferId,
        sink: S,
    ) -> Result<Self, SourceError> {
        let buffer = sources.buffer(buffer_id)?;
        Ok(Self::new(buffer.bytes(), sink))
    }

    /// Returns the buffered token and scans the one after it.
    ///
    /// Once the end of file is reached every call returns the same
    /// zero-length eof token.
    pub fn lex(&mut self) -> Token<'src> {
        let result = self.next_token;
        if result.is_not(TokenKind::Eof) {
            self.lex_impl();
        }
        result
    }

    /// Returns the next token without advancing
    pub fn peek(&self) -> Token<'src> {
        self.next_token
    }

    /// Lexes the rest of the buffer, including the final eof token
    pub fn tokenize(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.lex();
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Byte offset the scan has reached
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn lex_impl(&mut self) {
        self.skip_trivia();

        let start = self.cursor.position();
        let Some(first) = self.cursor.current() else {
            self.form_token(TokenKind::Eof, start);
            return;
        };

        match first {
            b'(' => {
                self.cursor.advance();
                self.form_token(TokenKind::LParen, start);
            }
            b')' => {
                self.cursor.advance();
                self.form_token(TokenKind::RParen, start);
            }
            b'<' if self.cursor.peek(1) == Some(b'#') => self.lex_editor_placeholder(start),
            b if is_identifier_start(b) => self.lex_identifier(start),
            b if is_number_character(b) => self.lex_number(start),
            b if is_operator_character(b) => self.lex_operator(start),
            _ => {
                self.cursor.advance();
                self.form_token(TokenKind::Unknown, start);
            }
        }
    }

    /// Stores the bytes from `start` to the cursor as the next token
    pub(super) fn form_token(&mut self, kind: TokenKind, start: usize) {
        let text = self.cursor.slice_from(start);
        tracing::trace!(kind = %kind, start, len = text.len(), "formed token");
        self.next_token = Token::new(kind, text, start);
    }

    pub(super) fn diagnose(&mut self, offset: usize, level: Level, message: &str) {
        tracing::debug!(offset, level = %level, reason = message, "lexer diagnostic");
        self.sink.report(offset, level, message);
    }

    pub(super) fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub(super) fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::testing::{kinds, lex_all};
    use kaleidoscope_error::RawDiagnostic;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skip_comments() {
        assert_eq!(
            kinds(b"# Comment\n(1)"),
            vec![
                TokenKind::LParen,
                TokenKind::FloatingLiteral,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_eof_token_length_is_zero() {
        let (tokens, _) = lex_all(b"meow");
        assert_eq!(
            tokens.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(tokens[1].len(), 0);
        assert_eq!(tokens[1].start(), 4);
    }

    #[test]
    fn test_empty_source() {
        let (tokens, diagnostics) = lex_all(b"");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_definition() {
        let (tokens, diagnostics) = lex_all(b"def add(a b) a+b");
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.kind(), t.as_str().unwrap_or_default()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (TokenKind::KwDef, "def"),
                (TokenKind::Identifier, "add"),
                (TokenKind::LParen, "("),
                (TokenKind::Identifier, "a"),
                (TokenKind::Identifier, "b"),
                (TokenKind::RParen, ")"),
                (TokenKind::Identifier, "a"),
                (TokenKind::InfixOperator, "+"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Eof, ""),
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_byte_is_reported_once() {
        let (tokens, diagnostics) = lex_all(b"123!=\x80");

        assert_eq!(
            tokens.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            vec![
                TokenKind::FloatingLiteral,
                TokenKind::InfixOperator,
                TokenKind::Unknown,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].text(), b"\x80");
        assert_eq!(
            diagnostics,
            vec![RawDiagnostic {
                offset: 5,
                level: Level::Error,
                message: "unexpected token".to_string(),
            }]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new(b"x", Vec::<RawDiagnostic>::new());
        assert_eq!(lexer.lex().kind(), TokenKind::Identifier);

        let eof = lexer.lex();
        assert!(eof.is_eof());
        for _ in 0..3 {
            let again = lexer.lex();
            assert_eq!(again, eof);
            assert_eq!(again.len(), 0);
        }
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut lexer = Lexer::new(b"extern cos", Vec::<RawDiagnostic>::new());
        let position = lexer.position();

        let peeked = lexer.peek();
        assert_eq!(lexer.peek(), peeked);
        assert_eq!(lexer.peek(), peeked);
        assert_eq!(lexer.position(), position);

        assert_eq!(lexer.lex(), peeked);
        assert_eq!(peeked.kind(), TokenKind::KwExtern);
        assert_eq!(lexer.peek().as_str(), Some("cos"));
    }

    #[test]
    fn test_constructor_primes_lookahead() {
        let lexer = Lexer::new(b"  (", Vec::<RawDiagnostic>::new());
        assert_eq!(lexer.peek().kind(), TokenKind::LParen);
        assert_eq!(lexer.peek().start(), 2);
        assert_eq!(lexer.position(), 3);
    }

    #[test]
    fn test_for_buffer() {
        let mut sources = SourceManager::new();
        let id = sources.add_buffer("main.k", "extern sin(x)");

        let mut lexer = Lexer::for_buffer(&sources, id, Vec::<RawDiagnostic>::new()).unwrap();
        assert_eq!(lexer.lex().kind(), TokenKind::KwExtern);

        let missing = Lexer::for_buffer(&sources, BufferId::new(7), Vec::<RawDiagnostic>::new());
        assert!(matches!(missing, Err(SourceError::UnknownBuffer(_))));
    }

    #[test]
    fn test_lent_sink_stays_with_caller() {
        let mut reports: Vec<RawDiagnostic> = Vec::new();
        {
            let mut lexer = Lexer::new(b"a ` b", &mut reports);
            lexer.tokenize();
        }
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].offset, 2);
    }
}
