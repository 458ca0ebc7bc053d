//! End-to-end tests for the Kaleidoscope front end
//!
//! Sources are registered with a [`SourceManager`], lexed through
//! [`tokenize_buffer`] and the resulting diagnostics are rendered the way a
//! driver would print them.

use kaleidoscope_error::{DiagnosticRenderer, Diagnostics, SourceManager};
use kaleidoscope_lexer::{tokenize_buffer, Token};

/// Installs a log subscriber honouring `RUST_LOG`; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One-line dump of every token, e.g. `kw_def "def"@0`
pub fn dump(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Renders diagnostics without color codes
pub fn render_plain(sources: &SourceManager, diagnostics: &Diagnostics) -> String {
    let renderer = DiagnosticRenderer::new(sources).without_colors();
    diagnostics
        .iter()
        .map(|d| renderer.render(d))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lexes `text` as a buffer called `name`, returning the token dump and the
/// rendered diagnostics
pub fn lex_and_render(name: &str, text: &str) -> (Vec<String>, String) {
    init_tracing();

    let mut sources = SourceManager::new();
    let id = sources.add_buffer(name, text);
    match tokenize_buffer(&sources, id) {
        Ok((tokens, diagnostics)) => (dump(&tokens), render_plain(&sources, &diagnostics)),
        Err(err) => panic!("buffer {id} was just registered: {err}"),
    }
}

#[cfg(test)]
mod stream_tests {
    use super::*;
    use kaleidoscope_error::RawDiagnostic;
    use kaleidoscope_lexer::{Lexer, TokenKind};
    use pretty_assertions::assert_eq;

    // =========================================
    // Whole programs
    // =========================================

    #[test]
    fn test_program_dump() {
        let (tokens, rendered) = lex_and_render(
            "fib.k",
            "# Compute the x'th fibonacci number.\n\
             def fib(x)\n\
             \x20 if x < 3 then\n\
             \x20   1\n\
             \x20 else\n\
             \x20   fib(x-1)+fib(x-2)\n",
        );

        assert_eq!(
            tokens,
            vec![
                "kw_def \"def\"@37",
                "identifier \"fib\"@41",
                "l_paren \"(\"@44",
                "identifier \"x\"@45",
                "r_paren \")\"@46",
                "identifier \"if\"@50",
                "identifier \"x\"@53",
                "infix_operator \"<\"@55",
                "floating_literal \"3\"@57",
                "identifier \"then\"@59",
                "floating_literal \"1\"@68",
                "identifier \"else\"@72",
                "identifier \"fib\"@81",
                "l_paren \"(\"@84",
                "identifier \"x\"@85",
                "infix_operator \"-\"@86",
                "floating_literal \"1\"@87",
                "r_paren \")\"@88",
                "infix_operator \"+\"@89",
                "identifier \"fib\"@90",
                "l_paren \"(\"@93",
                "identifier \"x\"@94",
                "infix_operator \"-\"@95",
                "floating_literal \"2\"@96",
                "r_paren \")\"@97",
                "eof \"\"@99",
            ]
        );
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_extern_and_unary_operators() {
        let source = b"extern sin(x);\n-sin(x)!";
        let kinds: Vec<TokenKind> = Lexer::new(source, Vec::<RawDiagnostic>::new())
            .tokenize()
            .iter()
            .map(|t| t.kind())
            .collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::KwExtern,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Unknown,
                TokenKind::PrefixOperator,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::PostfixOperator,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_pull_interface_matches_tokenize() {
        let source = b"def avg(a b) (a + b) / 2 # mean";
        let expected = Lexer::new(source, Vec::<RawDiagnostic>::new()).tokenize();

        let mut lexer = Lexer::new(source, Vec::<RawDiagnostic>::new());
        let mut pulled = Vec::new();
        loop {
            let peeked = lexer.peek();
            let token = lexer.lex();
            assert_eq!(token, peeked);
            pulled.push(token);
            if token.is_eof() {
                break;
            }
        }

        assert_eq!(pulled, expected);
        assert_eq!(lexer.lex(), *expected.last().unwrap());
    }

    #[test]
    fn test_non_utf8_buffer() {
        init_tracing();

        let mut sources = SourceManager::new();
        let id = sources.add_buffer("bytes.k", b"123!=\x80");
        let (tokens, diagnostics) = tokenize_buffer(&sources, id).unwrap();

        assert_eq!(
            dump(&tokens),
            vec![
                "floating_literal \"123\"@0",
                "infix_operator \"!=\"@3",
                "unknown \"\\x80\"@5",
                "eof \"\"@6",
            ]
        );
        assert_eq!(diagnostics.len(), 1);

        let rendered = render_plain(&sources, &diagnostics);
        assert!(rendered.starts_with("error: unexpected token\n"));
        assert!(rendered.contains(" --> bytes.k:1:6\n"));
    }
}


#[cfg(test)]
mod file_tests {
    use super::*;
    use kaleidoscope_error::SourceError;
    use std::io::Write;

    #[test]
    fn test_lex_file_from_disk() {
        init_tracing();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"def twice(x) x+x\n").unwrap();

        let mut sources = SourceManager::new();
        let id = sources.add_file(file.path()).unwrap();
        assert_eq!(sources.find_buffer(&file.path().display().to_string()), Some(id));

        let (tokens, diagnostics) = tokenize_buffer(&sources, id).unwrap();
        assert_eq!(tokens.len(), 9);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.k");

        let mut sources = SourceManager::new();
        let err = sources.add_file(&missing).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("nope.k"));
        assert!(sources.is_empty());
    }
}
