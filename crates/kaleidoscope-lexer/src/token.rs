//! Tokens for the Kaleidoscope language
//!
//! Defines all token kinds the lexer can produce and the token value that
//! pairs a kind with the bytes it covers.

use std::fmt;
use std::ops::Range;

/// All token kinds for the Kaleidoscope language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the buffer; always zero-length
    Eof,
    /// Names, and editor placeholders after recovery
    Identifier,
    /// Every numeric literal, with or without a decimal point
    FloatingLiteral,

    // =========================================
    // Keywords
    // =========================================
    /// `def` - function definition
    KwDef,
    /// `extern` - external declaration
    KwExtern,

    // =========================================
    // Punctuation
    // =========================================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equal,

    // =========================================
    // Operators, by fixity
    // =========================================
    PrefixOperator,
    PostfixOperator,
    InfixOperator,

    /// A byte that starts no token
    Unknown,
}

/// Reserved words, in lookup order
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("def", TokenKind::KwDef),
    ("extern", TokenKind::KwExtern),
];

impl TokenKind {
    /// Maps identifier text to its keyword kind, if it is reserved
    pub fn keyword_from_bytes(text: &[u8]) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.as_bytes() == text)
            .map(|&(_, kind)| kind)
    }

    /// The text every token of this kind has, for kinds where it is fixed
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::KwDef => Some("def"),
            TokenKind::KwExtern => Some("extern"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Equal => Some("="),
            _ => None,
        }
    }

    pub fn is_text_determined(self) -> bool {
        self.fixed_text().is_some()
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::KwDef | TokenKind::KwExtern)
    }

    pub fn is_punctuation(self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::RParen | TokenKind::Equal)
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::FloatingLiteral)
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::PrefixOperator | TokenKind::PostfixOperator | TokenKind::InfixOperator
        )
    }

    /// Name used when dumping token streams
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Identifier => "identifier",
            TokenKind::FloatingLiteral => "floating_literal",
            TokenKind::KwDef => "kw_def",
            TokenKind::KwExtern => "kw_extern",
            TokenKind::LParen => "l_paren",
            TokenKind::RParen => "r_paren",
            TokenKind::Equal => "equal",
            TokenKind::PrefixOperator => "prefix_operator",
            TokenKind::PostfixOperator => "postfix_operator",
            TokenKind::InfixOperator => "infix_operator",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token borrowing its text from the source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src [u8],
    /// Byte offset of `text` in the buffer
    start: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src [u8], start: usize) -> Self {
        Self { kind, text, start }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact bytes covered by the token
    pub fn text(&self) -> &'src [u8] {
        self.text
    }

    /// The token text, when it is valid UTF-8
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.text).ok()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Checks if the token is of a specific kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_not(&self, kind: TokenKind) -> bool {
        !self.is(kind)
    }

    pub fn is_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind.is_punctuation()
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Checks if it is end of file
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\"@{}",
            self.kind,
            self.text.escape_ascii(),
            self.start
        )
    }
}
