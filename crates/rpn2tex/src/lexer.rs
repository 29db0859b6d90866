//! Lexer implementation.

use crate::error::LexError;
use logos::Logos;
use std::fmt;

/// The kind of a scanned token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "NUMBER",
            Self::Plus => "`+'",
            Self::Minus => "`-'",
            Self::Star => "`*'",
            Self::Slash => "`/'",
            Self::EndOfInput => "$eoi",
        })
    }
}

/// A token together with its source text and its 1-based position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub lexeme: &'source str,
    pub line: usize,
    pub column: usize,
}

// A leading `-` belongs to the number only when a digit follows it
// immediately; otherwise the single-character `-` rule wins.
#[derive(Debug, Copy, Clone, Logos, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[regex(r"-?[0-9]+(\.[0-9]*)?")]
    Number,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => Self::Number,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
        }
    }
}

/// Line/column bookkeeping over the source text.
#[derive(Debug)]
struct Cursor<'source> {
    source: &'source str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'source> Cursor<'source> {
    fn new(source: &'source str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move forward to the byte offset `offset`, which must not precede the
    /// current one.
    fn advance_to(&mut self, offset: usize) {
        for ch in self.source[self.offset..offset].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
    }
}

/// Scan `source` into a token sequence terminated by `EndOfInput`.
///
/// The first unrecognized character aborts the scan.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let span = tracing::trace_span!("tokenize");
    let _entered = span.enter();

    let mut cursor = Cursor::new(source);
    let mut tokens = vec![];

    for (res, range) in Lexeme::lexer(source).spanned() {
        cursor.advance_to(range.start);
        let kind = match res {
            Ok(lexeme) => TokenKind::from(lexeme),
            Err(()) => {
                let ch = source[range.start..].chars().next().unwrap_or('\u{FFFD}');
                tracing::trace!("unexpected character {:?}", ch);
                return Err(LexError::unexpected_character(
                    ch,
                    cursor.line,
                    cursor.column,
                ));
            }
        };
        let token = Token {
            kind,
            lexeme: &source[range],
            line: cursor.line,
            column: cursor.column,
        };
        tracing::trace!(
            "scan {} {:?} at {}:{}",
            token.kind,
            token.lexeme,
            token.line,
            token.column
        );
        tokens.push(token);
    }

    cursor.advance_to(source.len());
    tokens.push(Token {
        kind: TokenKind::EndOfInput,
        lexeme: "",
        line: cursor.line,
        column: cursor.column,
    });

    tracing::debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}
