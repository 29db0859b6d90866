//! Error types.

/// An unrecognized character in the source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    pub(crate) fn unexpected_character(ch: char, line: usize, column: usize) -> Self {
        Self::new(format!("Unexpected character '{}'", ch), line, column)
    }
}

/// A token sequence that does not form exactly one expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Any failure of the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("from lexer: {}", _0)]
    Lex(#[from] LexError),

    #[error("from parser: {}", _0)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Self::Lex(e) => &e.message,
            Self::Parse(e) => &e.message,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Self::Lex(e) => e.column,
            Self::Parse(e) => e.column,
        }
    }
}
