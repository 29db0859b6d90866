//! Conversion of Reverse Polish Notation expressions into LaTeX math mode.
//!
//! The pipeline is split into three stages, each consuming the output of the
//! previous one: [`tokenize`] scans the source text, [`parse`] builds the
//! expression tree with an operand stack, and [`render`] emits the LaTeX
//! string with the minimal set of parentheses.

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod latex;
pub mod lexer;
pub mod parser;
pub mod util;

pub use crate::{
    ast::{BinOp, Expr},
    error::{Error, LexError, ParseError},
    latex::render,
    lexer::{tokenize, Token, TokenKind},
    parser::parse,
};

/// Run the whole pipeline on `source` and return the rendered LaTeX string.
pub fn convert(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(tokens)?;
    Ok(render(&expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_number() {
        assert_eq!(convert("5").unwrap(), "$5$");
        assert_eq!(convert("3.14").unwrap(), "$3.14$");
    }

    #[test]
    fn convert_reports_lexer_errors() {
        let err = convert("5 @").unwrap_err();
        assert!(matches!(err, Error::Lex(..)));
        assert_eq!(err.message(), "Unexpected character '@'");
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[test]
    fn convert_reports_parser_errors() {
        let err = convert("10 /").unwrap_err();
        assert!(matches!(err, Error::Parse(..)));
        assert_eq!(err.message(), "Operator '/' requires two operands");
    }
}
