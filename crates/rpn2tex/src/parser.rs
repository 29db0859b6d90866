//! RPN parser.

use crate::{
    ast::{BinOp, Expr},
    error::ParseError,
    lexer::{Token, TokenKind},
};

/// Build the expression tree from a token sequence using an operand stack.
///
/// The sequence is read up to its first `EndOfInput` token; a sequence that
/// stops without one is treated as if it ended there.
pub fn parse<'source, I>(tokens: I) -> Result<Expr<'source>, ParseError>
where
    I: IntoIterator<Item = Token<'source>>,
{
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    let mut stack: Vec<Expr<'source>> = vec![];
    let mut end = (1, 1);

    for token in tokens {
        end = (token.line, token.column);
        let op = match token.kind {
            TokenKind::Number => {
                tracing::trace!("push: {}", token.lexeme);
                stack.push(Expr::number(token.lexeme, token.line, token.column));
                continue;
            }
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            TokenKind::EndOfInput => break,
        };

        // the right operand is the most recently pushed one.
        let (lhs, rhs) = match (stack.pop(), stack.pop()) {
            (Some(rhs), Some(lhs)) => (lhs, rhs),
            _ => {
                return Err(ParseError::new(
                    format!("Operator '{}' requires two operands", op),
                    token.line,
                    token.column,
                ))
            }
        };
        let expr = Expr::binary(op, lhs, rhs, token.line, token.column);
        tracing::trace!("reduce: {}", expr);
        stack.push(expr);
    }

    let (line, column) = end;
    let remaining = stack.len();
    match stack.pop() {
        Some(expr) if stack.is_empty() => {
            tracing::debug!("parsed: {}", expr);
            Ok(expr)
        }
        Some(_) => Err(ParseError::new(
            format!(
                "Invalid RPN: {} values remain on stack (expected 1)",
                remaining
            ),
            line,
            column,
        )),
        None => Err(ParseError::new("Empty expression", line, column)),
    }
}
