//! Syntax definition.

use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The operator as it is written in RPN source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Whether swapping the operands leaves the result unchanged.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The expression tree built by the parser.
///
/// Positions are those of the originating token (the operator token for
/// `Binary`) and only serve diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'source> {
    Number {
        value: &'source str,
        line: usize,
        column: usize,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr<'source>>,
        rhs: Box<Expr<'source>>,
        line: usize,
        column: usize,
    },
}

impl<'source> Expr<'source> {
    pub fn number(value: &'source str, line: usize, column: usize) -> Self {
        Self::Number {
            value,
            line,
            column,
        }
    }

    pub fn binary(op: BinOp, lhs: Self, rhs: Self, line: usize, column: usize) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            line,
            column,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::Binary { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Self::Number { column, .. } | Self::Binary { column, .. } => *column,
        }
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => f.write_str(value),
            Self::Binary { op, lhs, rhs, .. } => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}
