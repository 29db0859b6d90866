//! LaTeX code generation.

use crate::{
    ast::{BinOp, Expr},
    util::display_fn,
};
use std::fmt;

fn precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Add | BinOp::Sub => 1,
        BinOp::Mul | BinOp::Div => 2,
    }
}

fn latex_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => r"\times",
        BinOp::Div => r"\div",
    }
}

/// Whether `child`, appearing as an operand of an operator with precedence
/// `parent`, has to be wrapped in parentheses.
///
/// Lower-precedence subtrees are always grouped. At equal precedence only a
/// non-commutative operator on the right side needs grouping, since every
/// operator is left-associative.
fn needs_parens(child: &Expr<'_>, parent: u8, is_right: bool) -> bool {
    let op = match child {
        Expr::Number { .. } => return false,
        Expr::Binary { op, .. } => *op,
    };
    let prec = precedence(op);
    prec < parent || (prec == parent && is_right && !op.is_commutative())
}

fn visit(expr: &Expr<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Number { value, .. } => f.write_str(value),
        Expr::Binary { op, lhs, rhs, .. } => {
            let prec = precedence(*op);
            operand(lhs, needs_parens(lhs, prec, false), f)?;
            write!(f, " {} ", latex_symbol(*op))?;
            operand(rhs, needs_parens(rhs, prec, true), f)
        }
    }
}

fn operand(expr: &Expr<'_>, parens: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if parens {
        f.write_str("( ")?;
        visit(expr, f)?;
        f.write_str(" )")
    } else {
        visit(expr, f)
    }
}

/// Lazily render `expr` in math mode.
pub fn display<'a>(expr: &'a Expr<'a>) -> impl fmt::Display + 'a {
    display_fn(move |f| {
        f.write_str("$")?;
        visit(expr, f)?;
        f.write_str("$")
    })
}

/// Render `expr` as a LaTeX math-mode string.
pub fn render(expr: &Expr<'_>) -> String {
    let span = tracing::trace_span!("render");
    let _entered = span.enter();
    display(expr).to_string()
}
