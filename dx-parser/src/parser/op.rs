//! The operator precedence model used while parsing.

use dx_compute::{BinaryOp, UnaryOp};
use std::ops::Range;

/// The precedence of a binary operator. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 1,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 2,

    /// Precedence of exponentiation (`^`).
    Exp = 3,
}

impl Precedence {
    /// Returns the precedence of the binary operator.
    pub fn of(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Term,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Factor,
            BinaryOp::Pow => Precedence::Exp,
        }
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

/// An entry of the parser's operator stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackOp {
    /// Marks the bottom of the stack, or the start of a parenthesized expression. Operators below
    /// a sentinel are never reduced until the sentinel is removed.
    Sentinel,

    /// A unary operator, with the span of its token.
    Unary(UnaryOp, Range<usize>),

    /// A binary operator, with the span of its token.
    Binary(BinaryOp, Range<usize>),
}

impl StackOp {
    /// Returns true if `self`, already on the stack, must be reduced before `incoming` is pushed
    /// on top of it.
    ///
    /// - A binary operator outranks a binary operator of lower or **equal** precedence, so every
    ///   binary operator is left-associative, including `^`.
    /// - A unary operator outranks every binary operator.
    /// - Nothing outranks a unary operator, and the sentinel outranks nothing.
    pub fn outranks(&self, incoming: &StackOp) -> bool {
        match (self, incoming) {
            (StackOp::Binary(top, _), StackOp::Binary(new, _)) => Precedence::of(*top) >= Precedence::of(*new),
            (StackOp::Unary(..), StackOp::Binary(..)) => true,
            (_, StackOp::Unary(..)) => false,
            (StackOp::Sentinel, _) => false,
            (_, StackOp::Sentinel) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(op: BinaryOp) -> StackOp {
        StackOp::Binary(op, 0..1)
    }

    fn unary(op: UnaryOp) -> StackOp {
        StackOp::Unary(op, 0..1)
    }

    #[test]
    fn precedence_order() {
        assert!(Precedence::Exp > Precedence::Factor);
        assert!(Precedence::Factor > Precedence::Term);
        assert_eq!(Precedence::of(BinaryOp::Sub), Precedence::of(BinaryOp::Add));
        assert_eq!(Precedence::of(BinaryOp::Div), Precedence::of(BinaryOp::Mul));
    }

    #[test]
    fn binary_against_binary() {
        assert!(binary(BinaryOp::Mul).outranks(&binary(BinaryOp::Add)));
        assert!(!binary(BinaryOp::Add).outranks(&binary(BinaryOp::Mul)));

        // equal precedence outranks, making every operator left-associative
        assert!(binary(BinaryOp::Sub).outranks(&binary(BinaryOp::Add)));
        assert!(binary(BinaryOp::Pow).outranks(&binary(BinaryOp::Pow)));
    }

    #[test]
    fn unary_and_sentinel() {
        assert!(unary(UnaryOp::Neg).outranks(&binary(BinaryOp::Pow)));
        assert!(unary(UnaryOp::Sin).outranks(&binary(BinaryOp::Add)));
        assert!(!binary(BinaryOp::Pow).outranks(&unary(UnaryOp::Neg)));
        assert!(!unary(UnaryOp::Neg).outranks(&unary(UnaryOp::Neg)));
        assert!(!StackOp::Sentinel.outranks(&binary(BinaryOp::Add)));
        assert!(!StackOp::Sentinel.outranks(&unary(UnaryOp::Neg)));
    }
}
