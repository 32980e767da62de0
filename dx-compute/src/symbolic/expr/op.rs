use dx_error::Error;
use std::{fmt, str::FromStr};
use crate::error::InvalidOperator;

/// The unary operators: negation and the supported functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Neg,
    Sqrt,

    /// The natural logarithm.
    Log,
    Log10,
    Exp,
    Sin,
    Cos,
    Tan,
    Sec,
    Cosec,
    Cot,
}

impl UnaryOp {
    /// Every unary operator.
    pub const ALL: [UnaryOp; 11] = [
        UnaryOp::Neg,
        UnaryOp::Sqrt,
        UnaryOp::Log,
        UnaryOp::Log10,
        UnaryOp::Exp,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Sec,
        UnaryOp::Cosec,
        UnaryOp::Cot,
    ];

    /// The name of the operator as it is written in an expression. Negation is written `-`.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Log => "log",
            UnaryOp::Log10 => "log10",
            UnaryOp::Exp => "exp",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Sec => "sec",
            UnaryOp::Cosec => "cosec",
            UnaryOp::Cot => "cot",
        }
    }
}

impl FromStr for UnaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::unspanned(InvalidOperator { operator: s.to_string() }))
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,

    /// Exponentiation, written `^` (or `**` in the input).
    Pow,
}

impl BinaryOp {
    /// Every binary operator.
    pub const ALL: [BinaryOp; 5] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Pow];

    /// The symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Returns true if the order of the operands does not matter.
    pub fn is_commutative(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Mul)
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::unspanned(InvalidOperator { operator: s.to_string() }))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip() {
        for op in UnaryOp::ALL {
            assert_eq!(op.name().parse::<UnaryOp>().unwrap(), op);
        }
        for op in BinaryOp::ALL {
            assert_eq!(op.symbol().parse::<BinaryOp>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_operators() {
        let err = "tanh".parse::<UnaryOp>().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().operator, "tanh");
        assert!("%".parse::<BinaryOp>().unwrap_err().is::<InvalidOperator>());
        assert!("**".parse::<BinaryOp>().unwrap_err().is::<InvalidOperator>());
    }
}
