//! Kinds of errors raised while building, simplifying or differentiating expressions.

use ariadne::Fmt;
use dx_attrs::ErrorKind;
use dx_error::EXPR;

/// A string could not be read as a number or a named constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", literal),
    labels = ["this literal"],
    help = format!("numbers are written as decimals such as {}, or as one of the constants {}", "2.5".fg(EXPR), "e, pi".fg(EXPR)),
)]
pub struct InvalidNumber {
    /// The text that failed to parse.
    pub literal: String,
}

/// An operator name outside the fixed set of unary and binary operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("no such operator: `{}`", operator),
    labels = ["this operator"],
)]
pub struct InvalidOperator {
    /// The name of the operator.
    pub operator: String,
}

/// A constant expression was divided by the constant zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = [format!("this {} divides by zero", "expression".fg(EXPR))],
)]
pub struct DivisionByZero;

/// The expression has a form that cannot be differentiated symbolically.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", expr),
    labels = ["this expression"],
    help = "powers with both a variable base and a variable exponent are not supported",
)]
pub struct UnsupportedExpression {
    /// The rendering of the offending sub-expression.
    pub expr: String,
}

/// A numeric operation was given an argument outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("math domain error: cannot compute {} of `{}`", operation, value),
    labels = [format!("this {} has no finite value", "expression".fg(EXPR))],
)]
pub struct MathDomain {
    /// The operation that failed, such as `ln` or `power`.
    pub operation: &'static str,

    /// The argument of the operation.
    pub value: String,
}
