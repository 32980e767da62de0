//! Derivatives of the unary operators.

use dx_error::Error;
use crate::consts::{LOG10_E, ONE_HALF};
use crate::symbolic::expr::{BinaryOp, Expr, Unary, UnaryOp};

/// Returns the derivative of `op(u)` with respect to `u`, where `unary` is the node `op(u)`.
///
/// The caller applies the chain rule by multiplying the result with the derivative of `u`.
pub(super) fn outer_derivative(unary: &Unary) -> Result<Expr, Error> {
    let node = || Expr::Unary(unary.clone());
    let u = || unary.operand().clone();

    Ok(match unary.op() {
        // -u -> -1
        UnaryOp::Neg => Expr::constant(-1),
        // sqrt(u) -> (1/2) / sqrt(u)
        UnaryOp::Sqrt => Expr::binary(BinaryOp::Div, Expr::Constant(ONE_HALF.clone()), node())?,
        // log(u) -> 1 / u
        UnaryOp::Log => Expr::binary(BinaryOp::Div, Expr::constant(1), u())?,
        // log10(u) -> log10(e) / u
        UnaryOp::Log10 => Expr::binary(BinaryOp::Div, Expr::Constant(LOG10_E.clone()), u())?,
        // exp(u) -> exp(u)
        UnaryOp::Exp => node(),
        // sin(u) -> cos(u)
        UnaryOp::Sin => Expr::unary(UnaryOp::Cos, u()),
        // cos(u) -> -sin(u)
        UnaryOp::Cos => Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Sin, u())),
        // tan(u) -> sec(u)^2
        UnaryOp::Tan => Expr::binary(BinaryOp::Pow, Expr::unary(UnaryOp::Sec, u()), Expr::constant(2))?,
        // sec(u) -> sec(u) * tan(u)
        UnaryOp::Sec => Expr::binary(BinaryOp::Mul, node(), Expr::unary(UnaryOp::Tan, u()))?,
        // cosec(u) -> -(cosec(u) * cot(u))
        UnaryOp::Cosec => Expr::unary(
            UnaryOp::Neg,
            Expr::binary(BinaryOp::Mul, node(), Expr::unary(UnaryOp::Cot, u()))?,
        ),
        // cot(u) -> -(cosec(u)^2)
        UnaryOp::Cot => Expr::unary(
            UnaryOp::Neg,
            Expr::binary(BinaryOp::Pow, Expr::unary(UnaryOp::Cosec, u()), Expr::constant(2))?,
        ),
    })
}
