//! Constant folding.

use dx_error::Error;
use crate::error::MathDomain;
use crate::symbolic::{expr::{BinaryOp, Expr}, simplify::step::Step, StepCollector};

/// `a op b = c`, where `a` and `b` are constants.
///
/// Returns [`Err`] if the operation is undefined for the constants, such as `1/0`.
pub fn fold_constants(
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, Error> {
    let (Some(a), Some(b)) = (lhs.as_constant(), rhs.as_constant()) else {
        return Ok(None);
    };

    let overflow = || Error::unspanned(MathDomain { operation: "the value", value: format!("{}{}{}", a, op, b) });
    let value = match op {
        BinaryOp::Add => (a + b).bounded().ok_or_else(overflow)?,
        BinaryOp::Sub => (a - b).bounded().ok_or_else(overflow)?,
        BinaryOp::Mul => (a * b).bounded().ok_or_else(overflow)?,
        BinaryOp::Div => a.checked_div(b)?,
        BinaryOp::Pow => a.pow(b)?,
    };

    step_collector.push(Step::FoldConstants);
    Ok(Some(Expr::Constant(value)))
}
