//! The simplification rules for binary nodes.
//!
//! Each rule is a function that takes the operands of the node to simplify, and returns
//! `Some(expr)` with the simplified expression if the rule applies, or `None` if the rule does not
//! apply. Rules that can detect an undefined result return a [`Result`] instead.

pub mod add;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod power;
pub mod subtract;

use dx_error::Error;
use crate::symbolic::{expr::{BinaryOp, Expr}, StepCollector};
use super::step::Step;

/// Applies the rules for `lhs op rhs`, in order, stopping at the first one that applies.
///
/// Constant folding is always tried first.
pub fn all(
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, Error> {
    if let Some(folded) = fold::fold_constants(op, lhs, rhs, step_collector)? {
        return Ok(Some(folded));
    }

    match op {
        BinaryOp::Add => Ok(add::all(lhs, rhs, step_collector)),
        BinaryOp::Sub => Ok(subtract::all(lhs, rhs, step_collector)),
        BinaryOp::Mul => Ok(multiply::all(lhs, rhs, step_collector)),
        BinaryOp::Div => divide::all(lhs, rhs, step_collector),
        BinaryOp::Pow => Ok(power::all(lhs, rhs, step_collector)),
    }
}
