//! Simplification rules for subtraction.

use crate::symbolic::{expr::{Expr, UnaryOp}, simplify::step::Step, StepCollector};

/// `0-a = -a`
pub fn subtract_from_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_zero() {
        return None;
    }

    step_collector.push(Step::SubtractFromZero);
    Some(Expr::unary(UnaryOp::Neg, rhs.clone()))
}

/// `a-0 = a`
pub fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::SubtractZero);
    Some(lhs.clone())
}

/// Applies all subtraction rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_from_zero(lhs, rhs, step_collector)
        .or_else(|| subtract_zero(lhs, rhs, step_collector))
}
