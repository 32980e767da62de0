//! Simplification rules for exponentiation.

use crate::symbolic::{expr::Expr, simplify::step::Step, StepCollector};

/// `a^0 = 1`
pub fn power_zero(rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::PowerZero);
    Some(Expr::constant(1))
}

/// `a^1 = a`
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_one() {
        return None;
    }

    step_collector.push(Step::PowerOne);
    Some(lhs.clone())
}

/// Applies all power rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(rhs, step_collector)
        .or_else(|| power_one(lhs, rhs, step_collector))
}
