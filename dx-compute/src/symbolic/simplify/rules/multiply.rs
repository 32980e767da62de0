//! Simplification rules for multiplication.

use crate::symbolic::{expr::Expr, simplify::step::Step, StepCollector};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_zero() && !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::MultiplyZero);
    Some(Expr::constant(0))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_one() {
        rhs.clone()
    } else if rhs.is_one() {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(lhs, rhs, step_collector)
        .or_else(|| multiply_one(lhs, rhs, step_collector))
}
