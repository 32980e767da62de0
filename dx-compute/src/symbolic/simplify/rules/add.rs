//! Simplification rules for addition.

use crate::symbolic::{expr::Expr, simplify::step::Step, StepCollector};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_zero() {
        rhs.clone()
    } else if rhs.is_zero() {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(lhs, rhs, step_collector)
}
