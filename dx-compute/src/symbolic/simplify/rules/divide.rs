//! Simplification rules for division.

use dx_error::Error;
use crate::error::DivisionByZero;
use crate::symbolic::{expr::Expr, simplify::step::Step, StepCollector};

/// `a/0` is undefined.
pub fn divide_by_zero(rhs: &Expr) -> Result<(), Error> {
    if rhs.is_zero() {
        return Err(Error::unspanned(DivisionByZero));
    }
    Ok(())
}

/// `0/a = 0`
pub fn divide_zero(lhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_zero() {
        return None;
    }

    step_collector.push(Step::DivideZero);
    Some(Expr::constant(0))
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_one() {
        return None;
    }

    step_collector.push(Step::DivideOne);
    Some(lhs.clone())
}

/// Applies all division rules. Returns [`Err`] if the divisor is zero.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    divide_by_zero(rhs)?;
    Ok(divide_zero(lhs, step_collector)
        .or_else(|| divide_one(lhs, rhs, step_collector)))
}
