//! Simplification of expressions.
//!
//! Simplification happens every time a binary node is built: [`rules::all`] is tried on the new
//! node and its result, if any, replaces it. [`simplify`] rebuilds a whole tree this way, from the
//! leaves up, so it is idempotent; on a tree that was built through [`Expr::binary`] it returns
//! an equal tree.

pub mod rules;
pub mod step;

use dx_error::Error;
use super::{expr::Expr, StepCollector};
use step::Step;

/// Rebuilds the expression bottom-up, applying the simplification rules to every binary node.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplifies the expression, also returning the rules that were applied, in order.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

/// Simplifies the expression, reporting the applied rules to the given collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(expr.clone()),
        Expr::Unary(unary) => Ok(Expr::unary(unary.op(), simplify_with(unary.operand(), step_collector)?)),
        Expr::Binary(binary) => {
            let lhs = simplify_with(binary.lhs(), step_collector)?;
            let rhs = simplify_with(binary.rhs(), step_collector)?;
            Expr::binary_with(binary.op(), lhs, rhs, step_collector)
        },
    }
}
