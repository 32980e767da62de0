//! The expression tree.
//!
//! Nodes are only built through [`Expr::unary`] and [`Expr::binary`], which normalize the new node
//! with the rules in [`simplify::rules`](crate::symbolic::simplify::rules). Since every child was
//! built the same way, every [`Expr`] in existence is already simplified.

pub mod op;

use dx_error::Error;
use std::fmt;
use crate::primitive::{Number, Variable};
use super::{derivative::derivative, simplify::{self, step::Step}, StepCollector};

pub use op::{BinaryOp, UnaryOp};

/// An algebraic expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A number, such as `2.5` or `pi`.
    Constant(Number),

    /// A variable, such as `x`.
    Variable(Variable),

    /// A unary operator applied to an operand, such as `sin(x)`.
    Unary(Unary),

    /// A binary operator applied to two operands, such as `x + 1`.
    Binary(Binary),
}

/// A unary operator applied to an operand.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unary {
    op: UnaryOp,
    operand: Box<Expr>,
}

impl Unary {
    /// The operator.
    pub fn op(&self) -> UnaryOp {
        self.op
    }

    /// The operand.
    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

/// A binary operator applied to two operands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Binary {
    op: BinaryOp,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
}

impl Binary {
    /// The operator.
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// The left-hand side.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

impl Expr {
    /// Creates a constant expression.
    pub fn constant(n: impl Into<Number>) -> Self {
        Expr::Constant(n.into())
    }

    /// Creates a variable expression.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    /// Applies a unary operator to `operand`. No rules simplify unary nodes, so this cannot fail.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary(Unary { op, operand: Box::new(operand) })
    }

    /// Applies a binary operator to `lhs` and `rhs`, and simplifies the result.
    ///
    /// Returns [`Err`] if the result divides by the constant zero, or folds two constants whose
    /// result is undefined.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Result<Self, Error> {
        Self::binary_with(op, lhs, rhs, &mut ())
    }

    /// [`Expr::binary`], reporting the simplification rules that were applied to the collector.
    pub fn binary_with(
        op: BinaryOp,
        lhs: Expr,
        rhs: Expr,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Self, Error> {
        match simplify::rules::all(op, &lhs, &rhs, step_collector)? {
            Some(simplified) => Ok(simplified),
            None => Ok(Expr::Binary(Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })),
        }
    }

    /// Returns the value of this expression if it is a [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<&Number> {
        match self {
            Expr::Constant(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if this expression is the constant zero.
    pub fn is_zero(&self) -> bool {
        self.as_constant().is_some_and(Number::is_zero)
    }

    /// Returns true if this expression is the constant one.
    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(Number::is_one)
    }

    /// Returns true if the variable `var` appears anywhere in this expression.
    pub fn depends_on(&self, var: &Variable) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(v) => v == var,
            Expr::Unary(unary) => unary.operand.depends_on(var),
            Expr::Binary(binary) => binary.lhs.depends_on(var) || binary.rhs.depends_on(var),
        }
    }

    /// Returns true if no variable appears anywhere in this expression.
    pub fn is_variable_free(&self) -> bool {
        match self {
            Expr::Constant(_) => true,
            Expr::Variable(_) => false,
            Expr::Unary(unary) => unary.operand.is_variable_free(),
            Expr::Binary(binary) => binary.lhs.is_variable_free() && binary.rhs.is_variable_free(),
        }
    }

    /// Rebuilds this expression bottom-up, applying every simplification rule.
    pub fn simplify(&self) -> Result<Expr, Error> {
        simplify::simplify(self)
    }

    /// Differentiates this expression with respect to `wrt`. The result is simplified.
    pub fn differentiate(&self, wrt: &Variable) -> Result<Expr, Error> {
        derivative(self, wrt)
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Constant(n)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}

/// Structural equality, where the operands of `+` and `*` may appear in either order.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Unary(a), Expr::Unary(b)) => a.op == b.op && a.operand == b.operand,
            (Expr::Binary(a), Expr::Binary(b)) => {
                a.op == b.op
                    && ((a.lhs == b.lhs && a.rhs == b.rhs)
                        || (a.op.is_commutative() && a.lhs == b.rhs && a.rhs == b.lhs))
            },
            _ => false,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(n) => write!(f, "{}", n),
            Expr::Variable(var) => write!(f, "{}", var),
            Expr::Unary(unary) => write!(f, "{}", unary),
            Expr::Binary(binary) => write!(f, "{}", binary),
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            UnaryOp::Neg => write!(f, "(-{})", self.operand),
            op => write!(f, "{}({})", op, self.operand),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.lhs, self.op, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn y() -> Expr {
        Expr::variable("y")
    }

    #[test]
    fn binary_folds_constants() {
        let sum = Expr::binary(BinaryOp::Add, Expr::constant(3), Expr::constant(4)).unwrap();
        assert_eq!(sum, Expr::constant(7));
    }

    #[test]
    fn commutative_equality() {
        let xy = Expr::binary(BinaryOp::Add, x(), y()).unwrap();
        let yx = Expr::binary(BinaryOp::Add, y(), x()).unwrap();
        assert_eq!(xy, yx);

        let xy = Expr::binary(BinaryOp::Mul, x(), y()).unwrap();
        let yx = Expr::binary(BinaryOp::Mul, y(), x()).unwrap();
        assert_eq!(xy, yx);

        let xy = Expr::binary(BinaryOp::Sub, x(), y()).unwrap();
        let yx = Expr::binary(BinaryOp::Sub, y(), x()).unwrap();
        assert_ne!(xy, yx);

        let xy = Expr::binary(BinaryOp::Pow, x(), y()).unwrap();
        let yx = Expr::binary(BinaryOp::Pow, y(), x()).unwrap();
        assert_ne!(xy, yx);
    }

    #[test]
    fn unary_equality() {
        assert_eq!(Expr::unary(UnaryOp::Sin, x()), Expr::unary(UnaryOp::Sin, x()));
        assert_ne!(Expr::unary(UnaryOp::Sin, x()), Expr::unary(UnaryOp::Cos, x()));
        assert_ne!(Expr::unary(UnaryOp::Sin, x()), Expr::unary(UnaryOp::Sin, y()));
        assert_ne!(Expr::unary(UnaryOp::Neg, Expr::constant(3)), Expr::constant(-3));
    }

    #[test]
    fn display() {
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::constant(2),
            Expr::binary(BinaryOp::Pow, x(), Expr::constant(3)).unwrap(),
        ).unwrap();
        assert_eq!(expr.to_string(), "(2*(x^3))");

        let expr = Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Log10, y()));
        assert_eq!(expr.to_string(), "(-log10(y))");

        let expr = Expr::binary(BinaryOp::Div, Expr::Constant(Number::named("pi").unwrap()), x()).unwrap();
        assert_eq!(expr.to_string(), "(pi/x)");
    }

    #[test]
    fn depends_on() {
        let expr = Expr::unary(UnaryOp::Sin, Expr::binary(BinaryOp::Mul, Expr::constant(2), y()).unwrap());
        assert!(expr.depends_on(&Variable::new("y")));
        assert!(!expr.depends_on(&Variable::new("x")));
        assert!(!Expr::constant(2).depends_on(&Variable::new("x")));
    }

    #[test]
    fn is_variable_free() {
        let sine = Expr::unary(UnaryOp::Sin, Expr::constant(2));
        assert!(sine.is_variable_free());
        assert!(Expr::binary(BinaryOp::Pow, sine.clone(), Expr::constant(3)).unwrap().is_variable_free());
        assert!(!Expr::binary(BinaryOp::Mul, sine, y()).unwrap().is_variable_free());
        assert!(!x().is_variable_free());
    }

    #[test]
    fn accessors() {
        let expr = Expr::binary(BinaryOp::Sub, x(), y()).unwrap();
        let Expr::Binary(binary) = &expr else {
            panic!("expected a binary node, got {:?}", expr);
        };
        assert_eq!(binary.op(), BinaryOp::Sub);
        assert_eq!(binary.lhs(), &x());
        assert_eq!(binary.rhs(), &y());

        let expr = Expr::unary(UnaryOp::Exp, x());
        let Expr::Unary(unary) = &expr else {
            panic!("expected a unary node, got {:?}", expr);
        };
        assert_eq!(unary.op(), UnaryOp::Exp);
        assert_eq!(unary.operand(), &x());
    }
}
