//! Symbolic differentiation.
//!
//! Each rule builds its result through [`Expr::binary`], so the derivative comes out simplified.

mod function;

use dx_error::Error;
use crate::error::UnsupportedExpression;
use crate::primitive::Variable;
use super::expr::{Binary, BinaryOp, Expr, Unary};

/// `(f(g))' = f'(g) * g'`
fn chain_rule(unary: &Unary, wrt: &Variable) -> Result<Expr, Error> {
    let outer = function::outer_derivative(unary)?;
    Expr::binary(BinaryOp::Mul, outer, derivative(unary.operand(), wrt)?)
}

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn sum_rule(binary: &Binary, wrt: &Variable) -> Result<Expr, Error> {
    Expr::binary(binary.op(), derivative(binary.lhs(), wrt)?, derivative(binary.rhs(), wrt)?)
}

/// `(f * g)' = f * g' + g * f'`
fn product_rule(binary: &Binary, wrt: &Variable) -> Result<Expr, Error> {
    let (f, g) = (binary.lhs(), binary.rhs());
    Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, f.clone(), derivative(g, wrt)?)?,
        Expr::binary(BinaryOp::Mul, g.clone(), derivative(f, wrt)?)?,
    )
}

/// `(f / g)' = (g * f' - f * g') / g^2`
fn quotient_rule(binary: &Binary, wrt: &Variable) -> Result<Expr, Error> {
    let (f, g) = (binary.lhs(), binary.rhs());
    let numerator = Expr::binary(
        BinaryOp::Sub,
        Expr::binary(BinaryOp::Mul, g.clone(), derivative(f, wrt)?)?,
        Expr::binary(BinaryOp::Mul, f.clone(), derivative(g, wrt)?)?,
    )?;
    let denominator = Expr::binary(BinaryOp::Pow, g.clone(), Expr::constant(2))?;
    Expr::binary(BinaryOp::Div, numerator, denominator)
}

/// `(f^c)' = c * f^(c-1)`, where `c` is a constant
/// `(c^g)' = ln(c) * c^g`, where `c` is a constant
///
/// The side that varies is treated as the variable itself, so no inner derivative is multiplied
/// in. Powers where neither side is a constant are not supported.
fn power_rule(binary: &Binary) -> Result<Expr, Error> {
    let (base, exponent) = (binary.lhs(), binary.rhs());

    if exponent.as_constant().is_some() {
        let reduced = Expr::binary(BinaryOp::Sub, exponent.clone(), Expr::constant(1))?;
        let power = Expr::binary(BinaryOp::Pow, base.clone(), reduced)?;
        Expr::binary(BinaryOp::Mul, exponent.clone(), power)
    } else if let Some(c) = base.as_constant() {
        Expr::binary(BinaryOp::Mul, Expr::Constant(c.ln()?), Expr::Binary(binary.clone()))
    } else {
        Err(Error::unspanned(UnsupportedExpression { expr: binary.to_string() }))
    }
}

/// Computes the derivative of the given expression with respect to `wrt`.
///
/// Returns [`Err`] if the expression contains a power whose base and exponent are both
/// non-constant, or if simplifying the derivative fails.
pub fn derivative(f: &Expr, wrt: &Variable) -> Result<Expr, Error> {
    // a tree without variables is a constant, whatever functions it applies
    if f.is_variable_free() {
        return Ok(Expr::constant(0));
    }

    match f {
        Expr::Constant(_) => Ok(Expr::constant(0)),
        Expr::Variable(var) => Ok(Expr::constant(if var == wrt { 1 } else { 0 })),
        Expr::Unary(unary) => chain_rule(unary, wrt),
        Expr::Binary(binary) => match binary.op() {
            BinaryOp::Add | BinaryOp::Sub => sum_rule(binary, wrt),
            BinaryOp::Mul => product_rule(binary, wrt),
            BinaryOp::Div => quotient_rule(binary, wrt),
            BinaryOp::Pow => power_rule(binary),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LOG10_E, ONE_HALF};
    use crate::primitive::Number;
    use crate::symbolic::expr::UnaryOp;
    use pretty_assertions::assert_eq;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn wrt_x() -> Variable {
        Variable::new("x")
    }

    fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Mul, lhs, rhs).unwrap()
    }

    fn pow(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Pow, lhs, rhs).unwrap()
    }

    fn neg(operand: Expr) -> Expr {
        Expr::unary(UnaryOp::Neg, operand)
    }

    fn call(op: UnaryOp, operand: Expr) -> Expr {
        Expr::unary(op, operand)
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&Expr::constant(5), &wrt_x()).unwrap(), Expr::constant(0));
        assert_eq!(derivative(&x(), &wrt_x()).unwrap(), Expr::constant(1));
        assert_eq!(derivative(&Expr::variable("y"), &wrt_x()).unwrap(), Expr::constant(0));
    }

    #[test]
    fn outer_derivatives() {
        let cases = [
            (UnaryOp::Neg, Expr::constant(-1)),
            (UnaryOp::Sqrt, Expr::binary(BinaryOp::Div, Expr::Constant(ONE_HALF.clone()), call(UnaryOp::Sqrt, x())).unwrap()),
            (UnaryOp::Log, Expr::binary(BinaryOp::Div, Expr::constant(1), x()).unwrap()),
            (UnaryOp::Log10, Expr::binary(BinaryOp::Div, Expr::Constant(LOG10_E.clone()), x()).unwrap()),
            (UnaryOp::Exp, call(UnaryOp::Exp, x())),
            (UnaryOp::Sin, call(UnaryOp::Cos, x())),
            (UnaryOp::Cos, neg(call(UnaryOp::Sin, x()))),
            (UnaryOp::Tan, pow(call(UnaryOp::Sec, x()), Expr::constant(2))),
            (UnaryOp::Sec, mul(call(UnaryOp::Sec, x()), call(UnaryOp::Tan, x()))),
            (UnaryOp::Cosec, neg(mul(call(UnaryOp::Cosec, x()), call(UnaryOp::Cot, x())))),
            (UnaryOp::Cot, neg(pow(call(UnaryOp::Cosec, x()), Expr::constant(2)))),
        ];

        for (op, expected) in cases {
            let f = call(op, x());
            assert_eq!(derivative(&f, &wrt_x()).unwrap(), expected, "d/dx {}", f);
        }
    }

    #[test]
    fn chain_rule_multiplies_inner_derivative() {
        // sin(3*x) -> cos(3*x) * 3
        let inner = mul(Expr::constant(3), x());
        let f = call(UnaryOp::Sin, inner.clone());
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(call(UnaryOp::Cos, inner), Expr::constant(3)));
    }

    #[test]
    fn power_with_constant_exponent() {
        let f = pow(x(), Expr::constant(2));
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(Expr::constant(2), x()));

        let f = pow(x(), Expr::constant(3));
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(Expr::constant(3), pow(x(), Expr::constant(2))));
    }

    #[test]
    fn power_with_constant_base() {
        let f = pow(Expr::constant(2), x());
        let ln2 = Number::from(2).ln().unwrap();
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(Expr::Constant(ln2), f.clone()));

        let e = Expr::Constant(Number::named("e").unwrap());
        let f = pow(e, x());
        let derived = derivative(&f, &wrt_x()).unwrap();
        assert_eq!(derived.to_string(), "(0.9999999999999999999999999999*(e^x))");
    }

    #[test]
    fn power_with_variable_base_and_exponent() {
        let f = pow(x(), Expr::variable("y"));
        let err = derivative(&f, &wrt_x()).unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedExpression>().unwrap().expr, "(x^y)");

        // unsupported whichever variable it is differentiated with respect to
        for var in ["y", "z"] {
            let err = derivative(&f, &Variable::new(var)).unwrap_err();
            assert!(err.is::<UnsupportedExpression>(), "d/d{} {}", var, f);
        }
    }

    #[test]
    fn power_of_compound_base() {
        // (2*x)^2 -> 2 * (2*x)^1 = 2 * (2*x)
        let base = mul(Expr::constant(2), x());
        let f = pow(base.clone(), Expr::constant(2));
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(Expr::constant(2), base));
    }

    #[test]
    fn power_of_compound_exponent() {
        // 2^(3*x) -> ln(2) * 2^(3*x)
        let f = pow(Expr::constant(2), mul(Expr::constant(3), x()));
        let ln2 = Number::from(2).ln().unwrap();
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), mul(Expr::Constant(ln2), f.clone()));
    }

    #[test]
    fn product_and_quotient() {
        let y = Expr::variable("y");
        let f = mul(x(), y.clone());
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), y);

        // (x / y)' = (y * 1 - x * 0) / y^2 = y / y^2
        let f = Expr::binary(BinaryOp::Div, x(), y.clone()).unwrap();
        let expected = Expr::binary(BinaryOp::Div, y.clone(), pow(y, Expr::constant(2))).unwrap();
        assert_eq!(derivative(&f, &wrt_x()).unwrap(), expected);
    }

    #[test]
    fn constant_only_expressions() {
        let exprs = [
            call(UnaryOp::Log, Expr::constant(0)),
            pow(call(UnaryOp::Sin, Expr::constant(2)), Expr::constant(2)),
            pow(call(UnaryOp::Sin, Expr::constant(2)), call(UnaryOp::Cos, Expr::constant(3))),
            mul(Expr::constant(4), call(UnaryOp::Sqrt, Expr::constant(-1))),
        ];
        for f in exprs {
            assert_eq!(derivative(&f, &wrt_x()).unwrap(), Expr::constant(0), "d/dx {}", f);
        }
    }
}
