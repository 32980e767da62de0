use dx_compute::{error::{DivisionByZero, MathDomain, UnsupportedExpression}, BinaryOp, Expr, UnaryOp, Variable};
use dx_parser::{parse, parser::error::SyntaxError};
use pretty_assertions::assert_eq;

/// Inputs whose rendering parses back to the same tree.
///
/// A rendering that places `-` directly before a digit, such as `(x-3)` or `(-3)`, lexes the
/// digit as a negative literal, so the corpus avoids subtracting or negating literals.
const ROUND_TRIP: &[&str] = &[
    "x",
    "2.5",
    "pi",
    "x + 2 * y",
    "sin(x) * cos(y)",
    "x ^ 2 / (y - z)",
    "log10(x) + exp(-x)",
    "sqrt(x ^ 0.5 + pi)",
    "-sin(x)",
    "x - y - z",
    "2 * x ^ 3 - y",
    "cosec(x) / cot(y)",
    "x / 2.5",
    "e ^ x",
    "z * -1.5",
    "tan(sec(log(x)))",
    "1 / 3 * x",
    "(x + y) * (x - y)",
];

/// Inputs that do not depend on any variable.
const CONSTANT_ONLY: &[&str] = &[
    "3 + 4",
    "-7",
    "sin(2) ^ 2",
    "log(5) * pi",
    "sqrt(2) / e",
    "2 ^ cos(1)",
    "exp(1) - tan(1)",
];

fn x() -> Variable {
    Variable::new("x")
}

#[test]
fn display_round_trips() {
    for input in ROUND_TRIP {
        let expr = parse(input).unwrap();
        let rendered = expr.to_string();
        let reparsed = parse(&rendered).unwrap_or_else(|err| panic!("{:?} rendered as {:?}: {}", input, rendered, err));
        assert_eq!(reparsed, expr, "{:?} rendered as {:?}", input, rendered);
    }
}

#[test]
fn simplify_is_idempotent() {
    for input in ROUND_TRIP.iter().chain(CONSTANT_ONLY) {
        let expr = parse(input).unwrap();
        let once = expr.simplify().unwrap();
        assert_eq!(once, expr, "{:?}", input);
        assert_eq!(once.simplify().unwrap(), once, "{:?}", input);
    }
}

#[test]
fn constant_expressions_have_zero_derivative() {
    for input in CONSTANT_ONLY {
        let expr = parse(input).unwrap();
        for var in ["x", "y", "z"] {
            assert_eq!(expr.differentiate(&Variable::new(var)).unwrap(), Expr::constant(0), "{:?}", input);
        }
    }

    // variables other than the one differentiated with respect to are held constant
    let expr = parse("y * 2 + sin(z)").unwrap();
    assert_eq!(expr.differentiate(&x()).unwrap(), Expr::constant(0));
}

#[test]
fn commutative_equality() {
    assert_eq!(parse("x+y").unwrap(), parse("y+x").unwrap());
    assert_eq!(parse("x*y").unwrap(), parse("y*x").unwrap());
    assert_eq!(parse("sin(x) * (y + z)").unwrap(), parse("(z + y) * sin(x)").unwrap());
    assert_ne!(parse("x-y").unwrap(), parse("y-x").unwrap());
    assert_ne!(parse("x/y").unwrap(), parse("y/x").unwrap());
}

#[test]
fn square_differentiates_to_double() {
    let derivative = parse("x^2").unwrap().differentiate(&x()).unwrap();
    let expected = Expr::binary(BinaryOp::Mul, Expr::constant(2), Expr::variable("x")).unwrap();
    assert_eq!(derivative, expected);
    assert_eq!(derivative.to_string(), "(2*x)");
}

#[test]
fn sine_differentiates_to_cosine() {
    let derivative = parse("sin(x)").unwrap().differentiate(&x()).unwrap();
    assert_eq!(derivative, Expr::unary(UnaryOp::Cos, Expr::variable("x")));
    assert_eq!(derivative.to_string(), "cos(x)");
}

#[test]
fn constants_fold_while_parsing() {
    assert_eq!(parse("3 + 4").unwrap(), Expr::constant(7));
    assert_eq!(parse("(1 + 2) * (3 + 4) ^ 2").unwrap(), Expr::constant(147));
    assert_eq!(parse("1 / 4").unwrap().to_string(), "0.25");
}

#[test]
fn division_by_zero() {
    assert!(parse("x / 0").unwrap_err().is::<DivisionByZero>());
    assert!(parse("x / (3 - 3)").unwrap_err().is::<DivisionByZero>());
}

#[test]
fn huge_powers_overflow() {
    for input in ["10^50000000", "10^2147483647", "x + 2 ^ 4000000"] {
        assert!(parse(input).unwrap_err().is::<MathDomain>(), "{:?}", input);
    }
    assert_eq!(parse("10^-2147483647").unwrap(), Expr::constant(0));
    assert_eq!(parse("10^999999").unwrap().to_string().len(), 1_000_000);
}

#[test]
fn adjacent_terminals() {
    for input in ["2 x", "x y", "pi 2", "(x) (y)", "x sin(y)"] {
        assert!(parse(input).unwrap_err().is::<SyntaxError>(), "{:?}", input);
    }
}

#[test]
fn variable_base_and_exponent() {
    let err = parse("x^y").unwrap().differentiate(&x()).unwrap_err();
    let kind = err.downcast_ref::<UnsupportedExpression>().unwrap();
    assert_eq!(kind.expr, "(x^y)");

    for var in ["y", "z"] {
        let err = parse("x^y").unwrap().differentiate(&Variable::new(var)).unwrap_err();
        assert!(err.is::<UnsupportedExpression>(), "d/d{}", var);
    }

    // nested inside another rule
    let err = parse("sin(x ^ x) + 1").unwrap().differentiate(&x()).unwrap_err();
    assert!(err.is::<UnsupportedExpression>());
}

#[test]
fn derivatives_of_composite_expressions() {
    let cases = [
        ("3 * x + 1", "3"),
        ("x * x", "(x+x)"),
        ("sin(2 * x)", "(cos((2*x))*2)"),
        ("x ^ 3 - x", "((3*(x^2))-1)"),
        ("1 / x", "(-1/(x^2))"),
        ("-x", "-1"),
        ("log(x)", "(1/x)"),
        ("y * x", "y"),
        ("(2 * x) ^ 2", "(2*(2*x))"),
    ];

    for (input, expected) in cases {
        let derivative = parse(input).unwrap().differentiate(&x()).unwrap();
        assert_eq!(derivative.to_string(), expected, "d/dx {:?}", input);
    }
}
