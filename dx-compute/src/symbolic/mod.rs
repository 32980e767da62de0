//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes: constants and variables at the leaves, and unary or
//! binary operators above them. Each node owns its children, and trees are never mutated; every
//! transformation builds a new tree.
//!
//! ```
//! use dx_compute::symbolic::expr::{BinaryOp, Expr};
//!
//! let expr = Expr::binary(BinaryOp::Mul, Expr::variable("x"), Expr::variable("y")).unwrap();
//! assert_eq!(expr.to_string(), "(x*y)");
//! ```
//!
//! # Simplification
//!
//! A small set of algebraic identities (constant folding, and the identities of `0` and `1`) is
//! applied every time a binary node is built, so there is no way to hold an unsimplified tree.
//!
//! ```
//! use dx_compute::symbolic::expr::{BinaryOp, Expr};
//!
//! // `3 + 4 = 7`
//! let sum = Expr::binary(BinaryOp::Add, Expr::constant(3), Expr::constant(4)).unwrap();
//! assert_eq!(sum, Expr::constant(7));
//!
//! // `x * 1 = x`
//! let product = Expr::binary(BinaryOp::Mul, Expr::variable("x"), Expr::constant(1)).unwrap();
//! assert_eq!(product, Expr::variable("x"));
//! ```
//!
//! For more information, see the [`mod@simplify`] module.
//!
//! # Differentiation
//!
//! [`Expr::differentiate`] applies the rules in [`mod@derivative`] recursively:
//!
//! ```
//! use dx_compute::primitive::Variable;
//! use dx_compute::symbolic::expr::{BinaryOp, Expr};
//!
//! let square = Expr::binary(BinaryOp::Pow, Expr::variable("x"), Expr::constant(2)).unwrap();
//! let derivative = square.differentiate(&Variable::new("x")).unwrap();
//! assert_eq!(derivative.to_string(), "(2*x)");
//! ```

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
