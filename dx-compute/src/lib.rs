//! Exact decimal numbers, and the symbolic expressions built from them.
//!
//! The [`primitive`] module provides the leaves of an expression: [`Number`](primitive::Number),
//! an exact decimal, and [`Variable`](primitive::Variable). The [`symbolic`] module builds
//! expression trees over them and implements simplification and differentiation.

pub mod consts;
pub mod error;
pub mod primitive;
pub mod symbolic;

pub use primitive::{Number, Variable};
pub use symbolic::{expr::{Binary, BinaryOp, Unary, UnaryOp}, Expr};
