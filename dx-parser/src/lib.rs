//! Lexer and parser for expressions over the variables `x`, `y` and `z`.
//!
//! The [`parse`] function turns source code into a simplified [`Expr`]:
//!
//! ```
//! use dx_parser::parse;
//!
//! let expr = parse("2 * x + 0").unwrap();
//! assert_eq!(expr.to_string(), "(2*x)");
//! ```
//!
//! Errors carry the region of the source code they originated from, and can be rendered with
//! [`Error::build_report`](dx_error::Error::build_report).

pub mod parser;
pub mod tokenizer;

pub use dx_compute::Expr;
pub use parser::{parse, Parser};
