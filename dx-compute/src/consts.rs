//! Predefined constants. Each is a [`Number`] exact to 28 significant digits.

use once_cell::sync::Lazy;
use super::primitive::Number;

/// Euler's number.
pub static E: Lazy<Number> = Lazy::new(|| Number::from_parts(2718281828459045235360287471u128, -27));

pub static PI: Lazy<Number> = Lazy::new(|| Number::from_parts(3141592653589793238462643383u128, -27));

/// `log10(e)`, the factor in the derivative of the base 10 logarithm.
pub static LOG10_E: Lazy<Number> = Lazy::new(|| Number::from_parts(4342944819032518276511289189u128, -28));

pub static ONE_HALF: Lazy<Number> = Lazy::new(|| Number::from_parts(5, -1));
