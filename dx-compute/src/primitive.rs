//! The leaves of an expression: exact decimal [`Number`]s and [`Variable`]s.

use dashu::base::Sign;
use dashu::float::{round::mode::HalfEven, Context, FBig, Repr};
use dashu::integer::IBig;
use dx_error::Error;
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};
use crate::consts::{E, PI};
use crate::error::{DivisionByZero, InvalidNumber, MathDomain};

/// The number of significant decimal digits kept by arithmetic whose exact result does not fit.
pub const DIGITS: usize = 28;

/// The number of significant decimal digits used for the intermediate values of logarithms and
/// non-integer powers, before they are rounded back to [`DIGITS`].
pub const PRECISION: usize = 64;

/// Powers whose natural logarithm exceeds this magnitude are beyond [`MAX_EXPONENT`] either way.
const MAX_LN_MAGNITUDE: u32 = 2_302_587;

/// The largest exponent of the leading digit of a computed number. Results of
/// `10^(MAX_EXPONENT + 1)` or more overflow, and nonzero results below `10^-MAX_EXPONENT` are
/// flushed to zero.
pub const MAX_EXPONENT: isize = 999_999;

/// A decimal float rounding half to even, as used for all computations.
type Decimal = FBig<HalfEven, 10>;

/// The context that rounds results to [`DIGITS`] significant digits.
fn rounding() -> Context<HalfEven> {
    Context::new(DIGITS)
}

/// The context used for transcendental intermediates.
fn working() -> Context<HalfEven> {
    Context::new(PRECISION)
}

/// An exact, arbitrary-precision decimal number.
///
/// Numbers written in the input keep every digit they are written with. The results of
/// arithmetic are exact whenever they fit in [`DIGITS`] significant digits, and rounded half to
/// even otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct Number(Repr<10>);

impl Number {
    /// Creates the number `significand * 10^exponent`.
    pub fn from_parts(significand: impl Into<IBig>, exponent: isize) -> Self {
        Self(Repr::new(significand.into(), exponent))
    }

    /// Returns the number zero.
    pub fn zero() -> Self {
        Self(Repr::zero())
    }

    /// Returns the number one.
    pub fn one() -> Self {
        Self(Repr::one())
    }

    /// Rounds a computed decimal to [`DIGITS`] significant digits.
    pub(crate) fn from_decimal(value: Decimal) -> Self {
        Self(value.with_precision(DIGITS).value().into_repr())
    }

    /// Resolves the name of a predefined constant, `e` or `pi`.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "e" => Some(E.clone()),
            "pi" => Some(PI.clone()),
            _ => None,
        }
    }

    /// Parses a named constant or a decimal literal.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match Self::named(s) {
            Some(n) => Ok(n),
            None => Self::from_literal(s),
        }
    }

    /// Parses a decimal literal: an optional sign, the integer digits, then an optional `.` and
    /// fractional digits. At least one digit must be present. The value is kept exactly.
    pub fn from_literal(s: &str) -> Result<Self, Error> {
        let invalid = || Error::unspanned(InvalidNumber { literal: s.to_string() });

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let mut significand = IBig::from_str_radix(&digits, 10).map_err(|_| invalid())?;
        if negative {
            significand = -significand;
        }
        let exponent = -isize::try_from(frac_part.len()).map_err(|_| invalid())?;

        Ok(Self::from_parts(significand, exponent))
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this number is one.
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Returns true if this number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Negative
    }

    /// Returns true if this number has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.0.is_int()
    }

    /// The exponent of the leading digit, so that `10^adjusted <= |self| < 10^(adjusted + 1)`.
    fn adjusted_exponent(&self) -> isize {
        self.0.exponent() + self.0.digits() as isize - 1
    }

    /// Checks that a computed number is within [`MAX_EXPONENT`].
    ///
    /// Returns [`None`] if the number overflows. A number too small to represent becomes zero.
    pub fn bounded(self) -> Option<Self> {
        if self.is_zero() {
            return Some(self);
        }
        match self.adjusted_exponent() {
            adjusted if adjusted > MAX_EXPONENT => None,
            adjusted if adjusted < -MAX_EXPONENT => Some(Self::zero()),
            _ => Some(self),
        }
    }

    /// Converts an integral number to an [`IBig`].
    fn to_int(&self) -> Option<IBig> {
        if !self.is_integer() {
            return None;
        }
        let (significand, exponent) = self.0.clone().into_parts();
        let scale = IBig::from(10u8).pow(usize::try_from(exponent).ok()?);
        Some(significand * scale)
    }

    /// Divides this number by `rhs`, failing if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::unspanned(DivisionByZero));
        }
        Self::from_decimal(rounding().div(&self.0, &rhs.0).value())
            .bounded()
            .ok_or_else(|| Error::unspanned(MathDomain { operation: "quotient", value: format!("{}/{}", self, rhs) }))
    }

    /// Raises this number to the power `exp`.
    ///
    /// Integer powers are computed directly. Other powers are computed as `exp(exp * ln(self))`
    /// with [`PRECISION`] digits and rounded back. Results beyond [`MAX_EXPONENT`] fail with
    /// [`MathDomain`].
    pub fn pow(&self, exp: &Self) -> Result<Self, Error> {
        let domain = || Error::unspanned(MathDomain { operation: "power", value: format!("{}^{}", self, exp) });

        if self.is_zero() {
            return match exp.0.sign() {
                _ if exp.is_zero() => Err(domain()),
                Sign::Negative => Err(Error::unspanned(DivisionByZero)),
                Sign::Positive => Ok(Self::zero()),
            };
        }

        if let Some(n) = exp.to_int() {
            let unit = self.0 == Repr::one() || self.0 == Repr::neg_one();
            if !unit && i32::try_from(&n).is_err() {
                return Err(domain());
            }
            return Self::from_decimal(rounding().powi(&self.0, n).value())
                .bounded()
                .ok_or_else(domain);
        }

        if self.is_negative() {
            return Err(domain());
        }

        let context = working();
        let ln = context.ln(&self.0).value();
        let scaled = context.mul(ln.repr(), &exp.0).value();
        let limit = Repr::new(IBig::from(MAX_LN_MAGNITUDE), 0);
        if *scaled.repr() > limit {
            return Err(domain());
        }
        if *(-scaled.clone()).repr() > limit {
            return Ok(Self::zero());
        }
        Self::from_decimal(context.exp(scaled.repr()).value())
            .bounded()
            .ok_or_else(domain)
    }

    /// Returns the natural logarithm of this number.
    pub fn ln(&self) -> Result<Self, Error> {
        self.check_positive("ln")?;
        Ok(Self::from_decimal(working().ln(&self.0).value()))
    }

    /// Returns the base 10 logarithm of this number.
    pub fn log10(&self) -> Result<Self, Error> {
        self.check_positive("log10")?;
        let context = working();
        let ln = context.ln(&self.0).value();
        let ln10 = context.ln(&Repr::new(IBig::from(10u8), 0)).value();
        Ok(Self::from_decimal(context.div(ln.repr(), ln10.repr()).value()))
    }

    fn check_positive(&self, operation: &'static str) -> Result<(), Error> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::unspanned(MathDomain { operation, value: self.to_string() }));
        }
        Ok(())
    }

    /// Writes the number in positional notation, without an exponent or trailing fractional zeros.
    fn fmt_positional(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let significand = self.0.significand();
        let exponent = self.0.exponent();
        let digits = significand.to_string();
        let digits = digits.trim_start_matches('-');

        if significand.sign() == Sign::Negative {
            write!(f, "-")?;
        }

        if exponent >= 0 {
            return write!(f, "{}{}", digits, "0".repeat(exponent.unsigned_abs()));
        }

        // the representation is normalized, so the significand carries no trailing zeros
        let point = digits.len() as isize + exponent;
        if point > 0 {
            let (int_part, frac_part) = digits.split_at(point as usize);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{}{}", "0".repeat(point.unsigned_abs()), digits)
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_parts(n, 0)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_parts(n, 0)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        Number::from_decimal(rounding().add(&self.0, &rhs.0).value())
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Number {
        Number::from_decimal(rounding().sub(&self.0, &rhs.0).value())
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        Number::from_decimal(rounding().mul(&self.0, &rhs.0).value())
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        let (significand, exponent) = self.0.clone().into_parts();
        Number::from_parts(-significand, exponent)
    }
}

/// Named constants are written by name; other numbers in positional decimal notation.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == *E {
            write!(f, "e")
        } else if *self == *PI {
            write!(f, "pi")
        } else {
            self.fmt_positional(f)
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number(")?;
        self.fmt_positional(f)?;
        write!(f, ")")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A named variable, such as `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Variable(String);

impl Variable {
    /// Creates a variable with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
