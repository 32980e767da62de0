use std::fmt;

/// A simplification rule that was applied to a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Step {
    /// `a op b = c`, where `a` and `b` are constants.
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            Step::FoldConstants => "fold constants",
            Step::AddZero => "0+a = a",
            Step::SubtractFromZero => "0-a = -a",
            Step::SubtractZero => "a-0 = a",
            Step::MultiplyZero => "0*a = 0",
            Step::MultiplyOne => "1*a = a",
            Step::DivideZero => "0/a = 0",
            Step::DivideOne => "a/1 = a",
            Step::PowerZero => "a^0 = 1",
            Step::PowerOne => "a^1 = a",
        };
        write!(f, "{}", rule)
    }
}
