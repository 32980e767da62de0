//! Kinds of errors raised while tokenizing and parsing.

use ariadne::Fmt;
use dx_attrs::ErrorKind;
use dx_error::EXPR;

/// No token matches the source code at the given position.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "unrecognized character `{}` at index {}",
        input.get(*index..).and_then(|rest| rest.chars().next()).unwrap_or_default(),
        index,
    ),
    labels = ["this character"],
    help = format!(
        "expressions are made of numbers, the constants {}, the variables {}, operators, and parentheses",
        "e, pi".fg(EXPR),
        "x, y, z".fg(EXPR),
    ),
)]
pub struct LexError {
    /// The byte index of the unrecognized character.
    pub index: usize,

    /// The source code being tokenized.
    pub input: String,
}

/// The tokens do not form a valid expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("syntax error at index {}: expected {}, found {}", index, expected, found),
    labels = [format!("expected {} here", expected)],
    help = format!(
        "a minus sign directly before a digit is part of the number, so write {} rather than {} to subtract",
        "2 - 1".fg(EXPR),
        "2 -1".fg(EXPR),
    ),
)]
pub struct SyntaxError {
    /// The byte index of the unexpected token.
    pub index: usize,

    /// The source code being parsed.
    pub input: String,

    /// A description of what was expected.
    pub expected: &'static str,

    /// A description of the token that was found.
    pub found: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_error::ErrorKind;

    fn lex_error(input: &str, index: usize) -> LexError {
        LexError { index, input: input.to_string() }
    }

    #[test]
    fn lex_error_names_the_character() {
        assert_eq!(lex_error("x + $", 4).message(), "unrecognized character `$` at index 4");
        assert_eq!(lex_error("x + é", 4).message(), "unrecognized character `é` at index 4");
    }

    #[test]
    fn lex_error_outside_the_input() {
        // past the end, and inside a multi-byte character
        assert_eq!(lex_error("x", 7).message(), "unrecognized character `\0` at index 7");
        assert_eq!(lex_error("é", 1).message(), "unrecognized character `\0` at index 1");
    }
}
