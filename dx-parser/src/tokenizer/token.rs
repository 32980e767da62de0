use dx_compute::{BinaryOp, UnaryOp};
use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Where several patterns match at the same position, the longest match wins: `log10` is a single
/// function name rather than `log` followed by `10`, and `-2` is a single number.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    #[regex(r"\s+")]
    Whitespace,

    /// A decimal literal, optionally negative. The integer part has no leading zeros, and a `.`
    /// must be followed by at least one digit.
    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+)?")]
    #[regex(r"-?\.[0-9]+")]
    Number,

    #[token("e")]
    #[token("pi")]
    Constant,

    #[token("x")]
    #[token("y")]
    #[token("z")]
    Variable,

    /// The name of a unary function.
    #[token("sqrt")]
    #[token("log")]
    #[token("log10")]
    #[token("exp")]
    #[token("sin")]
    #[token("cos")]
    #[token("tan")]
    #[token("sec")]
    #[token("cosec")]
    #[token("cot")]
    Function,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    #[token("**")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is a complete operand on its own: a number, a named constant, or
    /// a variable.
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Constant | TokenKind::Variable)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token, or [`None`] for the token marking the end of the source code.
    pub kind: Option<TokenKind>,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Creates the token marking the end of the given source code.
    pub fn eof(source: &'source str) -> Self {
        Self {
            span: source.len()..source.len(),
            kind: None,
            lexeme: "",
        }
    }

    /// Returns true if this token marks the end of the source code.
    pub fn is_eof(&self) -> bool {
        self.kind.is_none()
    }

    /// Returns true if the token is a number, a named constant, or a variable.
    pub fn is_terminal(&self) -> bool {
        self.kind.is_some_and(TokenKind::is_terminal)
    }

    /// Returns the unary operator this token denotes in prefix position, if any.
    pub fn as_unary_op(&self) -> Option<UnaryOp> {
        match self.kind? {
            TokenKind::Sub => Some(UnaryOp::Neg),
            TokenKind::Function => self.lexeme.parse().ok(),
            _ => None,
        }
    }

    /// Returns the binary operator this token denotes in infix position, if any.
    pub fn as_binary_op(&self) -> Option<BinaryOp> {
        match self.kind? {
            TokenKind::Add => Some(BinaryOp::Add),
            TokenKind::Sub => Some(BinaryOp::Sub),
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::Div),
            TokenKind::Exp => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    /// Describes the token for error messages.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("`{}`", self.lexeme)
        }
    }
}
