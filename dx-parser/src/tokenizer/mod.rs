pub mod token;

use dx_error::Error;
use logos::Logos;
use std::{collections::VecDeque, ops::Range};
use crate::parser::error::LexError;
pub use token::{Token, TokenKind};

/// Returns an iterator over the raw token kinds produced by the tokenizer, whitespace included.
pub fn tokenize(input: &str) -> logos::Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// A pull-based stream of tokens, with whitespace removed.
///
/// Tokens are produced on demand, so a character that no token matches is only reported once the
/// stream reaches it. After the last token, the stream keeps returning the end-of-input token.
#[derive(Debug, Clone)]
pub struct Lexer<'source> {
    /// The source code being tokenized.
    input: &'source str,

    /// The underlying tokenizer.
    raw: logos::Lexer<'source, TokenKind>,

    /// Tokens that were read from the tokenizer but not consumed yet. An [`Err`] holds the span of
    /// an unrecognized character.
    pending: VecDeque<Result<Token<'source>, Range<usize>>>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer for the given source.
    pub fn new(input: &'source str) -> Self {
        Self {
            input,
            raw: tokenize(input),
            pending: VecDeque::new(),
        }
    }

    /// The source code being tokenized.
    pub fn input(&self) -> &'source str {
        self.input
    }

    /// Reads the next non-whitespace token from the tokenizer into the pending queue.
    ///
    /// A negative zero such as `-0.0` is not a number of its own: it is queued as the operator `-`
    /// followed by the number without its sign.
    fn fill(&mut self) {
        loop {
            let Some(result) = self.raw.next() else {
                self.pending.push_back(Ok(Token::eof(self.input)));
                return;
            };
            let span = self.raw.span();
            let lexeme = self.raw.slice();

            let kind = match result {
                Ok(TokenKind::Whitespace) => continue,
                Ok(kind) => kind,
                Err(()) => {
                    self.pending.push_back(Err(span));
                    return;
                },
            };

            if kind == TokenKind::Number && is_negative_zero(lexeme) {
                self.pending.push_back(Ok(Token {
                    span: span.start..span.start + 1,
                    kind: Some(TokenKind::Sub),
                    lexeme: &lexeme[..1],
                }));
                self.pending.push_back(Ok(Token {
                    span: span.start + 1..span.end,
                    kind: Some(TokenKind::Number),
                    lexeme: &lexeme[1..],
                }));
            } else {
                self.pending.push_back(Ok(Token { span, kind: Some(kind), lexeme }));
            }
            return;
        }
    }

    /// Creates the error for an unrecognized character at the given span.
    fn error(&self, span: &Range<usize>) -> Error {
        Error::new(vec![span.clone()], LexError {
            index: span.start,
            input: self.input.to_string(),
        })
    }

    /// Returns the next token without consuming it.
    ///
    /// Returns a [`LexError`] if no token matches at the current position.
    pub fn peek_token(&mut self) -> Result<&Token<'source>, Error> {
        if self.pending.is_empty() {
            self.fill();
        }

        match self.pending.front() {
            Some(Ok(token)) => Ok(token),
            Some(Err(span)) => Err(self.error(span)),
            None => unreachable!("`fill` always queues a token"),
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Returns a [`LexError`] if no token matches at the current position. The position is not
    /// advanced in that case.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.peek_token()?.clone();
        if !token.is_eof() {
            self.pending.pop_front();
        }
        Ok(token)
    }
}

/// Returns true if the numeric lexeme is a negative zero, such as `-0`, `-0.00` or `-.0`.
fn is_negative_zero(lexeme: &str) -> bool {
    lexeme.strip_prefix('-')
        .is_some_and(|digits| digits.bytes().all(|b| b == b'0' || b == b'.'))
}
