//! A precedence-climbing parser over two explicit stacks.
//!
//! The grammar is:
//!
//! ```text
//! E --> P { B P }
//! P --> Terminal | '(' E ')' | U P
//! Terminal --> number | constant | variable
//! ```
//!
//! where `B` is any binary operator and `U` is any unary operator. Operators are pushed onto the
//! operator stack, reducing any operator already there that outranks them (see
//! [`StackOp::outranks`]). Reducing an operator pops its operands from the operand stack and
//! pushes back the node built from them, simplified.

pub mod error;
pub mod op;

use dx_compute::{Expr, Number};
use dx_error::Error;
use std::ops::Range;
use crate::tokenizer::{Lexer, Token, TokenKind};
use error::SyntaxError;
use op::StackOp;

/// What the parser expects at the start of an operand.
const EXPECTED_OPERAND: &str = "a number, a constant, a variable, `(`, or a unary operator";

/// Parses an expression from source code, simplifying it as it is built.
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(input).parse()
}

/// A parser for a single expression.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The stream of tokens being parsed.
    lexer: Lexer<'source>,

    /// The operators that have not been reduced yet.
    operators: Vec<StackOp>,

    /// The operands built so far, with the region of the source code each was parsed from.
    operands: Vec<(Expr, Range<usize>)>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source),
            operators: Vec::new(),
            operands: Vec::new(),
        }
    }

    /// Parses the whole source as a single expression.
    pub fn parse(mut self) -> Result<Expr, Error> {
        self.operators.push(StackOp::Sentinel);
        self.parse_expr()?;
        self.expect(None, "end of input")?;

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some((expr, _)), true) => Ok(expr),
            _ => unreachable!("a complete parse leaves exactly one operand"),
        }
    }

    /// Creates a [`SyntaxError`] pointing at the given token.
    fn error(&self, token: &Token, expected: &'static str) -> Error {
        Error::new(vec![token.span.clone()], SyntaxError {
            index: token.span.start,
            input: self.lexer.input().to_string(),
            expected,
            found: token.describe(),
        })
    }

    /// Consumes the next token, which must be of the given kind (`None` for the end of input).
    fn expect(&mut self, kind: Option<TokenKind>, expected: &'static str) -> Result<Token<'source>, Error> {
        let token = self.lexer.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.error(&token, expected))
        }
    }

    /// `E --> P { B P }`
    fn parse_expr(&mut self) -> Result<(), Error> {
        self.parse_primary()?;

        while let Some(op) = self.lexer.peek_token()?.as_binary_op() {
            let token = self.lexer.next_token()?;
            self.push_operator(StackOp::Binary(op, token.span))?;
            self.parse_primary()?;
        }

        while !matches!(self.operators.last(), Some(StackOp::Sentinel) | None) {
            self.pop_operator()?;
        }

        Ok(())
    }

    /// `P --> Terminal | '(' E ')' | U P`
    fn parse_primary(&mut self) -> Result<(), Error> {
        let token = self.lexer.next_token()?;

        if token.is_terminal() {
            let expr = self.terminal(&token)?;
            self.operands.push((expr, token.span));
        } else if token.kind == Some(TokenKind::OpenParen) {
            self.operators.push(StackOp::Sentinel);
            self.parse_expr()?;
            let close = self.expect(Some(TokenKind::CloseParen), "`)`")?;
            self.operators.pop();

            // the parenthesized operand covers its parentheses
            if let Some((_, span)) = self.operands.last_mut() {
                *span = token.span.start..close.span.end;
            }
        } else if let Some(op) = token.as_unary_op() {
            self.push_operator(StackOp::Unary(op, token.span))?;
            self.parse_primary()?;
        } else {
            return Err(self.error(&token, EXPECTED_OPERAND));
        }

        Ok(())
    }

    /// Builds the leaf expression for a terminal token.
    fn terminal(&self, token: &Token) -> Result<Expr, Error> {
        let expr = match token.kind {
            Some(TokenKind::Variable) => Expr::variable(token.lexeme),
            _ => Expr::Constant(Number::parse(token.lexeme).map_err(|err| err.or_span(token.span.clone()))?),
        };
        Ok(expr)
    }

    /// Pushes an operator, first reducing every operator on top of the stack that outranks it.
    fn push_operator(&mut self, op: StackOp) -> Result<(), Error> {
        while self.operators.last().is_some_and(|top| top.outranks(&op)) {
            self.pop_operator()?;
        }
        self.operators.push(op);
        Ok(())
    }

    /// Pops the operand on top of the operand stack.
    fn pop_operand(&mut self) -> (Expr, Range<usize>) {
        match self.operands.pop() {
            Some(operand) => operand,
            None => unreachable!("every operator is pushed before its operands are parsed"),
        }
    }

    /// Pops the operator on top of the stack and replaces its operands with the node built from
    /// them.
    fn pop_operator(&mut self) -> Result<(), Error> {
        let reduced = match self.operators.pop() {
            Some(StackOp::Unary(op, op_span)) => {
                let (operand, span) = self.pop_operand();
                (Expr::unary(op, operand), op_span.start..span.end)
            },
            Some(StackOp::Binary(op, _)) => {
                let (rhs, rhs_span) = self.pop_operand();
                let (lhs, lhs_span) = self.pop_operand();
                let span = lhs_span.start..rhs_span.end;
                let expr = Expr::binary(op, lhs, rhs).map_err(|err| err.or_span(span.clone()))?;
                (expr, span)
            },
            Some(StackOp::Sentinel) | None => unreachable!("sentinels are only removed by the rule that pushed them"),
        };

        self.operands.push(reduced);
        Ok(())
    }
}
