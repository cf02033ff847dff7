//! Binding-power (Pratt) parser
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type and
//! the [`parse`] entry points.
//!
//! # Algorithm
//!
//! [`Parser::parse_expression`] reads one leading item (a leading operator or
//! a bare atom) and then loops over following operators. A following operator
//! whose left binding power is not greater than the current minimum stops the
//! loop, which is how precedence and associativity fall out of the numbers in
//! the [`Grammar`]. When the next token is neither a following operator nor a
//! closing bracket, the grammar's default infix operator joins the two
//! neighbouring expressions (implicit multiplication such as `2x`).
//!
//! The parser owns a cursor into an immutable token slice, so each parse call
//! is independent and the grammar can be shared freely.

use super::ast::{SExpr, SourceLocation};
use super::grammar::{self, Grammar, Operator, OperatorKind};
use super::lexer::{tokenize, Token};
use thiserror::Error;

/// Upper bound on following-loop iterations for one top-level parse
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected an expression but the input ended")]
    EmptyTokenStream,

    #[error("unexpected token '{found}' at {location}, expected '{expected}'")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        location: SourceLocation,
    },

    #[error("missing '{expected}' to close '{operator}'")]
    MissingClosingSymbol {
        expected: &'static str,
        operator: &'static str,
    },

    #[error("unexpected trailing tokens at {location}: [{}]", .remaining.join(", "))]
    TrailingTokens {
        remaining: Vec<String>,
        location: SourceLocation,
    },

    #[error("parser made more than {limit} steps; the grammar is looping")]
    RunawayIterationGuard { limit: usize },
}

/// Binding-power parser over a token slice
pub struct Parser<'g, 'a> {
    grammar: &'g Grammar,
    tokens: &'a [Token<'a>],
    position: usize,
    iterations: usize,
    iteration_limit: usize,
}

impl<'g, 'a> Parser<'g, 'a> {
    pub fn new(grammar: &'g Grammar, tokens: &'a [Token<'a>]) -> Self {
        Parser {
            grammar,
            tokens,
            position: 0,
            iterations: 0,
            iteration_limit: MAX_ITERATIONS,
        }
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Parse the whole token slice as one expression
    pub fn parse(&mut self) -> Result<SExpr<'g>, ParseError> {
        let expr = self.parse_expression(0)?;
        if let Some(next) = self.peek() {
            return Err(ParseError::TrailingTokens {
                remaining: self.tokens[self.position..]
                    .iter()
                    .map(|t| t.text.to_string())
                    .collect(),
                location: next.location,
            });
        }
        log::debug!(
            "parsed {} tokens in {} steps",
            self.tokens.len(),
            self.iterations
        );
        Ok(expr)
    }

    /// Parse one expression whose following operators bind tighter than
    /// `min_bp`
    pub fn parse_expression(&mut self, min_bp: u32) -> Result<SExpr<'g>, ParseError> {
        let token = self.advance().ok_or(ParseError::EmptyTokenStream)?;
        let grammar = self.grammar;

        let mut lhs = match grammar.leading_for(token.text) {
            Some(op) => self.parse_leading(op)?,
            None => SExpr::leaf(token.text),
        };

        loop {
            self.iterations += 1;
            if self.iterations > self.iteration_limit {
                return Err(ParseError::RunawayIterationGuard {
                    limit: self.iteration_limit,
                });
            }

            let Some(next) = self.peek() else {
                return Ok(lhs);
            };

            if let Some(op) = grammar.following_for(next.text) {
                let left_bp = op.kind.left_bp().unwrap_or(0);
                if left_bp <= min_bp {
                    return Ok(lhs);
                }
                log::trace!("following '{}' at {} (bp {left_bp} > {min_bp})", op.name, next.location);
                self.advance();

                let mut node = SExpr::node(op, vec![lhs]);
                self.parse_interior(op, &mut node)?;
                if let OperatorKind::Infix { right_bp, .. } = op.kind {
                    node.children.push(self.parse_expression(right_bp)?);
                }
                lhs = node;
                continue;
            }

            if grammar.is_closing_symbol(next.text) {
                return Ok(lhs);
            }

            let adjacency = grammar.default_infix();
            let (left_bp, right_bp) = match adjacency.kind {
                OperatorKind::Infix { left_bp, right_bp } => (left_bp, right_bp),
                _ => return Ok(lhs),
            };
            if left_bp <= min_bp {
                return Ok(lhs);
            }
            log::trace!("implicit '{}' before {}", adjacency.name, next);
            let rhs = self.parse_expression(right_bp)?;
            lhs = SExpr::node(adjacency, vec![lhs, rhs]);
        }
    }

    /// Parse what follows the opening symbol of a leading operator
    fn parse_leading(&mut self, op: &'g Operator) -> Result<SExpr<'g>, ParseError> {
        let mut node = SExpr::node(op, Vec::new());

        match op.kind {
            OperatorKind::Paren => {
                // `()` has no inner expression
                if let (Some(close), Some(next)) = (op.interior().first(), self.peek()) {
                    if next.text == *close {
                        self.advance();
                        return Ok(node);
                    }
                }
                self.parse_interior(op, &mut node)?;
            }
            OperatorKind::Prefix { right_bp } => {
                self.parse_interior(op, &mut node)?;
                node.children.push(self.parse_expression(right_bp)?);
            }
            OperatorKind::Postfix { .. } | OperatorKind::Infix { .. } => {
                self.parse_interior(op, &mut node)?;
            }
        }

        Ok(node)
    }

    /// Parse an inner expression before each interior symbol of `op`
    fn parse_interior(&mut self, op: &'g Operator, node: &mut SExpr<'g>) -> Result<(), ParseError> {
        for &expected in op.interior() {
            node.children.push(self.parse_expression(0)?);
            match self.advance() {
                None => {
                    return Err(ParseError::MissingClosingSymbol {
                        expected,
                        operator: op.name,
                    })
                }
                Some(found) if found.text != expected => {
                    return Err(ParseError::UnexpectedToken {
                        found: found.text.to_string(),
                        expected,
                        location: found.location,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    // ===== Cursor helpers =====

    fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token<'a>> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }
}

/// Parse a token slice with the standard grammar
pub fn parse_tokens<'a>(tokens: &'a [Token<'a>]) -> Result<SExpr<'static>, ParseError> {
    Parser::new(grammar::standard(), tokens).parse()
}

/// Tokenize and parse `text` with the standard grammar
pub fn parse(text: &str) -> Result<SExpr<'static>, ParseError> {
    let tokens = tokenize(text);
    parse_tokens(&tokens)
}
