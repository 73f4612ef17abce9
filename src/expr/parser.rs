// Recursive-descent parser with four precedence levels: or < xor < and < not

use std::fmt;

use thiserror::Error;

use super::lexer::{Lexer, SpannedToken, Token};
use super::tree::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingClosingParen,
    UnexpectedEnd,
    UnexpectedTrailingTokens,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingClosingParen => write!(f, "missing closing parenthesis"),
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseErrorKind::UnexpectedTrailingTokens => write!(f, "unexpected trailing tokens"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Parse a formula string into an expression tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(input).tokenize();
    let mut parser = Parser::new(tokens);
    parser.parse()
}

struct Parser {
    tokens: Vec<SpannedToken>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<SpannedToken>) -> Self {
        Self { tokens, current: 0 }
    }

    fn current_token(&self) -> &SpannedToken {
        // The token stream always ends in Eof, which is never consumed.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
    }

    fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;

        let trailing = self.current_token();
        if !matches!(trailing.token, Token::Eof) {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedTrailingTokens,
                trailing.position,
            ));
        }

        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_xor()?;
        while matches!(self.current_token().token, Token::Or) {
            self.advance();
            let right = self.parse_xor()?;
            left = Expr::or(left, right);
        }
        Ok(left)
    }

    fn parse_xor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while matches!(self.current_token().token, Token::Xor) {
            self.advance();
            let right = self.parse_and()?;
            left = Expr::xor(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while matches!(self.current_token().token, Token::And) {
            self.advance();
            let right = self.parse_not()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.current_token().token, Token::Not) {
            self.advance();
            let inner = self.parse_not()?;
            Ok(Expr::not(inner))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let spanned = self.current_token().clone();
        match spanned.token {
            Token::Const(value) => {
                self.advance();
                Ok(Expr::constant(value))
            }
            Token::Ident(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_or()?;
                let closing = self.current_token();
                if matches!(closing.token, Token::RParen) {
                    self.advance();
                    Ok(inner)
                } else {
                    Err(ParseError::new(
                        ParseErrorKind::MissingClosingParen,
                        closing.position,
                    ))
                }
            }
            Token::Eof => Err(ParseError::new(
                ParseErrorKind::UnexpectedEnd,
                spanned.position,
            )),
            _ => Err(ParseError::new(
                ParseErrorKind::UnexpectedTrailingTokens,
                spanned.position,
            )),
        }
    }
}
