//! Parser Types
//!
//! Error type shared by the lexer and parser stages.

use std::fmt;
use thiserror::Error;

use crate::parser::lexer::{LexerError, Token, TokenType};

/// Max nesting of parenthesized argument groups
pub const MAX_PARSER_DEPTH: usize = 200;

/// Fatal lexical or syntax error
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ParseException {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub token: Option<Token>,
}

impl fmt::Display for ParseException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at {}:{}: {}", self.line, self.column, self.message)
    }
}

impl ParseException {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            token: None,
        }
    }

    pub fn with_token(message: impl Into<String>, line: usize, column: usize, token: Token) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            token: Some(token),
        }
    }

    /// Syntax error for a token of the wrong kind.
    pub fn unexpected(expected: &str, found: Token) -> Self {
        let message = format!("expected {}, found {}", expected, found.token_type.as_str());
        Self::with_token(message, found.line, found.column, found)
    }

    /// Kind of the offending token, if any.
    pub fn found(&self) -> Option<TokenType> {
        self.token.as_ref().map(|t| t.token_type)
    }
}

impl From<LexerError> for ParseException {
    fn from(e: LexerError) -> Self {
        Self::new(e.message, e.line, e.column)
    }
}
