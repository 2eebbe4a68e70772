//! Syntax Tree Types for CMake Build Files
//!
//! A CMake file is a flat sequence of command invocations. There is no
//! nesting at the statement level; only argument lists can nest, through
//! parenthesized groups.

use std::fmt;

use crate::parser::lexer::{Token, TokenType};

/// Statement name used for pass-through comments.
pub const COMMENT_STATEMENT: &str = "_";

/// A single command argument
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A String, VariableExpansion or Identifier token
    Token(Token),
    /// A parenthesized sub-group: `(a b (c))`
    Group(Vec<Argument>),
}

impl Argument {
    /// The token payload, if this is a leaf argument.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Argument::Token(t) => Some(t),
            Argument::Group(_) => None,
        }
    }

    /// The payload text of a leaf argument.
    pub fn value(&self) -> Option<&str> {
        self.as_token().map(|t| t.value.as_str())
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Token(t) => match t.token_type {
                TokenType::String => write!(f, "\"{}\"", t.value),
                TokenType::VariableExpansion => write!(f, "${{{}}}", t.value),
                _ => write!(f, "{}", t.value),
            },
            Argument::Group(args) => {
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// One command invocation `name(args...)`, or a pass-through comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub name: String,
    pub args: Vec<Argument>,
    pub line: usize,
    pub column: usize,
}

impl Statement {
    pub fn new(name: impl Into<String>, args: Vec<Argument>, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            args,
            line,
            column,
        }
    }

    /// Build a comment statement carrying the raw comment token.
    pub fn comment(token: Token) -> Self {
        let (line, column) = (token.line, token.column);
        Self::new(COMMENT_STATEMENT, vec![Argument::Token(token)], line, column)
    }

    /// True only for statements built from a comment token; a command
    /// spelled `_(...)` is an ordinary call.
    pub fn is_comment(&self) -> bool {
        self.name == COMMENT_STATEMENT
            && matches!(
                self.args.as_slice(),
                [Argument::Token(Token { token_type: TokenType::Comment, .. })]
            )
    }

    /// Raw comment text, including the leading `#`.
    pub fn comment_text(&self) -> Option<&str> {
        if !self.is_comment() {
            return None;
        }
        self.args.first().and_then(Argument::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(token_type: TokenType, value: &str) -> Token {
        Token::new(token_type, value, 1, 1)
    }

    #[test]
    fn test_argument_display_restores_syntax() {
        let arg = Argument::Group(vec![
            Argument::Token(tok(TokenType::Identifier, "NOT")),
            Argument::Token(tok(TokenType::VariableExpansion, "FOO")),
            Argument::Token(tok(TokenType::String, "a b")),
        ]);
        assert_eq!(arg.to_string(), "(NOT ${FOO} \"a b\")");
    }

    #[test]
    fn test_comment_statement() {
        let stmt = Statement::comment(tok(TokenType::Comment, "# hello"));
        assert!(stmt.is_comment());
        assert_eq!(stmt.comment_text(), Some("# hello"));

        let call = Statement::new("set", vec![], 3, 1);
        assert!(!call.is_comment());
        assert_eq!(call.comment_text(), None);
    }

    #[test]
    fn test_underscore_command_is_not_a_comment() {
        let call = Statement::new(
            COMMENT_STATEMENT,
            vec![Argument::Token(tok(TokenType::Identifier, "hello"))],
            1,
            1,
        );
        assert!(!call.is_comment());
        assert_eq!(call.comment_text(), None);
    }

    #[test]
    fn test_group_has_no_value() {
        let group = Argument::Group(vec![]);
        assert!(group.as_token().is_none());
        assert_eq!(group.value(), None);
    }
}
