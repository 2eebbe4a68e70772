//! Recursive Descent Parser for CMake Build Files
//!
//! The parser pulls tokens from the lexer with one token of lookahead and
//! yields statements lazily, in source order.
//!
//! Grammar:
//!   statement  ::= Comment
//!                | Identifier '(' arguments ')'
//!   arguments  ::= ( '(' arguments ')' arguments? )?
//!                  ( (String | VariableExpansion | Identifier) arguments? )?

use crate::ast::types::{Argument, Statement};
use crate::parser::lexer::{Lexer, Token, TokenType};
use crate::parser::types::{ParseException, MAX_PARSER_DEPTH};

/// Single-pass statement cursor over one source text.
///
/// Iteration stops after the first error.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    done: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: None,
            done: false,
        }
    }

    // ===========================================================================
    // HELPER METHODS
    // ===========================================================================

    /// Pull the next token from the lexer, or an end-of-input marker.
    fn getsym(&mut self) -> Result<Token, ParseException> {
        match self.lexer.next() {
            Some(token) => Ok(token?),
            None => {
                let (line, column) = self.lexer.location();
                Ok(Token::new(TokenType::Eof, "", line, column))
            }
        }
    }

    /// The lookahead token, fetched on first use.
    fn current(&mut self) -> Result<&Token, ParseException> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.getsym()?,
        };
        Ok(self.current.insert(token))
    }

    fn check(&mut self, types: &[TokenType]) -> Result<bool, ParseException> {
        let current_type = self.current()?.token_type;
        Ok(types.contains(&current_type))
    }

    /// Consume the lookahead token if it is one of `types`.
    fn accept(&mut self, types: &[TokenType]) -> Result<Option<Token>, ParseException> {
        if !self.check(types)? {
            return Ok(None);
        }
        Ok(self.current.take())
    }

    fn expect(&mut self, token_type: TokenType) -> Result<Token, ParseException> {
        match self.accept(&[token_type])? {
            Some(token) => Ok(token),
            None => Err(ParseException::unexpected(token_type.as_str(), self.current()?.clone())),
        }
    }

    // ===========================================================================
    // GRAMMAR
    // ===========================================================================

    fn statement(&mut self) -> Result<Statement, ParseException> {
        if let Some(comment) = self.accept(&[TokenType::Comment])? {
            return Ok(Statement::comment(comment));
        }

        let name = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::LParen)?;
        let args = self.arguments(0)?;
        self.expect(TokenType::RParen)?;

        Ok(Statement::new(name.value, args, name.line, name.column))
    }

    /// Collect arguments up to (not including) the closing paren.
    ///
    /// Nested groups recurse; a run of plain values is gathered in a loop,
    /// which yields the same right-associated list as recursing per value.
    fn arguments(&mut self, depth: usize) -> Result<Vec<Argument>, ParseException> {
        let mut args = Vec::new();
        loop {
            if let Some(lparen) = self.accept(&[TokenType::LParen])? {
                if depth >= MAX_PARSER_DEPTH {
                    return Err(ParseException::with_token(
                        format!("nesting too deep (more than {} levels)", MAX_PARSER_DEPTH),
                        lparen.line,
                        lparen.column,
                        lparen,
                    ));
                }
                let group = self.arguments(depth + 1)?;
                self.expect(TokenType::RParen)?;
                args.push(Argument::Group(group));
                continue;
            }

            let value = self.accept(&[
                TokenType::String,
                TokenType::VariableExpansion,
                TokenType::Identifier,
            ])?;
            match value {
                Some(token) => args.push(Argument::Token(token)),
                None => break,
            }
        }
        Ok(args)
    }

    fn next_statement(&mut self) -> Result<Option<Statement>, ParseException> {
        if self.check(&[TokenType::Eof])? {
            return Ok(None);
        }
        self.statement().map(Some)
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement, ParseException>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_statement() {
            Ok(Some(stmt)) => Some(Ok(stmt)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse a whole CMake source text into its statement sequence
pub fn parse(input: &str) -> Result<Vec<Statement>, ParseException> {
    Parser::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(args: &[Argument]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_simple_command() {
        let stmts = parse(r#"set(SOURCES "a.c" "b.c")"#).unwrap();
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].name, "set");
        assert_eq!(values(&stmts[0].args), vec!["SOURCES", "\"a.c\"", "\"b.c\""]);
    }

    #[test]
    fn test_parse_no_arguments() {
        let stmts = parse("enable_testing()").unwrap();
        assert_eq!(stmts[0].name, "enable_testing");
        assert!(stmts[0].args.is_empty());
    }

    #[test]
    fn test_parse_comments_interleaved() {
        let stmts = parse("# head\nproject(Foo)\n# tail").unwrap();
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[0].comment_text(), Some("# head"));
        assert_eq!(stmts[1].name, "project");
        assert_eq!(stmts[2].comment_text(), Some("# tail"));
    }

    #[test]
    fn test_parse_nested_groups() {
        let stmts = parse("if((A OR B) AND (C))").unwrap();
        let args = &stmts[0].args;
        assert_eq!(args.len(), 3);
        assert!(matches!(&args[0], Argument::Group(inner) if inner.len() == 3));
        assert_eq!(args[1].value(), Some("AND"));
        assert_eq!(args[2].to_string(), "(C)");
    }

    #[test]
    fn test_parse_deeply_nested_group() {
        let stmts = parse("f(((x)))").unwrap();
        assert_eq!(stmts[0].args[0].to_string(), "((x))");
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |levels: usize| {
            format!("f({}x{})", "(".repeat(levels), ")".repeat(levels))
        };
        assert!(parse(&nested(MAX_PARSER_DEPTH)).is_ok());

        let err = parse(&nested(200_000)).unwrap_err();
        assert!(err.message.starts_with("nesting too deep"));
        assert_eq!(err.found(), Some(TokenType::LParen));
        assert_eq!((err.line, err.column), (1, MAX_PARSER_DEPTH + 3));
    }

    #[test]
    fn test_statement_position() {
        let stmts = parse("project(Foo)\n\n  set(A b)").unwrap();
        assert_eq!((stmts[1].line, stmts[1].column), (3, 3));
    }

    #[test]
    fn test_missing_rparen_at_eof() {
        let err = parse("set(A B").unwrap_err();
        assert_eq!(err.found(), Some(TokenType::Eof));
        assert!(err.message.contains("expected ')'"));
    }

    #[test]
    fn test_missing_lparen() {
        let err = parse("project Foo").unwrap_err();
        assert_eq!(err.message, "expected '(', found identifier");
        assert_eq!((err.line, err.column), (1, 9));
    }

    #[test]
    fn test_statement_must_start_with_identifier() {
        let err = parse("(foo)").unwrap_err();
        assert_eq!(err.found(), Some(TokenType::LParen));
        assert!(err.message.starts_with("expected identifier"));
    }

    #[test]
    fn test_comment_inside_arguments_is_rejected() {
        let err = parse("set(A # note\n B)").unwrap_err();
        assert_eq!(err.found(), Some(TokenType::Comment));
    }

    #[test]
    fn test_lexer_error_surfaces_with_position() {
        let err = parse("set(A)\nset(B |)").unwrap_err();
        assert_eq!((err.line, err.column), (2, 7));
        assert!(err.token.is_none());
    }

    #[test]
    fn test_lazy_statements_stop_after_error() {
        let mut parser = Parser::new("set(A 1)\nset(B\nset(C 3)");
        assert!(parser.next().unwrap().is_ok());
        assert!(parser.next().unwrap().is_err());
        assert!(parser.next().is_none());
    }
}
