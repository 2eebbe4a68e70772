//! Lexer for CMake Build Files
//!
//! The lexer turns source text into a lazy stream of tokens that the parser
//! pulls one at a time. Matching walks an ordered pattern table and takes
//! the first pattern that matches at the current position:
//! - Whitespace and newlines (consumed, never emitted)
//! - Comments (`#` to end of line, emitted so they survive conversion)
//! - Variable expansions (`${NAME}`)
//! - Quoted strings (with backslash escapes, possibly multi-line)
//! - Parentheses
//! - Identifiers
//!
//! The identifier pattern is broad enough to swallow `$`, `{` and `}`, so it
//! must stay last.

use regex_lite::Regex;
use thiserror::Error;

/// Token types for the CMake lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Comment,
    String,
    VariableExpansion,
    Identifier,
    LParen,
    RParen,

    /// Synthesized by the parser once the lexer is exhausted
    Eof,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::VariableExpansion => "variable expansion",
            Self::Identifier => "identifier",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Eof => "end of input",
        }
    }
}

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    /// Payload with enclosing syntax stripped (quotes, `${}`)
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        value: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            token_type,
            value: value.into(),
            line,
            column,
        }
    }
}

/// Error raised when no pattern matches the input
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexerError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Whitespace,
    Newline,
    Comment,
    VariableExpansion,
    String,
    LParen,
    RParen,
    Identifier,
}

lazy_static::lazy_static! {
    /// Ordered pattern table. First match wins.
    static ref PATTERNS: Vec<(Pattern, Regex)> = {
        let table: &[(Pattern, &str)] = &[
            (Pattern::Whitespace, r"^[ \t\r]+"),
            (Pattern::Newline, r"^\n"),
            (Pattern::Comment, r"^#[^\r\n]*"),
            (Pattern::VariableExpansion, r"^\$\{[^}]+\}"),
            (Pattern::String, r#"(?s)^"(?:[^"\\]|\\.)*""#),
            (Pattern::LParen, r"^\("),
            (Pattern::RParen, r"^\)"),
            (Pattern::Identifier, r"^[-,./0-9:;<=>$@{}+_*a-zA-Z]+"),
        ];
        table
            .iter()
            .map(|(pattern, source)| {
                let re = Regex::new(source)
                    .unwrap_or_else(|e| panic!("invalid lexer pattern {:?}: {}", pattern, e));
                (*pattern, re)
            })
            .collect()
    };
}

/// Single-pass token cursor over one source text.
///
/// Iteration stops after the first error.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            line_start: 0,
            done: false,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(self) -> Result<Vec<Token>, LexerError> {
        self.collect()
    }

    /// Current line and column, used to place the end-of-input token.
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.column_at(self.pos))
    }

    fn column_at(&self, pos: usize) -> usize {
        self.input[self.line_start..pos].chars().count() + 1
    }

    fn match_pattern(&self) -> Option<(Pattern, usize)> {
        let rest = &self.input[self.pos..];
        PATTERNS
            .iter()
            .find_map(|(pattern, re)| re.find(rest).map(|m| (*pattern, m.end())))
    }

    /// Advance past `len` bytes, keeping line bookkeeping current.
    fn consume(&mut self, len: usize) -> &'a str {
        let input = self.input;
        let start = self.pos;
        let text = &input[start..start + len];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = start + i + 1;
            }
        }
        self.pos += len;
        text
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if self.pos >= self.input.len() {
                self.done = true;
                break;
            }

            let start = self.pos;
            let line = self.line;
            let column = self.column_at(start);

            let Some((pattern, len)) = self.match_pattern() else {
                self.done = true;
                let c = self.input[start..].chars().next().unwrap_or_default();
                return Some(Err(LexerError::new(
                    format!("unrecognized character {:?}", c),
                    line,
                    column,
                )));
            };

            let text = self.consume(len);
            let token = |token_type, value: &str| Token::new(token_type, value, line, column);

            let tok = match pattern {
                Pattern::Whitespace | Pattern::Newline => continue,
                Pattern::Comment => token(TokenType::Comment, text),
                Pattern::VariableExpansion => token(TokenType::VariableExpansion, &text[2..text.len() - 1]),
                Pattern::String => token(TokenType::String, &text[1..text.len() - 1]),
                Pattern::LParen => token(TokenType::LParen, "("),
                Pattern::RParen => token(TokenType::RParen, ")"),
                Pattern::Identifier => token(TokenType::Identifier, text),
            };
            return Some(Ok(tok));
        }
        None
    }
}
