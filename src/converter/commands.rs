//! Command Translations
//!
//! Maps one CMake statement to at most one Meson line. The vocabulary is a
//! fixed table; every name outside it becomes a `# name` marker.

use std::collections::HashMap;

use crate::ast::types::{Argument, Statement};
use crate::converter::errors::StatementError;
use crate::parser::lexer::{Token, TokenType};

/// Commands that produce no output at all
pub const IGNORED_COMMANDS: &[&str] = &["cmake_minimum_required", "enable_testing", "include"];

/// How a statement is translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `# ...` comment, copied verbatim
    Comment,
    /// Dropped without a trace
    Ignored,
    /// `add_subdirectory(D)` → `subdir('D')`
    Subdirectory,
    /// `pkg_search_module(VAR a b)` → `var = [dependency('a'), dependency('b')]`
    ModuleSearch,
    /// `find_package(P)` → `P_dep = dependency('P')`
    FindPackage,
    /// `project(Name LANG...)` → `project('Name', 'lang', ...)`
    Project,
    /// `set(VAR values...)` → `var = values`
    Set,
    /// Anything else; leaves a `# name` marker
    Untranslated,
}

lazy_static::lazy_static! {
    static ref COMMANDS: HashMap<&'static str, CommandKind> = {
        let mut m = HashMap::new();
        for name in IGNORED_COMMANDS {
            m.insert(*name, CommandKind::Ignored);
        }
        m.insert("add_subdirectory", CommandKind::Subdirectory);
        m.insert("pkg_search_module", CommandKind::ModuleSearch);
        m.insert("pkg_search_modules", CommandKind::ModuleSearch);
        m.insert("find_package", CommandKind::FindPackage);
        m.insert("project", CommandKind::Project);
        m.insert("set", CommandKind::Set);
        m
    };
}

impl CommandKind {
    /// Look up a command name. Matching is case-sensitive.
    pub fn of(name: &str) -> Self {
        COMMANDS.get(name).copied().unwrap_or(CommandKind::Untranslated)
    }

    /// Classify a parsed statement. Comments are recognized by their token,
    /// never by name.
    pub fn of_statement(stmt: &Statement) -> Self {
        if stmt.is_comment() {
            CommandKind::Comment
        } else {
            Self::of(&stmt.name)
        }
    }
}

/// Translate one statement into its output line, if it has one.
pub fn convert_statement(stmt: &Statement) -> Result<Option<String>, StatementError> {
    let line = match CommandKind::of_statement(stmt) {
        CommandKind::Comment => leading_value(stmt, "comment text")?.to_string(),
        CommandKind::Ignored => return Ok(None),
        CommandKind::Subdirectory => {
            format!("subdir({})", quote(subdirectory_of(stmt)?))
        }
        CommandKind::ModuleSearch => {
            let binding = leading_value(stmt, "a result variable")?.to_lowercase();
            let modules = stmt.args[1..]
                .iter()
                .map(|arg| Ok(format!("dependency({})", quote(value_of(stmt, arg)?))))
                .collect::<Result<Vec<_>, StatementError>>()?;
            if modules.len() == 1 {
                format!("{} = {}", binding, modules[0])
            } else {
                format!("{} = [{}]", binding, modules.join(", "))
            }
        }
        CommandKind::FindPackage => {
            let package = leading_value(stmt, "a package name")?;
            format!("{}_dep = dependency({})", package, quote(package))
        }
        CommandKind::Project => {
            let mut args = vec![quote(leading_value(stmt, "a project name")?)];
            for arg in &stmt.args[1..] {
                let language = value_of(stmt, arg)?.to_lowercase();
                let language = if language == "cxx" { "cpp".to_string() } else { language };
                args.push(quote(&language));
            }
            format!("project({})", args.join(", "))
        }
        CommandKind::Set => {
            let name = leading_value(stmt, "a variable name")?.to_lowercase();
            format!("{} = {}", name, render_values(stmt, &stmt.args[1..])?)
        }
        CommandKind::Untranslated => format!("# {}", stmt.name),
    };
    Ok(Some(line))
}

/// Directory named by an `add_subdirectory` statement.
pub fn subdirectory_of(stmt: &Statement) -> Result<&str, StatementError> {
    leading_value(stmt, "a source directory")
}

/// Render assignment values: nothing, one bare value, or a list.
fn render_values(stmt: &Statement, args: &[Argument]) -> Result<String, StatementError> {
    let values = args
        .iter()
        .map(|arg| render_value(stmt, arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(match values.len() {
        0 => String::new(),
        1 => values.into_iter().next().unwrap_or_default(),
        _ => format!("[{}]", values.join(", ")),
    })
}

fn render_value(stmt: &Statement, arg: &Argument) -> Result<String, StatementError> {
    match arg {
        Argument::Token(Token { token_type: TokenType::String | TokenType::Identifier, value, .. }) => {
            Ok(quote(value))
        }
        Argument::Token(Token { token_type: TokenType::VariableExpansion, value, .. }) => {
            Ok(value.clone())
        }
        other => Err(unexpected(stmt, other)),
    }
}

/// First argument as plain text.
fn leading_value<'s>(stmt: &'s Statement, expected: &'static str) -> Result<&'s str, StatementError> {
    match stmt.args.first() {
        Some(arg) => value_of(stmt, arg),
        None => Err(StatementError::MissingArgument {
            command: stmt.name.clone(),
            expected,
        }),
    }
}

fn value_of<'s>(stmt: &Statement, arg: &'s Argument) -> Result<&'s str, StatementError> {
    arg.value().ok_or_else(|| unexpected(stmt, arg))
}

fn unexpected(stmt: &Statement, arg: &Argument) -> StatementError {
    StatementError::UnexpectedArgument {
        command: stmt.name.clone(),
        found: arg.to_string(),
    }
}

/// Single-quoted Meson string literal.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "\\'"))
}
