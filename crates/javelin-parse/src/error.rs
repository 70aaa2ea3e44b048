use crate::token::{Tok, TokKind};
use std::fmt;

/// The analyzer's single error channel: a structural syntax error carrying
/// the expected and actual token kinds and the position of the offending
/// token. `context` names the enclosing construct when a body runs into EOF
/// before its closing brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub expected: TokKind,
    pub found: TokKind,
    pub line: u32,
    pub column: u32,
    pub context: Option<String>,
}

impl SyntaxError {
    pub fn new(expected: TokKind, found: &Tok) -> Self {
        Self {
            expected,
            found: found.kind,
            line: found.line,
            column: found.column,
            context: None,
        }
    }

    pub fn in_context(mut self, what: impl Into<String>) -> Self {
        self.context = Some(what.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syntax error at {}:{}: expected {:?}, found {:?}",
            self.line, self.column, self.expected, self.found
        )?;
        if let Some(ctx) = &self.context {
            write!(f, " in {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
