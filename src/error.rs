//! FILENAME: src/error.rs
//! PURPOSE: Error classification for expression evaluation.
//! CONTEXT: Evaluation failures form a closed, flat set of kinds with a
//! fixed message vocabulary. The deepest failing grammar step picks the
//! most specific kind and it propagates to the caller unchanged; the
//! generic `SyntaxError` is only produced where nothing more specific
//! applies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of an evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed expression text (unexpected or trailing tokens).
    SyntaxError,
    /// Malformed numeric literal (e.g. `0x8FG`, `0b2`, out of range).
    InvalidLiteral,
    /// Identifier bound as neither variable nor function.
    UnknownIdentifier,
    /// Function called with a different argument count than it declares.
    ArgNumMismatch,
    /// Right operand of `/` or `%` evaluated to zero.
    DivideByZero,
}

impl ErrorKind {
    /// Canonical message for this kind. The vocabulary is fixed for
    /// compatibility; hosts match on it.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "Syntax error",
            ErrorKind::InvalidLiteral => "Invalid literal",
            ErrorKind::UnknownIdentifier => "Unknown identifier",
            ErrorKind::ArgNumMismatch => "Argument number mismatch",
            ErrorKind::DivideByZero => "Divide by zero",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// An evaluation failure carrying its [`ErrorKind`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: ErrorKind,
}

impl From<ErrorKind> for EvalError {
    fn from(kind: ErrorKind) -> Self {
        EvalError { kind }
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
