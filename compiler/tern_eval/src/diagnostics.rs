//! Conversion of evaluation errors into diagnostics.
//!
//! Error code ranges:
//! - E6001: arithmetic
//! - E6010-E6019: types and casts
//! - E6020-E6029: name and member resolution
//! - E6030-E6039: calls and instantiation
//! - E6040-E6049: control flow
//! - E9001: malformed tree

use tern_diagnostic::{Diagnostic, ErrorCode};

use crate::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    /// Map this error kind to its `ErrorCode`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::E6001,

            Self::TypeMismatch { .. } => ErrorCode::E6010,
            Self::CastError { .. } => ErrorCode::E6011,

            Self::UndeclaredVariable { .. } => ErrorCode::E6020,
            Self::UndeclaredClass { .. } => ErrorCode::E6021,
            Self::NoMember { .. } => ErrorCode::E6022,

            Self::ParameterNumber { .. } => ErrorCode::E6030,
            Self::RecursionLimit { .. } => ErrorCode::E6031,
            Self::NotAFunction { .. } => ErrorCode::E6032,
            Self::NotAClass { .. } => ErrorCode::E6033,
            Self::MultipleConstructors { .. } => ErrorCode::E6034,

            Self::ReturnOutsideFunction => ErrorCode::E6040,

            Self::MalformedTree { .. } => ErrorCode::E9001,
        }
    }

    /// Follow-up hint for errors with an obvious fix.
    fn note(&self) -> Option<String> {
        match self {
            Self::UndeclaredVariable { name } => {
                Some(format!("declare `{name}` with `var` before using it"))
            }
            Self::NoMember { class, member } => {
                Some(format!("add a `{member}` field to class {class}"))
            }
            Self::MultipleConstructors { .. } => {
                Some("a class may declare at most one constructor".to_string())
            }
            Self::RecursionLimit { .. } => {
                Some("raise the limit with `InterpreterBuilder::max_call_depth`".to_string())
            }
            _ => None,
        }
    }
}

impl EvalError {
    /// Convert this error into a line-attributed `Diagnostic`.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.message())
            .with_line(self.line);
        if let Some(note) = self.kind.note() {
            diag = diag.with_note(note);
        }
        diag
    }
}
