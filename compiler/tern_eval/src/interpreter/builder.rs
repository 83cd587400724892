//! `InterpreterBuilder` for creating `Interpreter` instances.

use tern_ir::{Ast, StringInterner};

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: output to stdout, call depth limited to
/// `DEFAULT_MAX_CALL_DEPTH`.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    ast: &'a Ast,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, ast: &'a Ast) -> Self {
        Self {
            interner,
            ast,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested calls; `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            ast: self.ast,
            env: Environment::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            constructor_name: self.interner.intern("constructor"),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
            root: None,
        }
    }
}
