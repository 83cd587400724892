//! Tern Eval - tree-walking evaluator for the Tern scripting language.
//!
//! The input is an already-built `tern_ir::Ast`; the output is the program's
//! side effects (print lines, mutated bindings) or exactly one `EvalError`.
//!
//! # Architecture
//!
//! - `Value`: tagged runtime values; strings, objects, functions and classes
//!   are shared through `Heap<T>`
//! - `Variable`: a named, typed, mutable cell that every alias observes
//! - `Environment`: per-block frames, resolved along `Ast::scope_chain`
//! - `Completion`: how a statement finished, carrying `return` values to the
//!   call boundary
//! - `evaluate_binary` / `evaluate_unary`: operator dispatch on coerced
//!   operands
//! - `Interpreter` / `InterpreterBuilder`: the evaluator and its configuration
//!
//! # Example
//!
//! ```
//! use tern_eval::{buffer_handler, InterpreterBuilder};
//! use tern_ir::{Ast, Literal, NodeKind, StringInterner};
//!
//! let interner = StringInterner::new();
//! let mut ast = Ast::new();
//! let text = ast.alloc(1, NodeKind::Literal(Literal::String("hi".into())));
//! let print = ast.alloc_with(1, NodeKind::Print, [text]).unwrap();
//! let root = ast.alloc_with(1, NodeKind::Block, [print]).unwrap();
//!
//! let handler = buffer_handler();
//! let mut interpreter = InterpreterBuilder::new(&interner, &ast)
//!     .print_handler(handler.clone())
//!     .build();
//! interpreter.execute(root).unwrap();
//! assert_eq!(handler.get_output(), "hi\n");
//! ```

mod control;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;
mod value;
mod variable;

pub use control::{Completion, ExecResult};
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{
    format_number, ClassValue, FunctionValue, Heap, ObjectRef, ObjectValue, Value, ValueDisplay,
};
pub use variable::Variable;
