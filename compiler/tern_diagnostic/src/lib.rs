//! Diagnostics for Tern.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Source line (where it went wrong)
//! - Notes (extra context)
//!
//! The evaluator converts its errors into `Diagnostic`s; the driver decides
//! how to print them.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
