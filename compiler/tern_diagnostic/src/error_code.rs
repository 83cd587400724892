use std::fmt;

/// Error codes for evaluator diagnostics.
///
/// Format: E#### where the leading digits give the category:
/// - E60xx: Arithmetic
/// - E601x: Types and casts
/// - E602x: Name and member resolution
/// - E603x: Calls and instantiation
/// - E604x: Control flow
/// - E9xxx: Internal errors (malformed trees)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Division by zero
    E6001,
    /// Value does not match the declared type
    E6010,
    /// Value cannot be cast to an object
    E6011,
    /// Undeclared variable
    E6020,
    /// Undeclared class in a type position
    E6021,
    /// Member assignment to an undeclared member
    E6022,
    /// Wrong number of call arguments
    E6030,
    /// Call depth limit exceeded
    E6031,
    /// Callee is not a function
    E6032,
    /// `new` target is not a class
    E6033,
    /// Class declares more than one constructor
    E6034,
    /// `return` executed outside a function call
    E6040,
    /// Malformed syntax tree
    E9001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6021 => "E6021",
            ErrorCode::E6022 => "E6022",
            ErrorCode::E6030 => "E6030",
            ErrorCode::E6031 => "E6031",
            ErrorCode::E6032 => "E6032",
            ErrorCode::E6033 => "E6033",
            ErrorCode::E6034 => "E6034",
            ErrorCode::E6040 => "E6040",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
