//! Semantic errors raised during evaluation.
//!
//! `EvalErrorKind` is the closed set of error categories; every error carries
//! the line of the node that detected it. Factory functions are the
//! construction API and are marked `#[cold]` so the happy path stays tight.
//!
//! No error is caught inside the evaluator: each one propagates with `?` up to
//! `Interpreter::execute` and from there to the driver.

use std::fmt;

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Typed error category.
///
/// Payloads are rendered strings rather than `Name`s so an error outlives the
/// interner that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    UndeclaredVariable {
        name: String,
    },
    UndeclaredClass {
        name: String,
    },

    // Types
    /// A primitive, `null` or `undefined` used where an object is required.
    CastError {
        value: String,
        target: &'static str,
    },
    TypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    // Members
    NoMember {
        class: String,
        member: String,
    },

    // Calls
    NotAFunction {
        value: String,
    },
    NotAClass {
        name: String,
    },
    ParameterNumber {
        function: String,
        expected: usize,
        got: usize,
    },
    RecursionLimit {
        depth: usize,
    },

    // Arithmetic
    DivisionByZero,

    // Declarations
    MultipleConstructors {
        class: String,
    },

    // Control flow
    ReturnOutsideFunction,

    /// The tree does not have the child layout its node kind requires.
    MalformedTree {
        node: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredVariable { name } => {
                write!(f, "operation with undeclared variable \"{name}\"")
            }
            Self::UndeclaredClass { name } => {
                write!(f, "specifying undeclared class \"{name}\"")
            }
            Self::CastError { value, target } => write!(f, "cannot cast {value} to {target}"),
            Self::TypeMismatch {
                name,
                expected,
                got,
            } => write!(f, "variable {name} must be of type {expected}, got {got}"),
            Self::NoMember { class, member } => {
                write!(f, "instance of class {class} has no member {member}")
            }
            Self::NotAFunction { value } => write!(f, "{value} is not a function"),
            Self::NotAClass { name } => write!(f, "{name} is not a class"),
            Self::ParameterNumber {
                function,
                expected,
                got,
            } => write!(
                f,
                "invalid number of parameters for function {function}: expected {expected}, got {got}"
            ),
            Self::RecursionLimit { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::DivisionByZero => write!(f, "zero division"),
            Self::MultipleConstructors { class } => {
                write!(f, "multiple constructors in class {class}")
            }
            Self::ReturnOutsideFunction => write!(f, "return statement outside of a function"),
            Self::MalformedTree { node } => write!(f, "malformed {node} node"),
        }
    }
}

/// Evaluation error: a kind plus the source line it was detected on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Semantic error on or before line {}: {}",
            self.line, self.kind
        )
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn undeclared_variable(name: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndeclaredVariable {
            name: name.to_string(),
        },
        line,
    )
}

#[cold]
pub fn undeclared_class(name: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndeclaredClass {
            name: name.to_string(),
        },
        line,
    )
}

/// A value that could not be cast to an object.
#[cold]
pub fn cast_to_object(value: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::CastError {
            value: value.to_string(),
            target: "object",
        },
        line,
    )
}

#[cold]
pub fn type_mismatch(name: &str, expected: &str, got: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch {
            name: name.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        },
        line,
    )
}

#[cold]
pub fn no_member(class: &str, member: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NoMember {
            class: class.to_string(),
            member: member.to_string(),
        },
        line,
    )
}

#[cold]
pub fn not_a_function(value: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotAFunction {
            value: value.to_string(),
        },
        line,
    )
}

#[cold]
pub fn not_a_class(name: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotAClass {
            name: name.to_string(),
        },
        line,
    )
}

#[cold]
pub fn wrong_parameter_count(function: &str, expected: usize, got: usize, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::ParameterNumber {
            function: function.to_string(),
            expected,
            got,
        },
        line,
    )
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { depth }, line)
}

#[cold]
pub fn division_by_zero(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, line)
}

#[cold]
pub fn multiple_constructors(class: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::MultipleConstructors {
            class: class.to_string(),
        },
        line,
    )
}

#[cold]
pub fn return_outside_function(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::ReturnOutsideFunction, line)
}

#[cold]
pub fn malformed_tree(node: &'static str, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedTree { node }, line)
}
