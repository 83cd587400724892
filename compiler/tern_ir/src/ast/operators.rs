//! Binary and unary operators.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    StrictEq,
    StrictNotEq,

    // Logical
    And,
    Or,
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Boolean negation (`!`).
    Not,
    /// Arithmetic negation (`-`).
    Neg,
}
