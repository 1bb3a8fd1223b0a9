//! Parsed expression tree.

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+a`
    Plus,
    /// `-a`
    Neg,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a // b`, floor of the quotient.
    FloorDiv,
    /// `a % b`, with the sign of the divisor.
    Mod,
    /// `a ** b` or `a ^ b`
    Pow,
}

impl BinaryOp {
    /// Apply the operator to two scalars.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            // Floor of the rounded quotient, so `1 // 0.1` is 10 rather than 9.
            BinaryOp::FloorDiv => (a / b).floor(),
            BinaryOp::Mod => super::symbols::floor_mod(a, b),
            BinaryOp::Pow => a.powf(b),
        }
    }
}

/// Expression tree node. Names are unresolved until bound to a symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Reference to a constant or the variable.
    Name {
        /// Identifier text.
        name: String,
        /// Byte offset in the source.
        offset: usize,
    },
    /// Unary operation.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Function call.
    Call {
        /// Function name.
        name: String,
        /// Arguments in order.
        args: Vec<Expr>,
        /// Byte offset of the name in the source.
        offset: usize,
    },
}
