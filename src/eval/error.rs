//! Evaluation failures.

use thiserror::Error;

/// Why an expression produced no result.
///
/// Numeric anomalies such as `sqrt(-1)` or `1/0` are not errors: they show up
/// as NaN or infinities in the result vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression contains nothing to evaluate.
    #[error("empty expression")]
    Empty,

    /// The text does not follow the expression grammar.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax {
        /// What went wrong.
        message: String,
        /// Byte offset into the expression.
        offset: usize,
    },

    /// A name outside the symbol library.
    #[error("unknown name '{0}'")]
    UnknownName(String),

    /// A constant or the variable used as a function.
    #[error("'{0}' is not a function")]
    NotCallable(String),

    /// A function used without calling it.
    #[error("'{0}' is a function and must be called")]
    NotAValue(String),

    /// A function called with the wrong number of arguments.
    #[error("{name}() takes {expected} argument(s) but {found} were given")]
    Arity {
        /// Function name.
        name: String,
        /// Number of parameters the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// An evaluator returned a result that does not match the samples.
    #[error("result has {found} values for {expected} samples")]
    LengthMismatch {
        /// Number of samples.
        expected: usize,
        /// Number of values returned.
        found: usize,
    },
}

impl EvalError {
    /// Create a Syntax error.
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            offset,
        }
    }
}
