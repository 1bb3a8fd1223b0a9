//! Expression evaluation over a sample vector.
//!
//! An expression is parsed, every name in it is bound against a closed
//! [`SymbolTable`], and only then is it evaluated elementwise. Failures come
//! back as [`EvalError`] values; nothing in this module panics on user input.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use xcurve::eval::evaluate;
//!
//! let x = array![0.0, 1.0, 2.0];
//! let y = evaluate("x**2 + 1", x.view()).unwrap();
//! assert_eq!(y, array![1.0, 2.0, 5.0]);
//! ```

mod ast;
mod bind;
mod error;
mod lexer;
mod parser;
mod symbols;
mod value;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::EvalError;
pub use parser::parse;
pub use symbols::{Function, Symbol, SymbolTable, CONSTANTS, FUNCTIONS, VARIABLE};

use ndarray::{Array1, ArrayView1};

/// Something that turns an expression and samples into a result vector.
///
/// The renderer depends on this seam rather than on [`evaluate`] directly.
pub trait Evaluate {
    /// Evaluate `expression` with `x` bound to `samples`.
    fn evaluate(
        &self,
        expression: &str,
        samples: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, EvalError>;
}

/// The evaluator backed by the built-in symbol library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluate for Evaluator {
    fn evaluate(
        &self,
        expression: &str,
        samples: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, EvalError> {
        evaluate(expression, samples)
    }
}

/// Evaluate `expression` elementwise with `x` bound to `samples`.
///
/// The result always has `samples.len()` elements; constant expressions are
/// broadcast. Domain violations produce NaN or infinities, not errors.
pub fn evaluate(expression: &str, samples: ArrayView1<'_, f64>) -> Result<Array1<f64>, EvalError> {
    let expr = parse(expression)?;
    let table = SymbolTable::new(samples);
    let bound = bind::bind(&expr, &table)?;
    Ok(bound.eval().into_vector(samples.len()))
}
