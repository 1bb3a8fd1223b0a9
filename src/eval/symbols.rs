//! The closed symbol library.
//!
//! Every name an expression can reach is listed here. Lookups of anything else
//! fail with [`EvalError::UnknownName`].

use std::collections::HashMap;
use std::f64::consts;

use ndarray::ArrayView1;

use super::EvalError;

/// Name the sample vector is bound to.
pub const VARIABLE: &str = "x";

/// Named scalar constants.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// Elementwise numeric function.
#[derive(Debug, Clone, Copy)]
pub enum Function {
    /// One argument.
    Unary(fn(f64) -> f64),
    /// Two arguments.
    Binary(fn(f64, f64) -> f64),
    /// Three arguments.
    Ternary(fn(f64, f64, f64) -> f64),
}

impl Function {
    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Function::Unary(_) => 1,
            Function::Binary(_) => 2,
            Function::Ternary(_) => 3,
        }
    }
}

/// Named elementwise functions.
pub const FUNCTIONS: &[(&str, Function)] = &[
    ("abs", Function::Unary(f64::abs)),
    ("sqrt", Function::Unary(f64::sqrt)),
    ("power", Function::Binary(f64::powf)),
    ("exp", Function::Unary(f64::exp)),
    ("log", Function::Unary(f64::ln)),
    ("log10", Function::Unary(f64::log10)),
    ("log2", Function::Unary(f64::log2)),
    ("sin", Function::Unary(f64::sin)),
    ("cos", Function::Unary(f64::cos)),
    ("tan", Function::Unary(f64::tan)),
    ("arcsin", Function::Unary(f64::asin)),
    ("arccos", Function::Unary(f64::acos)),
    ("arctan", Function::Unary(f64::atan)),
    ("sinh", Function::Unary(f64::sinh)),
    ("cosh", Function::Unary(f64::cosh)),
    ("tanh", Function::Unary(f64::tanh)),
    ("arcsinh", Function::Unary(f64::asinh)),
    ("arccosh", Function::Unary(f64::acosh)),
    ("arctanh", Function::Unary(f64::atanh)),
    ("floor", Function::Unary(f64::floor)),
    ("ceil", Function::Unary(f64::ceil)),
    ("round", Function::Unary(f64::round_ties_even)),
    ("sign", Function::Unary(sign)),
    ("clip", Function::Ternary(clip)),
    ("maximum", Function::Binary(maximum)),
    ("minimum", Function::Binary(minimum)),
    ("mod", Function::Binary(floor_mod)),
    ("remainder", Function::Binary(floor_mod)),
];

/// What a name resolves to.
#[derive(Debug, Clone)]
pub enum Symbol<'a> {
    /// The sample vector.
    Vector(ArrayView1<'a, f64>),
    /// A scalar constant.
    Constant(f64),
    /// An elementwise function.
    Function(Function),
}

/// Name table for one evaluation, holding the current sample vector.
#[derive(Debug, Clone)]
pub struct SymbolTable<'a> {
    symbols: HashMap<&'static str, Symbol<'a>>,
}

impl<'a> SymbolTable<'a> {
    /// Build the table with `x` bound to `samples`.
    pub fn new(samples: ArrayView1<'a, f64>) -> Self {
        let mut symbols = HashMap::with_capacity(1 + CONSTANTS.len() + FUNCTIONS.len());
        symbols.insert(VARIABLE, Symbol::Vector(samples));
        for &(name, value) in CONSTANTS {
            symbols.insert(name, Symbol::Constant(value));
        }
        for &(name, function) in FUNCTIONS {
            symbols.insert(name, Symbol::Function(function));
        }
        Self { symbols }
    }

    /// Resolve a name, failing for anything outside the library.
    pub fn lookup(&self, name: &str) -> Result<&Symbol<'a>, EvalError> {
        self.symbols
            .get(name)
            .ok_or_else(|| EvalError::UnknownName(name.to_string()))
    }

    /// All reachable names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.symbols.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// -1, 0 or 1 by the sign of `a`; NaN stays NaN.
fn sign(a: f64) -> f64 {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        // 0.0, -0.0 and NaN all map to themselves
        a
    }
}

/// Larger of two values, propagating NaN.
fn maximum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Smaller of two values, propagating NaN.
fn minimum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn clip(a: f64, lo: f64, hi: f64) -> f64 {
    minimum(maximum(a, lo), hi)
}

/// Remainder with the sign of the divisor.
pub(crate) fn floor_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}
