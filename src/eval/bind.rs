//! Name resolution and evaluation.
//!
//! [`bind`] checks every name and call in a parsed tree against the symbol
//! table and produces a [`Bound`] tree. Only a fully bound tree can be
//! evaluated, so a rejected expression never performs any numeric work.

use ndarray::ArrayView1;

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::symbols::{Function, Symbol, SymbolTable};
use super::value::Value;
use super::EvalError;

/// Expression tree with every name resolved.
#[derive(Debug, Clone)]
pub(crate) enum Bound<'a> {
    Scalar(f64),
    Vector(ArrayView1<'a, f64>),
    Unary(UnaryOp, Box<Bound<'a>>),
    Binary(BinaryOp, Box<Bound<'a>>, Box<Bound<'a>>),
    Apply(Function, Vec<Bound<'a>>),
}

/// Resolve names in `expr` against `table`.
pub(crate) fn bind<'a>(expr: &Expr, table: &SymbolTable<'a>) -> Result<Bound<'a>, EvalError> {
    match expr {
        Expr::Number(n) => Ok(Bound::Scalar(*n)),
        Expr::Name { name, .. } => match table.lookup(name)? {
            Symbol::Vector(samples) => Ok(Bound::Vector(samples.clone())),
            Symbol::Constant(c) => Ok(Bound::Scalar(*c)),
            Symbol::Function(_) => Err(EvalError::NotAValue(name.clone())),
        },
        Expr::Unary { op, operand } => Ok(Bound::Unary(*op, Box::new(bind(operand, table)?))),
        Expr::Binary { op, lhs, rhs } => Ok(Bound::Binary(
            *op,
            Box::new(bind(lhs, table)?),
            Box::new(bind(rhs, table)?),
        )),
        Expr::Call { name, args, .. } => {
            let function = match table.lookup(name)? {
                Symbol::Function(function) => *function,
                _ => return Err(EvalError::NotCallable(name.clone())),
            };
            if args.len() != function.arity() {
                return Err(EvalError::Arity {
                    name: name.clone(),
                    expected: function.arity(),
                    found: args.len(),
                });
            }
            let args = args
                .iter()
                .map(|arg| bind(arg, table))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Bound::Apply(function, args))
        },
    }
}

impl Bound<'_> {
    /// Evaluate elementwise.
    pub(crate) fn eval(&self) -> Value {
        match self {
            Bound::Scalar(n) => Value::Scalar(*n),
            Bound::Vector(samples) => Value::Vector(samples.to_owned()),
            Bound::Unary(op, operand) => {
                let value = operand.eval();
                match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Neg => value.map(|a| -a),
                }
            },
            Bound::Binary(op, lhs, rhs) => {
                let op = *op;
                lhs.eval().zip_with(rhs.eval(), |a, b| op.apply(a, b))
            },
            Bound::Apply(function, args) => {
                let mut values = args.iter().map(Bound::eval);
                // Arity was checked by bind, so the argument count matches.
                let mut next = || values.next().unwrap_or(Value::Scalar(f64::NAN));
                match *function {
                    Function::Unary(f) => next().map(f),
                    Function::Binary(f) => {
                        let a = next();
                        a.zip_with(next(), f)
                    },
                    Function::Ternary(f) => {
                        let a = next();
                        let b = next();
                        a.zip3_with(b, next(), f)
                    },
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::parse;
    use ndarray::array;

    fn bind_str<'a>(input: &str, table: &SymbolTable<'a>) -> Result<Bound<'a>, EvalError> {
        bind(&parse(input).unwrap(), table)
    }

    #[test]
    fn test_unknown_call() {
        let samples = array![0.0];
        let table = SymbolTable::new(samples.view());
        assert_eq!(
            bind_str("foo(x)", &table).unwrap_err(),
            EvalError::UnknownName("foo".to_string())
        );
    }

    #[test]
    fn test_unknown_name_inside_arguments() {
        let samples = array![0.0];
        let table = SymbolTable::new(samples.view());
        assert_eq!(
            bind_str("sin(x + y)", &table).unwrap_err(),
            EvalError::UnknownName("y".to_string())
        );
    }

    #[test]
    fn test_misuse() {
        let samples = array![0.0];
        let table = SymbolTable::new(samples.view());
        assert_eq!(
            bind_str("pi(2)", &table).unwrap_err(),
            EvalError::NotCallable("pi".to_string())
        );
        assert_eq!(
            bind_str("x(2)", &table).unwrap_err(),
            EvalError::NotCallable("x".to_string())
        );
        assert_eq!(
            bind_str("sin + 1", &table).unwrap_err(),
            EvalError::NotAValue("sin".to_string())
        );
    }

    #[test]
    fn test_arity() {
        let samples = array![0.0];
        let table = SymbolTable::new(samples.view());
        assert_eq!(
            bind_str("sin(x, 2)", &table).unwrap_err(),
            EvalError::Arity {
                name: "sin".to_string(),
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            bind_str("clip(x)", &table).unwrap_err(),
            EvalError::Arity {
                name: "clip".to_string(),
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_eval_keeps_scalars_scalar() {
        let samples = array![1.0, 2.0];
        let table = SymbolTable::new(samples.view());
        let bound = bind_str("2 * pi", &table).unwrap();
        assert_eq!(bound.eval(), Value::Scalar(2.0 * std::f64::consts::PI));
    }
}
