//! Intermediate values with scalar broadcasting.

use ndarray::{Array1, Zip};

/// A scalar or a vector as large as the sample vector.
///
/// Every vector produced during one evaluation derives from the same sample
/// vector, so any two vectors that meet in an operation have equal length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Scalar(f64),
    Vector(Array1<f64>),
}

impl Value {
    pub(crate) fn map(self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(a) => Value::Scalar(f(a)),
            Value::Vector(a) => Value::Vector(a.mapv_into(f)),
        }
    }

    pub(crate) fn zip_with(self, other: Value, f: impl Fn(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(f(a, b)),
            (Value::Vector(a), Value::Scalar(b)) => Value::Vector(a.mapv_into(|a| f(a, b))),
            (Value::Scalar(a), Value::Vector(b)) => Value::Vector(b.mapv_into(|b| f(a, b))),
            (Value::Vector(mut a), Value::Vector(b)) => {
                Zip::from(&mut a).and(&b).for_each(|a, &b| *a = f(*a, b));
                Value::Vector(a)
            },
        }
    }

    pub(crate) fn zip3_with(
        self,
        second: Value,
        third: Value,
        f: impl Fn(f64, f64, f64) -> f64,
    ) -> Value {
        match (self, second, third) {
            (Value::Scalar(a), Value::Scalar(b), Value::Scalar(c)) => Value::Scalar(f(a, b, c)),
            (a, b, c) => {
                let len = [&a, &b, &c].iter().find_map(|v| v.len()).unwrap_or(0);
                let mut a = a.into_vector(len);
                let b = b.into_vector(len);
                let c = c.into_vector(len);
                Zip::from(&mut a)
                    .and(&b)
                    .and(&c)
                    .for_each(|a, &b, &c| *a = f(*a, b, c));
                Value::Vector(a)
            },
        }
    }

    fn len(&self) -> Option<usize> {
        match self {
            Value::Scalar(_) => None,
            Value::Vector(v) => Some(v.len()),
        }
    }

    /// Broadcast to a vector of `len` elements.
    pub(crate) fn into_vector(self, len: usize) -> Array1<f64> {
        match self {
            Value::Scalar(a) => Array1::from_elem(len, a),
            Value::Vector(v) => v,
        }
    }
}
