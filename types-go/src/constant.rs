use num_bigint::BigInt;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The value of a compile-time constant expression.
///
/// Integer constants are arbitrary precision, since untyped constant
/// arithmetic is exact.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
  Bool(bool),
  String(String),
  Int(BigInt),
  Float(f64),
  Complex(f64, f64),
}

impl ConstantValue {
  pub fn as_bool(&self) -> Option<bool> {
    match self {
      ConstantValue::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      ConstantValue::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<&BigInt> {
    match self {
      ConstantValue::Int(i) => Some(i),
      _ => None,
    }
  }
}

impl From<bool> for ConstantValue {
  fn from(value: bool) -> Self {
    ConstantValue::Bool(value)
  }
}

impl From<&str> for ConstantValue {
  fn from(value: &str) -> Self {
    ConstantValue::String(value.to_string())
  }
}

impl From<i64> for ConstantValue {
  fn from(value: i64) -> Self {
    ConstantValue::Int(BigInt::from(value))
  }
}

impl From<BigInt> for ConstantValue {
  fn from(value: BigInt) -> Self {
    ConstantValue::Int(value)
  }
}

impl From<f64> for ConstantValue {
  fn from(value: f64) -> Self {
    ConstantValue::Float(value)
  }
}

impl Display for ConstantValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ConstantValue::Bool(b) => write!(f, "{b}"),
      ConstantValue::String(s) => write!(f, "{s:?}"),
      ConstantValue::Int(i) => write!(f, "{i}"),
      ConstantValue::Float(x) => write!(f, "{x}"),
      ConstantValue::Complex(re, im) => write!(f, "({re} + {im}i)"),
    }
  }
}
