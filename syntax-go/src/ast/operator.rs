use serde::Serialize;

/// Prefix operators other than `*`. Pointer indirection and pointer types are
/// both written as [`StarExpr`](super::expr::StarExpr).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
  Plus,
  Minus,
  Not,
  BitwiseNot,
  AddressOf,
  Receive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
  BitAnd,
  BitOr,
  BitXor,
  BitClear,
  Shl,
  Shr,
  LogicalAnd,
  LogicalOr,
  Eq,
  NotEq,
  Lt,
  LtEq,
  Gt,
  GtEq,
}

impl BinaryOperator {
  pub fn is_comparison(self) -> bool {
    matches!(
      self,
      BinaryOperator::Eq
        | BinaryOperator::NotEq
        | BinaryOperator::Lt
        | BinaryOperator::LtEq
        | BinaryOperator::Gt
        | BinaryOperator::GtEq
    )
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AssignOperator {
  /// `=`
  Assign,
  /// `:=`
  Define,
  /// `+=`, `<<=`, etc.
  Compound(BinaryOperator),
}
