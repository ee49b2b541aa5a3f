use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::node::{Node, NodeId};
use super::operator::{BinaryOperator, UnaryOperator};
use super::stmt::BlockStmt;
use super::type_expr::{ArrayType, ChanType, FuncType, InterfaceType, MapType, StructType};
use crate::loc::Loc;

// We must wrap each variant with Node<T> as otherwise we won't be able to visit Node<T> instead of just T.
// The grammar reuses expression productions for types, so type literals live here too.
#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Expr {
  Ident(Node<Ident>),
  BasicLit(Node<BasicLit>),
  CompositeLit(Node<CompositeLit>),
  FuncLit(Node<FuncLit>),
  Paren(Node<ParenExpr>),
  Selector(Node<SelectorExpr>),
  Index(Node<IndexExpr>),
  Slice(Node<SliceExpr>),
  TypeAssert(Node<TypeAssertExpr>),
  Call(Node<CallExpr>),
  Star(Node<StarExpr>),
  Unary(Node<UnaryExpr>),
  Binary(Node<BinaryExpr>),
  KeyValue(Node<KeyValueExpr>),
  Ellipsis(Node<Ellipsis>),

  // Type literals.
  ArrayType(Node<ArrayType>),
  StructType(Node<StructType>),
  FuncType(Node<FuncType>),
  InterfaceType(Node<InterfaceType>),
  MapType(Node<MapType>),
  ChanType(Node<ChanType>),
}

macro_rules! each_expr_node {
  ($expr:expr, $node:ident => $body:expr) => {
    match $expr {
      Expr::Ident($node) => $body,
      Expr::BasicLit($node) => $body,
      Expr::CompositeLit($node) => $body,
      Expr::FuncLit($node) => $body,
      Expr::Paren($node) => $body,
      Expr::Selector($node) => $body,
      Expr::Index($node) => $body,
      Expr::Slice($node) => $body,
      Expr::TypeAssert($node) => $body,
      Expr::Call($node) => $body,
      Expr::Star($node) => $body,
      Expr::Unary($node) => $body,
      Expr::Binary($node) => $body,
      Expr::KeyValue($node) => $body,
      Expr::Ellipsis($node) => $body,
      Expr::ArrayType($node) => $body,
      Expr::StructType($node) => $body,
      Expr::FuncType($node) => $body,
      Expr::InterfaceType($node) => $body,
      Expr::MapType($node) => $body,
      Expr::ChanType($node) => $body,
    }
  };
}

impl Expr {
  /// Identity of the expression: the id of the node wrapped by the variant.
  pub fn id(&self) -> NodeId {
    each_expr_node!(self, node => node.id)
  }

  pub fn loc(&self) -> Loc {
    each_expr_node!(self, node => node.loc)
  }

  pub fn as_ident(&self) -> Option<&Node<Ident>> {
    match self {
      Expr::Ident(id) => Some(id),
      _ => None,
    }
  }

  pub fn as_call(&self) -> Option<&Node<CallExpr>> {
    match self {
      Expr::Call(call) => Some(call),
      _ => None,
    }
  }
}

/// Strips any number of enclosing parentheses.
pub fn unparen(mut expr: &Expr) -> &Expr {
  while let Expr::Paren(paren) = expr {
    expr = &paren.stx.inner;
  }
  expr
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Ident {
  #[drive(skip)]
  pub name: String,
}

impl Ident {
  pub fn new(name: impl Into<String>) -> Ident {
    Ident { name: name.into() }
  }

  pub fn is_blank(&self) -> bool {
    self.name == "_"
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LitKind {
  Int,
  Float,
  Imag,
  Char,
  String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BasicLit {
  #[drive(skip)]
  pub kind: LitKind,
  // Literal source text, including quotes for strings and chars.
  #[drive(skip)]
  pub raw: String,
}

impl BasicLit {
  pub fn new(kind: LitKind, raw: impl Into<String>) -> BasicLit {
    BasicLit {
      kind,
      raw: raw.into(),
    }
  }

  /// Decodes a string literal's value. Returns `None` for other kinds or malformed literals.
  pub fn string_value(&self) -> Option<String> {
    match self.kind {
      LitKind::String => crate::lit::unquote(&self.raw),
      _ => None,
    }
  }
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CompositeLit {
  // Absent for elided types inside an outer composite literal.
  pub ty: Option<Expr>,
  pub elements: Vec<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncLit {
  pub ty: Node<FuncType>,
  pub body: Node<BlockStmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ParenExpr {
  pub inner: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SelectorExpr {
  pub left: Expr,
  pub sel: Node<Ident>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IndexExpr {
  pub target: Expr,
  pub index: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SliceExpr {
  pub target: Expr,
  pub low: Option<Expr>,
  pub high: Option<Expr>,
  pub max: Option<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeAssertExpr {
  pub operand: Expr,
  // `None` for the `x.(type)` form of a type switch guard.
  pub ty: Option<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CallExpr {
  pub callee: Expr,
  pub arguments: Vec<Expr>,
  // `f(a, b...)`: the last argument is spread element-wise.
  #[drive(skip)]
  pub spread: bool,
}

/// `*x`, either a pointer indirection or a pointer type.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct StarExpr {
  pub operand: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct UnaryExpr {
  #[drive(skip)]
  pub operator: UnaryOperator,
  pub operand: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BinaryExpr {
  #[drive(skip)]
  pub operator: BinaryOperator,
  pub left: Expr,
  pub right: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct KeyValueExpr {
  pub key: Expr,
  pub value: Expr,
}

/// `...T` in a variadic parameter list, or `[...]T` in an array type.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Ellipsis {
  pub elem: Option<Expr>,
}
