use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::expr::{BasicLit, Expr, Ident};
use super::node::Node;

/// `[N]T`, `[...]T` or, with no length, the slice type `[]T`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ArrayType {
  pub len: Option<Expr>,
  pub elem: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct StructType {
  pub fields: Node<FieldList>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncType {
  pub params: Node<FieldList>,
  pub results: Option<Node<FieldList>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct InterfaceType {
  // Methods and embedded interfaces.
  pub methods: Node<FieldList>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct MapType {
  pub key: Expr,
  pub value: Expr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChanDir {
  Both,
  Send,
  Recv,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ChanType {
  #[drive(skip)]
  pub dir: ChanDir,
  pub elem: Expr,
}

#[derive(Debug, Default, Drive, DriveMut, Serialize)]
pub struct FieldList {
  pub fields: Vec<Node<Field>>,
}

impl FieldList {
  /// Number of entries the list declares, counting each name of a grouped field.
  pub fn len(&self) -> usize {
    self
      .fields
      .iter()
      .map(|f| f.stx.names.len().max(1))
      .sum()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Field {
  // Empty for anonymous parameters and embedded fields.
  pub names: Vec<Node<Ident>>,
  pub ty: Expr,
  pub tag: Option<Node<BasicLit>>,
}
