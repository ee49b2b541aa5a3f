use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::expr::{BasicLit, Expr, Ident};
use super::node::Node;
use super::stmt::BlockStmt;
use super::type_expr::{FieldList, FuncType};

#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Decl {
  Gen(Node<GenDecl>),
  Func(Node<FuncDecl>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeclKeyword {
  Import,
  Const,
  Type,
  Var,
}

/// `import`, `const`, `type` or `var` with one spec or a parenthesized group.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct GenDecl {
  #[drive(skip)]
  pub keyword: DeclKeyword,
  pub specs: Vec<Spec>,
}

#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Spec {
  Import(Node<ImportSpec>),
  Value(Node<ValueSpec>),
  Type(Node<TypeSpec>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ImportSpec {
  // Local name; `.` and `_` are represented as identifiers too.
  pub name: Option<Node<Ident>>,
  // Quoted import path literal, exactly as written.
  pub path: Node<BasicLit>,
}

impl ImportSpec {
  /// The decoded import path, or `None` if the literal is malformed.
  pub fn path_value(&self) -> Option<String> {
    self.path.stx.string_value()
  }
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ValueSpec {
  pub names: Vec<Node<Ident>>,
  pub ty: Option<Expr>,
  pub values: Vec<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeSpec {
  pub name: Node<Ident>,
  #[drive(skip)]
  pub alias: bool,
  pub ty: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncDecl {
  pub receiver: Option<Node<FieldList>>,
  pub name: Node<Ident>,
  pub ty: Node<FuncType>,
  // Absent for functions implemented outside the language.
  pub body: Option<Node<BlockStmt>>,
}
