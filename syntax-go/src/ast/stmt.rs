use derive_more::derive::{From, TryInto};
use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::decl::Decl;
use super::expr::{CallExpr, Expr, Ident};
use super::node::Node;
use super::operator::AssignOperator;

// We must wrap each variant with Node<T> as otherwise we won't be able to visit Node<T> instead of just T.
#[derive(Debug, Drive, DriveMut, From, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Stmt {
  Assign(Node<AssignStmt>),
  Block(Node<BlockStmt>),
  Branch(Node<BranchStmt>),
  Decl(Node<DeclStmt>),
  Defer(Node<DeferStmt>),
  Empty(Node<EmptyStmt>),
  Expr(Node<ExprStmt>),
  For(Node<ForStmt>),
  Go(Node<GoStmt>),
  If(Node<IfStmt>),
  IncDec(Node<IncDecStmt>),
  Labeled(Node<LabeledStmt>),
  Range(Node<RangeStmt>),
  Return(Node<ReturnStmt>),
  Send(Node<SendStmt>),
  Switch(Node<SwitchStmt>),
  TypeSwitch(Node<TypeSwitchStmt>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct AssignStmt {
  pub lhs: Vec<Expr>,
  #[drive(skip)]
  pub operator: AssignOperator,
  pub rhs: Vec<Expr>,
}

#[derive(Debug, Default, Drive, DriveMut, Serialize)]
pub struct BlockStmt {
  pub body: Vec<Stmt>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BranchKind {
  Break,
  Continue,
  Goto,
  Fallthrough,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct BranchStmt {
  #[drive(skip)]
  pub kind: BranchKind,
  pub label: Option<Node<Ident>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DeclStmt {
  pub decl: Decl,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct DeferStmt {
  pub call: Node<CallExpr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct EmptyStmt {}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExprStmt {
  pub expr: Expr,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ForStmt {
  pub init: Option<Stmt>,
  pub cond: Option<Expr>,
  pub post: Option<Stmt>,
  pub body: Node<BlockStmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct GoStmt {
  pub call: Node<CallExpr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IfStmt {
  pub init: Option<Stmt>,
  pub cond: Expr,
  pub consequent: Node<BlockStmt>,
  // Either another `if` or a block.
  pub alternate: Option<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IncDecStmt {
  pub operand: Expr,
  #[drive(skip)]
  pub increment: bool,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct LabeledStmt {
  pub label: Node<Ident>,
  pub stmt: Stmt,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct RangeStmt {
  pub key: Option<Expr>,
  pub value: Option<Expr>,
  #[drive(skip)]
  pub define: bool,
  pub target: Expr,
  pub body: Node<BlockStmt>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ReturnStmt {
  pub results: Vec<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SendStmt {
  pub channel: Expr,
  pub value: Expr,
}

/// One arm of an expression or type switch.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CaseClause {
  // Empty for `default:`.
  pub list: Vec<Expr>,
  pub body: Vec<Stmt>,
}

impl CaseClause {
  pub fn is_default(&self) -> bool {
    self.list.is_empty()
  }
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct SwitchStmt {
  pub init: Option<Stmt>,
  pub tag: Option<Expr>,
  pub clauses: Vec<Node<CaseClause>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeSwitchStmt {
  pub init: Option<Stmt>,
  // `x := y.(type)` or `y.(type)`.
  pub guard: Stmt,
  pub clauses: Vec<Node<CaseClause>>,
}
