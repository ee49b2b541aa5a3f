#![allow(dead_code)]

use syntax_go::ast::decl::{Decl, DeclKeyword, FuncDecl, GenDecl, ImportSpec, Spec};
use syntax_go::ast::expr::{BasicLit, CallExpr, Expr, Ident, LitKind, ParenExpr, SelectorExpr};
use syntax_go::ast::node::Node;
use syntax_go::ast::stmt::{BlockStmt, ExprStmt, Stmt};
use syntax_go::ast::stx::File;
use syntax_go::ast::type_expr::{FieldList, FuncType};
use syntax_go::loc::Loc;
use types_go::Module;

pub fn node<S: derive_visitor::Drive + derive_visitor::DriveMut>(stx: S) -> Node<S> {
  Node::new(Loc::default(), stx)
}

pub fn ident(name: &str) -> Node<Ident> {
  node(Ident::new(name))
}

pub fn ident_expr(name: &str) -> Expr {
  ident(name).into()
}

pub fn int_lit(raw: &str) -> Expr {
  node(BasicLit::new(LitKind::Int, raw)).into()
}

pub fn string_lit(value: &str) -> Expr {
  node(BasicLit::new(LitKind::String, format!("{value:?}"))).into()
}

pub fn paren(inner: Expr) -> Expr {
  node(ParenExpr { inner }).into()
}

pub fn selector(left: Expr, sel: &str) -> Node<SelectorExpr> {
  node(SelectorExpr {
    left,
    sel: ident(sel),
  })
}

pub fn call(callee: Expr, arguments: Vec<Expr>, spread: bool) -> Node<CallExpr> {
  node(CallExpr {
    callee,
    arguments,
    spread,
  })
}

pub fn import_spec(raw_path: &str) -> Spec {
  node(ImportSpec {
    name: None,
    path: node(BasicLit::new(LitKind::String, raw_path)),
  })
  .into()
}

/// An `import (...)` declaration of the given unquoted paths.
pub fn import_decl(paths: &[&str]) -> Decl {
  node(GenDecl {
    keyword: DeclKeyword::Import,
    specs: paths
      .iter()
      .map(|path| import_spec(&format!("\"{path}\"")))
      .collect(),
  })
  .into()
}

pub fn func_decl(name: &str, body: Vec<Stmt>) -> Decl {
  node(FuncDecl {
    receiver: None,
    name: ident(name),
    ty: node(FuncType {
      params: node(FieldList::default()),
      results: None,
    }),
    body: Some(node(BlockStmt { body })),
  })
  .into()
}

pub fn expr_stmt(expr: Expr) -> Stmt {
  node(ExprStmt { expr }).into()
}

pub fn file(package: &str, decls: Vec<Decl>) -> Node<File> {
  node(File {
    package: ident(package),
    decls,
  })
}

/// A module with no members, named after the last segment of its path.
pub fn leaf_module(path: &str) -> Module {
  let name = path.rsplit('/').next().unwrap_or(path);
  Module::builder(path, name).build()
}
