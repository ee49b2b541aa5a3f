use super::decl::{Decl, ImportSpec, Spec};
use super::expr::Ident;
use super::node::Node;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

/// One source file of a compilation unit.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct File {
  pub package: Node<Ident>,
  pub decls: Vec<Decl>,
}

impl File {
  /// Import specs of the file in source order.
  ///
  /// Imports may only appear in top-level `import` declarations, so this only
  /// looks at `decls` and never descends into function bodies.
  pub fn imports(&self) -> impl Iterator<Item = &Node<ImportSpec>> + '_ {
    self
      .decls
      .iter()
      .filter_map(|decl| match decl {
        Decl::Gen(gen) => Some(gen.stx.specs.iter()),
        Decl::Func(_) => None,
      })
      .flatten()
      .filter_map(|spec| match spec {
        Spec::Import(import) => Some(import),
        _ => None,
      })
  }
}
