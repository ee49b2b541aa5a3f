use crate::error::Ice;
use crate::options::FactsOptions;
use ahash::HashMap;
use syntax_go::ast::expr::{Expr, Ident, SelectorExpr};
use syntax_go::ast::node::{Node, NodeId};
use syntax_go::ast::stmt::CaseClause;
use syntax_go::ast::stx::File;
use syntax_go::loc::Loc;
use tracing::trace;
use types_go::{ConstantValue, Module, Object, Type, Var};

/// Collects the facts a typechecking pass deduces about one compilation unit.
///
/// This is the only writer. [`FactRecorder::finish`] consumes it and yields the
/// read-only [`FactStore`].
pub struct FactRecorder {
  module: Module,
  options: FactsOptions,
  types: HashMap<NodeId, Type>,
  constants: HashMap<NodeId, ConstantValue>,
  bindings: HashMap<NodeId, Object>,
  type_cases: HashMap<NodeId, Var>,
}

impl FactRecorder {
  pub fn new(module: Module) -> FactRecorder {
    FactRecorder::with_options(module, FactsOptions::default())
  }

  pub fn with_options(module: Module, options: FactsOptions) -> FactRecorder {
    FactRecorder {
      module,
      options,
      types: HashMap::default(),
      constants: HashMap::default(),
      bindings: HashMap::default(),
      type_cases: HashMap::default(),
    }
  }

  // A later record for the same node replaces the earlier one; the checker
  // revises the type of an untyped operand once its context is known.

  pub fn record_type(&mut self, expr: &Expr, ty: Type) {
    self.types.insert(expr.id(), ty);
  }

  pub fn record_constant(&mut self, expr: &Expr, value: ConstantValue) {
    self.constants.insert(expr.id(), value);
  }

  /// Records what an identifier denotes, at both use and declaration sites.
  pub fn record_binding(&mut self, ident: &Node<Ident>, object: Object) {
    self.bindings.insert(ident.id, object);
  }

  /// Records the variable implicitly declared by a type switch clause that
  /// names exactly one type.
  pub fn record_type_case(&mut self, clause: &Node<CaseClause>, var: Var) {
    self.type_cases.insert(clause.id, var);
  }

  pub fn finish(self, files: Vec<Node<File>>) -> FactStore {
    FactStore {
      module: self.module,
      files,
      options: self.options,
      types: self.types,
      constants: self.constants,
      bindings: self.bindings,
      type_cases: self.type_cases,
    }
  }
}

/// Everything a typechecking pass concluded about one compilation unit.
///
/// Immutable after construction. All queries take `&self`, so a store can be
/// shared across threads without synchronization.
pub struct FactStore {
  module: Module,
  files: Vec<Node<File>>,
  options: FactsOptions,
  types: HashMap<NodeId, Type>,
  constants: HashMap<NodeId, ConstantValue>,
  bindings: HashMap<NodeId, Object>,
  type_cases: HashMap<NodeId, Var>,
}

impl FactStore {
  /// The unit's own module.
  pub fn module(&self) -> &Module {
    &self.module
  }

  pub fn files(&self) -> &[Node<File>] {
    &self.files
  }

  pub fn options(&self) -> &FactsOptions {
    &self.options
  }

  pub(crate) fn recorded_type(&self, id: NodeId, loc: Loc) -> Result<Type, Ice> {
    self
      .types
      .get(&id)
      .cloned()
      .ok_or_else(|| Ice::new("expression has no recorded type").at(id, loc))
  }

  /// The type of a value expression.
  ///
  /// Identifiers without a recorded expression type (declaration sites) take
  /// the type of the object they bind. Anything else without a type is foreign
  /// to this unit, which is an [`Ice`].
  pub fn type_of(&self, expr: &Expr) -> Result<Type, Ice> {
    match expr {
      Expr::Ident(ident) => self.type_of_ident(ident),
      _ => self.recorded_type(expr.id(), expr.loc()),
    }
  }

  pub fn type_of_ident(&self, ident: &Node<Ident>) -> Result<Type, Ice> {
    if let Some(ty) = self.types.get(&ident.id) {
      return Ok(ty.clone());
    }
    match self.bindings.get(&ident.id) {
      Some(object) => {
        trace!(node = %ident.id, name = %ident.stx.name, "type taken from identifier binding");
        Ok(object.ty())
      }
      None => Err(
        Ice::new("identifier has neither a type nor a binding")
          .with_context("name", ident.stx.name.clone())
          .at(ident.id, ident.loc),
      ),
    }
  }

  /// The value of a compile-time constant expression; `None` for anything
  /// that is not constant.
  pub fn constant_value_of(&self, expr: &Expr) -> Option<&ConstantValue> {
    self.constants.get(&expr.id())
  }

  /// What an identifier denotes. `None` for identifiers the checker binds to
  /// nothing, such as the blank identifier or a package clause name.
  pub fn object_of(&self, ident: &Node<Ident>) -> Option<&Object> {
    self.bindings.get(&ident.id)
  }

  /// Whether an expression denotes a type rather than a value.
  ///
  /// `expr` must be in expression position; keys of keyed elements and
  /// declaring identifiers give meaningless answers.
  pub fn is_type_expr(&self, expr: &Expr) -> bool {
    match expr {
      Expr::Selector(selector) => self
        .resolve_module_member(selector)
        .is_some_and(Object::is_type_name),
      Expr::Paren(paren) => self.is_type_expr(&paren.stx.inner),
      Expr::Star(star) => self.is_type_expr(&star.stx.operand),
      Expr::Ident(ident) => self.object_of(ident).is_some_and(Object::is_type_name),
      Expr::ArrayType(_)
      | Expr::StructType(_)
      | Expr::FuncType(_)
      | Expr::InterfaceType(_)
      | Expr::MapType(_)
      | Expr::ChanType(_) => true,
      _ => false,
    }
  }

  /// Resolves a qualified identifier `m.Name`: the left side must be an
  /// identifier bound to an imported module, and `Name` an exported member.
  pub fn resolve_module_member(&self, selector: &Node<SelectorExpr>) -> Option<&Object> {
    let left = selector.stx.left.as_ident()?;
    let module = self.object_of(left)?.as_module()?;
    module.lookup_exported(&selector.stx.sel.stx.name)
  }

  /// The implicit variable of a type switch clause that names exactly one
  /// type. `None` for `default` and multi-type clauses.
  pub fn type_switch_var(&self, clause: &Node<CaseClause>) -> Option<&Var> {
    self.type_cases.get(&clause.id)
  }
}
