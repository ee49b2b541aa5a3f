use crate::constant::ConstantValue;
use crate::types::{Signature, Type, Var};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Whether a member name is visible outside its module.
pub fn is_exported(name: &str) -> bool {
  name.chars().next().is_some_and(char::is_uppercase)
}

pub struct ConstObject {
  pub name: String,
  pub ty: Type,
  pub value: ConstantValue,
}

pub struct FuncObject {
  pub name: String,
  // Always a signature type.
  pub ty: Type,
}

impl FuncObject {
  pub fn signature(&self) -> Option<&Signature> {
    self.ty.as_signature()
  }
}

pub struct TypeNameObject {
  pub name: String,
  pub ty: Type,
}

pub struct LabelObject {
  pub name: String,
}

pub struct BuiltinObject {
  pub name: String,
}

/// What a name denotes.
///
/// Equality is identity: two objects are equal only if they are the same
/// declaration, regardless of name or type.
#[derive(Clone)]
pub enum Object {
  Const(Arc<ConstObject>),
  Var(Var),
  Func(Arc<FuncObject>),
  TypeName(Arc<TypeNameObject>),
  Module(Module),
  Label(Arc<LabelObject>),
  Builtin(Arc<BuiltinObject>),
}

impl Object {
  pub fn constant(name: impl Into<String>, ty: Type, value: ConstantValue) -> Object {
    Object::Const(Arc::new(ConstObject {
      name: name.into(),
      ty,
      value,
    }))
  }

  pub fn var(name: impl Into<String>, ty: Type) -> Object {
    Object::Var(Var::new(name, ty))
  }

  pub fn func(name: impl Into<String>, sig: Signature) -> Object {
    Object::Func(Arc::new(FuncObject {
      name: name.into(),
      ty: Type::signature(sig),
    }))
  }

  pub fn type_name(name: impl Into<String>, ty: Type) -> Object {
    Object::TypeName(Arc::new(TypeNameObject {
      name: name.into(),
      ty,
    }))
  }

  pub fn label(name: impl Into<String>) -> Object {
    Object::Label(Arc::new(LabelObject { name: name.into() }))
  }

  pub fn builtin(name: impl Into<String>) -> Object {
    Object::Builtin(Arc::new(BuiltinObject { name: name.into() }))
  }

  pub fn name(&self) -> &str {
    match self {
      Object::Const(o) => &o.name,
      Object::Var(v) => v.name(),
      Object::Func(o) => &o.name,
      Object::TypeName(o) => &o.name,
      Object::Module(m) => m.name(),
      Object::Label(o) => &o.name,
      Object::Builtin(o) => &o.name,
    }
  }

  /// The type of the object. Modules, labels and builtins have none, which is
  /// represented by the invalid type.
  pub fn ty(&self) -> Type {
    match self {
      Object::Const(o) => o.ty.clone(),
      Object::Var(v) => v.ty().clone(),
      Object::Func(o) => o.ty.clone(),
      Object::TypeName(o) => o.ty.clone(),
      Object::Module(_) | Object::Label(_) | Object::Builtin(_) => Type::invalid(),
    }
  }

  pub fn is_exported(&self) -> bool {
    is_exported(self.name())
  }

  pub fn as_module(&self) -> Option<&Module> {
    match self {
      Object::Module(m) => Some(m),
      _ => None,
    }
  }

  pub fn as_var(&self) -> Option<&Var> {
    match self {
      Object::Var(v) => Some(v),
      _ => None,
    }
  }

  pub fn is_type_name(&self) -> bool {
    matches!(self, Object::TypeName(_))
  }

  fn keyword(&self) -> &'static str {
    match self {
      Object::Const(_) => "const",
      Object::Var(_) => "var",
      Object::Func(_) => "func",
      Object::TypeName(_) => "type",
      Object::Module(_) => "package",
      Object::Label(_) => "label",
      Object::Builtin(_) => "builtin",
    }
  }
}

impl PartialEq for Object {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Object::Const(a), Object::Const(b)) => Arc::ptr_eq(a, b),
      (Object::Var(a), Object::Var(b)) => Var::ptr_eq(a, b),
      (Object::Func(a), Object::Func(b)) => Arc::ptr_eq(a, b),
      (Object::TypeName(a), Object::TypeName(b)) => Arc::ptr_eq(a, b),
      (Object::Module(a), Object::Module(b)) => a == b,
      (Object::Label(a), Object::Label(b)) => Arc::ptr_eq(a, b),
      (Object::Builtin(a), Object::Builtin(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

impl Eq for Object {}

impl From<Var> for Object {
  fn from(value: Var) -> Self {
    Object::Var(value)
  }
}

impl From<Module> for Object {
  fn from(value: Module) -> Self {
    Object::Module(value)
  }
}

impl Display for Object {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Object::Const(o) => write!(f, "const {} {} = {}", o.name, o.ty, o.value),
      Object::Module(m) => write!(f, "package {} ({:?})", m.name(), m.path()),
      Object::Label(_) | Object::Builtin(_) => write!(f, "{} {}", self.keyword(), self.name()),
      _ => write!(f, "{} {} {}", self.keyword(), self.name(), self.ty()),
    }
  }
}

impl Debug for Object {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

/// Members of a module or of the universe, by name.
#[derive(Clone, Default)]
pub struct Scope {
  members: BTreeMap<String, Object>,
}

impl Scope {
  pub fn new() -> Scope {
    Scope::default()
  }

  /// Declares `object` under its own name, returning any object it replaces.
  pub fn insert(&mut self, object: Object) -> Option<Object> {
    self.members.insert(object.name().to_string(), object)
  }

  pub fn lookup(&self, name: &str) -> Option<&Object> {
    self.members.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
    self.members.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Object> + '_ {
    self.members.values()
  }

  pub fn len(&self) -> usize {
    self.members.len()
  }

  pub fn is_empty(&self) -> bool {
    self.members.is_empty()
  }
}

struct ModuleData {
  path: String,
  name: String,
  scope: Scope,
  imports: BTreeMap<String, Module>,
}

/// A compilation unit as seen by the code that imports it, or by itself.
///
/// Equality and hashing are by identity, so a module can key a set.
#[derive(Clone)]
pub struct Module(Arc<ModuleData>);

impl Module {
  pub fn builder(path: impl Into<String>, name: impl Into<String>) -> ModuleBuilder {
    ModuleBuilder {
      path: path.into(),
      name: name.into(),
      scope: Scope::new(),
      imports: BTreeMap::new(),
    }
  }

  pub fn path(&self) -> &str {
    &self.0.path
  }

  pub fn name(&self) -> &str {
    &self.0.name
  }

  pub fn scope(&self) -> &Scope {
    &self.0.scope
  }

  pub fn lookup(&self, name: &str) -> Option<&Object> {
    self.0.scope.lookup(name)
  }

  /// Like [`Module::lookup`], but only finds members visible to importers.
  pub fn lookup_exported(&self, name: &str) -> Option<&Object> {
    if !is_exported(name) {
      return None;
    }
    self.lookup(name)
  }

  /// The module a given import path of this module's source resolves to.
  pub fn import(&self, path: &str) -> Option<&Module> {
    self.0.imports.get(path)
  }

  /// The import table, keyed by import path. A loader may include more
  /// entries here than the source actually names.
  pub fn imports(&self) -> impl Iterator<Item = (&str, &Module)> + '_ {
    self.0.imports.iter().map(|(path, m)| (path.as_str(), m))
  }

  pub fn ptr_eq(a: &Module, b: &Module) -> bool {
    Arc::ptr_eq(&a.0, &b.0)
  }
}

impl PartialEq for Module {
  fn eq(&self, other: &Self) -> bool {
    Module::ptr_eq(self, other)
  }
}

impl Eq for Module {}

impl Hash for Module {
  fn hash<H: Hasher>(&self, state: &mut H) {
    std::ptr::hash(Arc::as_ptr(&self.0), state)
  }
}

impl Debug for Module {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Module({:?})", self.path())
  }
}

pub struct ModuleBuilder {
  path: String,
  name: String,
  scope: Scope,
  imports: BTreeMap<String, Module>,
}

impl ModuleBuilder {
  pub fn member(mut self, object: Object) -> Self {
    self.scope.insert(object);
    self
  }

  /// Adds `module` to the import table under its own path.
  pub fn import(self, module: Module) -> Self {
    let path = module.path().to_string();
    self.import_as(path, module)
  }

  /// Adds `module` to the import table under `path`, which may differ from
  /// the module's own path when a loader rewrites imports (e.g. vendoring).
  pub fn import_as(mut self, path: impl Into<String>, module: Module) -> Self {
    self.imports.insert(path.into(), module);
    self
  }

  pub fn build(self) -> Module {
    Module(Arc::new(ModuleData {
      path: self.path,
      name: self.name,
      scope: self.scope,
      imports: self.imports,
    }))
  }
}
