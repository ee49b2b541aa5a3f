//! The predeclared scope enclosing every module.

use crate::constant::ConstantValue;
use crate::object::{Object, Scope};
use crate::types::{BasicKind, Method, Signature, Type, Var};
use once_cell::sync::Lazy;

/// Names of the predeclared functions.
pub const BUILTIN_NAMES: [&str; 15] = [
  "append", "cap", "close", "complex", "copy", "delete", "imag", "len", "make", "new", "panic",
  "print", "println", "real", "recover",
];

static ERROR_TYPE: Lazy<Type> = Lazy::new(|| {
  Type::named_with_underlying(
    "error",
    None,
    Type::interface(vec![Method {
      name: "Error".into(),
      signature: Signature::new(vec![], vec![Var::anonymous(Type::basic(BasicKind::String))], false),
    }]),
  )
});

static UNIVERSE: Lazy<Scope> = Lazy::new(|| {
  let mut scope = Scope::new();
  for kind in BasicKind::ALL {
    if kind == BasicKind::Invalid || kind == BasicKind::UnsafePointer || kind.is_untyped() {
      continue;
    }
    scope.insert(Object::type_name(kind.name(), Type::basic(kind)));
  }
  scope.insert(Object::type_name("byte", Type::basic(BasicKind::Uint8)));
  scope.insert(Object::type_name("rune", Type::basic(BasicKind::Int32)));

  scope.insert(Object::type_name("error", error_type()));

  let untyped_bool = Type::basic(BasicKind::UntypedBool);
  scope.insert(Object::constant("true", untyped_bool.clone(), ConstantValue::Bool(true)));
  scope.insert(Object::constant("false", untyped_bool, ConstantValue::Bool(false)));

  for name in BUILTIN_NAMES {
    scope.insert(Object::builtin(name));
  }
  scope
});

pub fn scope() -> &'static Scope {
  &UNIVERSE
}

pub fn lookup(name: &str) -> Option<&'static Object> {
  UNIVERSE.lookup(name)
}

/// The predeclared `error` interface type.
pub fn error_type() -> Type {
  ERROR_TYPE.clone()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lookups_return_shared_objects() {
    let a = lookup("append").unwrap();
    let b = lookup("append").unwrap();
    assert_eq!(a, b);
    assert!(matches!(a, Object::Builtin(_)));
    assert!(lookup("int").unwrap().is_type_name());
    assert!(lookup("unsafe").is_none());
  }

  #[test]
  fn aliases_share_the_basic_type() {
    let byte = lookup("byte").unwrap().ty();
    assert!(Type::ptr_eq(&byte, &Type::basic(BasicKind::Uint8)));
    assert_eq!(lookup("rune").unwrap().ty(), Type::basic(BasicKind::Int32));
  }

  #[test]
  fn error_is_a_named_interface() {
    let error = error_type();
    assert!(error.is_named());
    assert_eq!(error.to_string(), "error");
    assert_eq!(error.underlying().to_string(), "interface{Error() string}");
  }

  #[test]
  fn error_type_is_the_declared_one() {
    let declared = lookup("error").unwrap().ty();
    assert!(Type::ptr_eq(&error_type(), &declared));
    assert!(Type::ptr_eq(&error_type(), &error_type()));
    assert!(error_type().set_underlying(Type::invalid()).is_err());
  }
}
