use once_cell::sync::Lazy;
use once_cell::sync::OnceCell;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasicKind {
  Invalid,

  Bool,
  Int,
  Int8,
  Int16,
  Int32,
  Int64,
  Uint,
  Uint8,
  Uint16,
  Uint32,
  Uint64,
  Uintptr,
  Float32,
  Float64,
  Complex64,
  Complex128,
  String,
  UnsafePointer,

  // Types of untyped constant expressions.
  UntypedBool,
  UntypedInt,
  UntypedRune,
  UntypedFloat,
  UntypedComplex,
  UntypedString,
  UntypedNil,
}

impl BasicKind {
  /// Every kind, in declaration order.
  pub const ALL: [BasicKind; 26] = [
    BasicKind::Invalid,
    BasicKind::Bool,
    BasicKind::Int,
    BasicKind::Int8,
    BasicKind::Int16,
    BasicKind::Int32,
    BasicKind::Int64,
    BasicKind::Uint,
    BasicKind::Uint8,
    BasicKind::Uint16,
    BasicKind::Uint32,
    BasicKind::Uint64,
    BasicKind::Uintptr,
    BasicKind::Float32,
    BasicKind::Float64,
    BasicKind::Complex64,
    BasicKind::Complex128,
    BasicKind::String,
    BasicKind::UnsafePointer,
    BasicKind::UntypedBool,
    BasicKind::UntypedInt,
    BasicKind::UntypedRune,
    BasicKind::UntypedFloat,
    BasicKind::UntypedComplex,
    BasicKind::UntypedString,
    BasicKind::UntypedNil,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      BasicKind::Invalid => "invalid type",
      BasicKind::Bool => "bool",
      BasicKind::Int => "int",
      BasicKind::Int8 => "int8",
      BasicKind::Int16 => "int16",
      BasicKind::Int32 => "int32",
      BasicKind::Int64 => "int64",
      BasicKind::Uint => "uint",
      BasicKind::Uint8 => "uint8",
      BasicKind::Uint16 => "uint16",
      BasicKind::Uint32 => "uint32",
      BasicKind::Uint64 => "uint64",
      BasicKind::Uintptr => "uintptr",
      BasicKind::Float32 => "float32",
      BasicKind::Float64 => "float64",
      BasicKind::Complex64 => "complex64",
      BasicKind::Complex128 => "complex128",
      BasicKind::String => "string",
      BasicKind::UnsafePointer => "unsafe.Pointer",
      BasicKind::UntypedBool => "untyped bool",
      BasicKind::UntypedInt => "untyped int",
      BasicKind::UntypedRune => "untyped rune",
      BasicKind::UntypedFloat => "untyped float",
      BasicKind::UntypedComplex => "untyped complex",
      BasicKind::UntypedString => "untyped string",
      BasicKind::UntypedNil => "untyped nil",
    }
  }

  pub fn is_untyped(self) -> bool {
    self >= BasicKind::UntypedBool
  }

  pub fn is_integer(self) -> bool {
    matches!(
      self,
      BasicKind::Int
        | BasicKind::Int8
        | BasicKind::Int16
        | BasicKind::Int32
        | BasicKind::Int64
        | BasicKind::Uint
        | BasicKind::Uint8
        | BasicKind::Uint16
        | BasicKind::Uint32
        | BasicKind::Uint64
        | BasicKind::Uintptr
        | BasicKind::UntypedInt
        | BasicKind::UntypedRune
    )
  }

  pub fn is_float(self) -> bool {
    matches!(
      self,
      BasicKind::Float32 | BasicKind::Float64 | BasicKind::UntypedFloat
    )
  }

  pub fn is_complex(self) -> bool {
    matches!(
      self,
      BasicKind::Complex64 | BasicKind::Complex128 | BasicKind::UntypedComplex
    )
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChanDir {
  Both,
  Send,
  Recv,
}

/// A shared, immutable handle to a type.
///
/// Cloning is cheap. Two handles compare equal if the types are identical:
/// structurally for unnamed types, by identity for named types. Use
/// [`Type::ptr_eq`] to ask whether two handles are the very same instance.
#[derive(Clone)]
pub struct Type(Arc<TypeKind>);

pub enum TypeKind {
  Basic(BasicKind),
  Array { len: u64, elem: Type },
  Slice { elem: Type },
  Struct(StructType),
  Pointer { elem: Type },
  Tuple(Vec<Var>),
  Signature(Signature),
  Interface(InterfaceType),
  Map { key: Type, value: Type },
  Chan { dir: ChanDir, elem: Type },
  Named(NamedType),
}

#[derive(Clone)]
pub struct StructType {
  pub fields: Vec<Var>,
}

#[derive(Clone)]
pub struct InterfaceType {
  // Sorted by name.
  methods: Vec<Method>,
}

impl InterfaceType {
  pub fn methods(&self) -> &[Method] {
    &self.methods
  }

  pub fn is_empty(&self) -> bool {
    self.methods.is_empty()
  }
}

#[derive(Clone)]
pub struct Method {
  pub name: String,
  pub signature: Signature,
}

pub struct NamedType {
  name: String,
  module: Option<String>,
  underlying: OnceCell<Type>,
}

impl NamedType {
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Import path of the declaring module; `None` for predeclared types such as `error`.
  pub fn module(&self) -> Option<&str> {
    self.module.as_deref()
  }
}

static BASIC_TYPES: Lazy<Vec<Type>> = Lazy::new(|| {
  BasicKind::ALL
    .iter()
    .map(|&kind| Type(Arc::new(TypeKind::Basic(kind))))
    .collect()
});

static EMPTY_INTERFACE: Lazy<Type> = Lazy::new(|| {
  Type(Arc::new(TypeKind::Interface(InterfaceType {
    methods: Vec::new(),
  })))
});

impl Type {
  fn new(kind: TypeKind) -> Type {
    Type(Arc::new(kind))
  }

  /// The process-wide instance of a basic type.
  pub fn basic(kind: BasicKind) -> Type {
    BASIC_TYPES[kind as usize].clone()
  }

  pub fn invalid() -> Type {
    Type::basic(BasicKind::Invalid)
  }

  /// The process-wide instance of `interface{}`.
  pub fn empty_interface() -> Type {
    EMPTY_INTERFACE.clone()
  }

  pub fn array(len: u64, elem: Type) -> Type {
    Type::new(TypeKind::Array { len, elem })
  }

  pub fn slice(elem: Type) -> Type {
    Type::new(TypeKind::Slice { elem })
  }

  pub fn pointer(elem: Type) -> Type {
    Type::new(TypeKind::Pointer { elem })
  }

  pub fn map(key: Type, value: Type) -> Type {
    Type::new(TypeKind::Map { key, value })
  }

  pub fn chan(dir: ChanDir, elem: Type) -> Type {
    Type::new(TypeKind::Chan { dir, elem })
  }

  pub fn tuple(vars: Vec<Var>) -> Type {
    Type::new(TypeKind::Tuple(vars))
  }

  pub fn signature(sig: Signature) -> Type {
    Type::new(TypeKind::Signature(sig))
  }

  pub fn structure(fields: Vec<Var>) -> Type {
    Type::new(TypeKind::Struct(StructType { fields }))
  }

  pub fn interface(mut methods: Vec<Method>) -> Type {
    if methods.is_empty() {
      return Type::empty_interface();
    }
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    Type::new(TypeKind::Interface(InterfaceType { methods }))
  }

  /// Creates a named type whose underlying type is provided later via
  /// [`Type::set_underlying`], which allows recursive definitions.
  pub fn named(name: impl Into<String>, module: Option<&str>) -> Type {
    Type::new(TypeKind::Named(NamedType {
      name: name.into(),
      module: module.map(str::to_string),
      underlying: OnceCell::new(),
    }))
  }

  /// A named type whose underlying type is known up front. Stores
  /// `underlying.underlying()`, like [`Type::set_underlying`].
  pub fn named_with_underlying(name: impl Into<String>, module: Option<&str>, underlying: Type) -> Type {
    Type::new(TypeKind::Named(NamedType {
      name: name.into(),
      module: module.map(str::to_string),
      underlying: OnceCell::with_value(underlying.underlying()),
    }))
  }

  /// Sets the underlying type of a named type. Fails, returning the argument, if
  /// this is not a named type or its underlying type was already set.
  ///
  /// The stored type is `underlying.underlying()`, so it is never itself named.
  pub fn set_underlying(&self, underlying: Type) -> Result<(), Type> {
    match self.kind() {
      TypeKind::Named(named) => {
        let resolved = underlying.underlying();
        named.underlying.set(resolved).map_err(|_| underlying)
      }
      _ => Err(underlying),
    }
  }

  pub fn kind(&self) -> &TypeKind {
    &self.0
  }

  /// The structural type this type is defined in terms of. Unnamed types are
  /// their own underlying type; a named type whose definition was never
  /// completed has the invalid type as underlying.
  pub fn underlying(&self) -> Type {
    match self.kind() {
      TypeKind::Named(named) => named.underlying.get().cloned().unwrap_or_else(Type::invalid),
      _ => self.clone(),
    }
  }

  pub fn as_basic(&self) -> Option<BasicKind> {
    match self.kind() {
      TypeKind::Basic(kind) => Some(*kind),
      _ => None,
    }
  }

  pub fn as_signature(&self) -> Option<&Signature> {
    match self.kind() {
      TypeKind::Signature(sig) => Some(sig),
      _ => None,
    }
  }

  pub fn is_named(&self) -> bool {
    matches!(self.kind(), TypeKind::Named(_))
  }

  pub fn ptr_eq(a: &Type, b: &Type) -> bool {
    Arc::ptr_eq(&a.0, &b.0)
  }

  pub fn identical(a: &Type, b: &Type) -> bool {
    if Type::ptr_eq(a, b) {
      return true;
    }
    match (a.kind(), b.kind()) {
      (TypeKind::Basic(a), TypeKind::Basic(b)) => a == b,
      (
        TypeKind::Array {
          len: a_len,
          elem: a_elem,
        },
        TypeKind::Array {
          len: b_len,
          elem: b_elem,
        },
      ) => a_len == b_len && Type::identical(a_elem, b_elem),
      (TypeKind::Slice { elem: a }, TypeKind::Slice { elem: b })
      | (TypeKind::Pointer { elem: a }, TypeKind::Pointer { elem: b }) => Type::identical(a, b),
      (TypeKind::Struct(a), TypeKind::Struct(b)) => {
        a.fields.len() == b.fields.len()
          && a.fields.iter().zip(b.fields.iter()).all(|(a, b)| {
            a.name() == b.name() && a.is_embedded() == b.is_embedded() && Type::identical(a.ty(), b.ty())
          })
      }
      (TypeKind::Tuple(a), TypeKind::Tuple(b)) => vars_identical(a, b),
      (TypeKind::Signature(a), TypeKind::Signature(b)) => Signature::identical(a, b),
      (TypeKind::Interface(a), TypeKind::Interface(b)) => {
        a.methods.len() == b.methods.len()
          && a
            .methods
            .iter()
            .zip(b.methods.iter())
            .all(|(a, b)| a.name == b.name && Signature::identical(&a.signature, &b.signature))
      }
      (
        TypeKind::Map {
          key: a_key,
          value: a_value,
        },
        TypeKind::Map {
          key: b_key,
          value: b_value,
        },
      ) => Type::identical(a_key, b_key) && Type::identical(a_value, b_value),
      (
        TypeKind::Chan {
          dir: a_dir,
          elem: a_elem,
        },
        TypeKind::Chan {
          dir: b_dir,
          elem: b_elem,
        },
      ) => a_dir == b_dir && Type::identical(a_elem, b_elem),
      // Named types are only identical to themselves, which ptr_eq already covered.
      _ => false,
    }
  }
}

fn vars_identical(a: &[Var], b: &[Var]) -> bool {
  a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| Type::identical(a.ty(), b.ty()))
}

impl PartialEq for Type {
  fn eq(&self, other: &Self) -> bool {
    Type::identical(self, other)
  }
}

impl Eq for Type {}

impl Display for Type {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.kind() {
      TypeKind::Basic(kind) => f.write_str(kind.name()),
      TypeKind::Array { len, elem } => write!(f, "[{len}]{elem}"),
      TypeKind::Slice { elem } => write!(f, "[]{elem}"),
      TypeKind::Struct(st) => {
        f.write_str("struct{")?;
        for (i, field) in st.fields.iter().enumerate() {
          if i > 0 {
            f.write_str("; ")?;
          }
          if field.is_embedded() {
            write!(f, "{}", field.ty())?;
          } else {
            write!(f, "{} {}", field.name(), field.ty())?;
          }
        }
        f.write_str("}")
      }
      TypeKind::Pointer { elem } => write!(f, "*{elem}"),
      TypeKind::Tuple(vars) => {
        f.write_str("(")?;
        write_types(f, vars)?;
        f.write_str(")")
      }
      TypeKind::Signature(sig) => write!(f, "{sig}"),
      TypeKind::Interface(iface) => {
        f.write_str("interface{")?;
        for (i, method) in iface.methods.iter().enumerate() {
          if i > 0 {
            f.write_str("; ")?;
          }
          // Drop the leading "func" of the signature.
          write!(f, "{}{}", method.name, &method.signature.to_string()[4..])?;
        }
        f.write_str("}")
      }
      TypeKind::Map { key, value } => write!(f, "map[{key}]{value}"),
      TypeKind::Chan { dir, elem } => match dir {
        ChanDir::Both => write!(f, "chan {elem}"),
        ChanDir::Send => write!(f, "chan<- {elem}"),
        ChanDir::Recv => write!(f, "<-chan {elem}"),
      },
      TypeKind::Named(named) => match &named.module {
        Some(module) => write!(f, "{module}.{}", named.name),
        None => f.write_str(&named.name),
      },
    }
  }
}

impl Debug for Type {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

fn write_types(f: &mut Formatter<'_>, vars: &[Var]) -> fmt::Result {
  for (i, var) in vars.iter().enumerate() {
    if i > 0 {
      f.write_str(", ")?;
    }
    write!(f, "{}", var.ty())?;
  }
  Ok(())
}

struct VarData {
  name: String,
  ty: Type,
  embedded: bool,
}

/// A variable: a declared variable, parameter, result or struct field.
///
/// Equality is identity, like every other object.
#[derive(Clone)]
pub struct Var(Arc<VarData>);

impl Var {
  pub fn new(name: impl Into<String>, ty: Type) -> Var {
    Var(Arc::new(VarData {
      name: name.into(),
      ty,
      embedded: false,
    }))
  }

  /// An unnamed variable, used for parameters that only carry a type.
  pub fn anonymous(ty: Type) -> Var {
    Var::new("", ty)
  }

  pub fn field(name: impl Into<String>, ty: Type, embedded: bool) -> Var {
    Var(Arc::new(VarData {
      name: name.into(),
      ty,
      embedded,
    }))
  }

  pub fn name(&self) -> &str {
    &self.0.name
  }

  pub fn ty(&self) -> &Type {
    &self.0.ty
  }

  pub fn is_embedded(&self) -> bool {
    self.0.embedded
  }

  pub fn ptr_eq(a: &Var, b: &Var) -> bool {
    Arc::ptr_eq(&a.0, &b.0)
  }
}

impl PartialEq for Var {
  fn eq(&self, other: &Self) -> bool {
    Var::ptr_eq(self, other)
  }
}

impl Eq for Var {}

impl Debug for Var {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.name().is_empty() {
      write!(f, "{}", self.ty())
    } else {
      write!(f, "{} {}", self.name(), self.ty())
    }
  }
}

/// A function signature. For variadic signatures the last parameter holds the
/// element type of the spread arguments, so `func(int, ...string)` has a
/// final parameter of type `string`.
#[derive(Clone)]
pub struct Signature {
  params: Vec<Var>,
  results: Vec<Var>,
  variadic: bool,
}

impl Signature {
  pub fn new(params: Vec<Var>, results: Vec<Var>, variadic: bool) -> Signature {
    Signature {
      params,
      results,
      variadic,
    }
  }

  pub fn params(&self) -> &[Var] {
    &self.params
  }

  pub fn param_types(&self) -> impl Iterator<Item = &Type> + '_ {
    self.params.iter().map(Var::ty)
  }

  pub fn results(&self) -> &[Var] {
    &self.results
  }

  pub fn is_variadic(&self) -> bool {
    self.variadic
  }

  pub fn identical(a: &Signature, b: &Signature) -> bool {
    a.variadic == b.variadic && vars_identical(&a.params, &b.params) && vars_identical(&a.results, &b.results)
  }
}

impl PartialEq for Signature {
  fn eq(&self, other: &Self) -> bool {
    Signature::identical(self, other)
  }
}

impl Display for Signature {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("func(")?;
    for (i, param) in self.params.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      if self.variadic && i + 1 == self.params.len() {
        write!(f, "...{}", param.ty())?;
      } else {
        write!(f, "{}", param.ty())?;
      }
    }
    f.write_str(")")?;
    match self.results.len() {
      0 => Ok(()),
      1 => write!(f, " {}", self.results[0].ty()),
      _ => {
        f.write_str(" (")?;
        write_types(f, &self.results)?;
        f.write_str(")")
      }
    }
  }
}

impl Debug for Signature {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn basic_types_are_singletons() {
    for kind in BasicKind::ALL {
      let a = Type::basic(kind);
      let b = Type::basic(kind);
      assert!(Type::ptr_eq(&a, &b));
      assert_eq!(a.as_basic(), Some(kind));
    }
    assert!(Type::ptr_eq(&Type::empty_interface(), &Type::interface(vec![])));
  }

  #[test]
  fn unnamed_types_compare_structurally() {
    let a = Type::slice(Type::basic(BasicKind::Int32));
    let b = Type::slice(Type::basic(BasicKind::Int32));
    assert!(!Type::ptr_eq(&a, &b));
    assert_eq!(a, b);
    assert_ne!(a, Type::slice(Type::basic(BasicKind::Int64)));
    assert_eq!(
      Type::map(Type::basic(BasicKind::String), a.clone()),
      Type::map(Type::basic(BasicKind::String), b)
    );
  }

  #[test]
  fn named_types_compare_by_identity() {
    let a = Type::named("Celsius", Some("temp"));
    let b = Type::named("Celsius", Some("temp"));
    a.set_underlying(Type::basic(BasicKind::Float64)).unwrap();
    b.set_underlying(Type::basic(BasicKind::Float64)).unwrap();
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert_eq!(a.underlying(), b.underlying());
  }

  #[test]
  fn underlying_is_never_named() {
    let inner = Type::named("Inner", Some("m"));
    inner.set_underlying(Type::slice(Type::basic(BasicKind::Uint8))).unwrap();
    let outer = Type::named("Outer", Some("m"));
    outer.set_underlying(inner.clone()).unwrap();
    assert!(!outer.underlying().is_named());
    assert_eq!(outer.underlying().to_string(), "[]uint8");
    assert!(outer.set_underlying(Type::invalid()).is_err());
    assert!(Type::basic(BasicKind::Int).set_underlying(Type::invalid()).is_err());
  }

  #[test]
  fn named_with_underlying_is_complete() {
    let inner = Type::named_with_underlying("Bytes", Some("m"), Type::slice(Type::basic(BasicKind::Uint8)));
    let outer = Type::named_with_underlying("Blob", Some("m"), inner.clone());
    assert!(outer.is_named());
    assert_eq!(outer.underlying(), inner.underlying());
    assert!(!outer.underlying().is_named());
    assert!(outer.set_underlying(Type::invalid()).is_err());
  }

  #[test]
  fn incomplete_named_type_is_invalid_underneath() {
    let t = Type::named("T", Some("m"));
    assert_eq!(t.underlying().as_basic(), Some(BasicKind::Invalid));
  }

  #[test]
  fn displays_source_syntax() {
    let int = Type::basic(BasicKind::Int);
    let string = Type::basic(BasicKind::String);
    assert_eq!(Type::map(string.clone(), int.clone()).to_string(), "map[string]int");
    assert_eq!(Type::chan(ChanDir::Send, int.clone()).to_string(), "chan<- int");
    assert_eq!(Type::chan(ChanDir::Recv, int.clone()).to_string(), "<-chan int");
    assert_eq!(Type::pointer(Type::array(4, int.clone())).to_string(), "*[4]int");
    assert_eq!(Type::empty_interface().to_string(), "interface{}");
    assert_eq!(Type::basic(BasicKind::UntypedFloat).to_string(), "untyped float");
    let sig = Signature::new(
      vec![Var::anonymous(int.clone()), Var::anonymous(string.clone())],
      vec![Var::anonymous(int.clone()), Var::anonymous(Type::named("error", None))],
      true,
    );
    assert_eq!(sig.to_string(), "func(int, ...string) (int, error)");
    let rows = Signature::new(vec![Var::anonymous(Type::slice(int.clone()))], vec![], true);
    assert_eq!(rows.to_string(), "func(...[]int)");
    let stringer = Type::interface(vec![Method {
      name: "String".into(),
      signature: Signature::new(vec![], vec![Var::anonymous(string.clone())], false),
    }]);
    assert_eq!(stringer.to_string(), "interface{String() string}");
    let point = Type::structure(vec![Var::field("x", int.clone(), false), Var::field("y", int, false)]);
    assert_eq!(point.to_string(), "struct{x int; y int}");
  }

  #[test]
  fn vars_compare_by_identity() {
    let a = Var::anonymous(Type::basic(BasicKind::Int));
    let b = Var::anonymous(Type::basic(BasicKind::Int));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
  }
}
