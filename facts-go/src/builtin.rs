//! Call-site signatures for builtin operations.
//!
//! Builtins have no declared signature: their parameter types depend on the
//! arguments and on the type the checker inferred for the call itself. To let
//! call lowering treat them like ordinary calls, each builtin call gets a
//! signature synthesized for that one call. Synthesized signatures never have
//! results; the result type is the call's recorded type.

use crate::error::Ice;
use crate::store::FactStore;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use syntax_go::ast::expr::{CallExpr, Expr};
use syntax_go::ast::node::Node;
use syntax_go::unparen;
use tracing::debug_span;
use tracing::field;
use types_go::{BasicKind, Object, Signature, Type, TypeKind, Var};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinOperation {
  Append,
  Print,
  Println,
  Close,
  Copy,
  Delete,
  Len,
  Cap,
  Real,
  Imag,
  Complex,
  Panic,
  Recover,
}

impl BuiltinOperation {
  pub const ALL: [BuiltinOperation; 13] = [
    BuiltinOperation::Append,
    BuiltinOperation::Print,
    BuiltinOperation::Println,
    BuiltinOperation::Close,
    BuiltinOperation::Copy,
    BuiltinOperation::Delete,
    BuiltinOperation::Len,
    BuiltinOperation::Cap,
    BuiltinOperation::Real,
    BuiltinOperation::Imag,
    BuiltinOperation::Complex,
    BuiltinOperation::Panic,
    BuiltinOperation::Recover,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      BuiltinOperation::Append => "append",
      BuiltinOperation::Print => "print",
      BuiltinOperation::Println => "println",
      BuiltinOperation::Close => "close",
      BuiltinOperation::Copy => "copy",
      BuiltinOperation::Delete => "delete",
      BuiltinOperation::Len => "len",
      BuiltinOperation::Cap => "cap",
      BuiltinOperation::Real => "real",
      BuiltinOperation::Imag => "imag",
      BuiltinOperation::Complex => "complex",
      BuiltinOperation::Panic => "panic",
      BuiltinOperation::Recover => "recover",
    }
  }
}

impl Display for BuiltinOperation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a builtin operation with a synthesized signature")]
pub struct UnknownBuiltin(pub String);

impl FromStr for BuiltinOperation {
  type Err = UnknownBuiltin;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    BuiltinOperation::ALL
      .into_iter()
      .find(|op| op.name() == s)
      .ok_or_else(|| UnknownBuiltin(s.to_string()))
  }
}

// Float result kind of real/imag to the complex kind of their operand.
fn complex_counterpart(kind: BasicKind) -> Option<BasicKind> {
  match kind {
    BasicKind::UntypedFloat => Some(BasicKind::UntypedComplex),
    BasicKind::Float64 => Some(BasicKind::Complex128),
    BasicKind::Float32 => Some(BasicKind::Complex64),
    _ => None,
  }
}

fn float_counterpart(kind: BasicKind) -> Option<BasicKind> {
  match kind {
    BasicKind::UntypedComplex => Some(BasicKind::UntypedFloat),
    BasicKind::Complex128 => Some(BasicKind::Float64),
    BasicKind::Complex64 => Some(BasicKind::Float32),
    _ => None,
  }
}

fn slice_elem(ty: &Type) -> Option<Type> {
  match ty.underlying().kind() {
    TypeKind::Slice { elem } => Some(elem.clone()),
    _ => None,
  }
}

fn param(ty: Type) -> Var {
  Var::anonymous(ty)
}

struct CallSite<'a> {
  store: &'a FactStore,
  call: &'a Node<CallExpr>,
  op: BuiltinOperation,
}

impl<'a> CallSite<'a> {
  fn ice(&self, message: &str) -> Ice {
    Ice::new(message)
      .with_context("builtin", self.op.name())
      .at(self.call.id, self.call.loc)
  }

  fn arg(&self, i: usize) -> Result<&'a Expr, Ice> {
    self
      .call
      .stx
      .arguments
      .get(i)
      .ok_or_else(|| self.ice("builtin call is missing an argument").with_context("index", i.to_string()))
  }

  fn arg_type(&self, i: usize) -> Result<Type, Ice> {
    self.store.type_of(self.arg(i)?)
  }

  fn result_type(&self) -> Result<Type, Ice> {
    self.store.recorded_type(self.call.id, self.call.loc)
  }

  fn result_basic_kind(&self) -> Result<BasicKind, Ice> {
    let result = self.result_type()?;
    result.as_basic().ok_or_else(|| {
      self
        .ice("builtin result is not a basic type")
        .with_context("result", result.to_string())
    })
  }

  fn signature(&self) -> Result<Signature, Ice> {
    let (params, variadic) = match self.op {
      BuiltinOperation::Append => {
        let result = self.result_type()?;
        if self.call.stx.spread {
          // append(dst, src...): src is passed as is, which also covers a string spread into []byte.
          (vec![param(result), param(self.arg_type(1)?)], false)
        } else {
          let Some(elem) = slice_elem(&result) else {
            return Err(
              self
                .ice("append result is not a slice")
                .with_context("result", result.to_string()),
            );
          };
          (vec![param(result), param(elem)], true)
        }
      }
      BuiltinOperation::Print | BuiltinOperation::Println => {
        if self.call.stx.arguments.is_empty() {
          (Vec::new(), true)
        } else {
          // The first argument keeps its own type; the rest are boxed.
          (
            vec![param(self.arg_type(0)?), param(Type::empty_interface())],
            true,
          )
        }
      }
      BuiltinOperation::Close | BuiltinOperation::Len | BuiltinOperation::Cap => {
        (vec![param(self.arg_type(0)?)], false)
      }
      BuiltinOperation::Copy => {
        let dst = self.arg_type(0)?;
        let src = self.arg_type(1)?;
        let shared = if slice_elem(&dst).is_some() {
          dst.underlying()
        } else if slice_elem(&src).is_some() {
          src.underlying()
        } else {
          return Err(
            self
              .ice("neither copy argument is a slice")
              .with_context("arg0", dst.to_string())
              .with_context("arg1", src.to_string()),
          );
        };
        let shared = param(shared);
        (vec![shared.clone(), shared], false)
      }
      BuiltinOperation::Delete => {
        let map = self.arg_type(0)?;
        let key = match map.underlying().kind() {
          TypeKind::Map { key, .. } => key.clone(),
          _ => {
            return Err(
              self
                .ice("delete argument is not a map")
                .with_context("arg0", map.to_string()),
            )
          }
        };
        (vec![param(map), param(key)], false)
      }
      BuiltinOperation::Real | BuiltinOperation::Imag => {
        let kind = self.result_basic_kind()?;
        let Some(operand) = complex_counterpart(kind) else {
          return Err(
            self
              .ice("unexpected result kind for complex decomposition")
              .with_context("result", kind.name()),
          );
        };
        (vec![param(Type::basic(operand))], false)
      }
      BuiltinOperation::Complex => {
        let kind = self.result_basic_kind()?;
        let Some(operand) = float_counterpart(kind) else {
          return Err(
            self
              .ice("unexpected result kind for complex construction")
              .with_context("result", kind.name()),
          );
        };
        let part = param(Type::basic(operand));
        (vec![part.clone(), part], false)
      }
      BuiltinOperation::Panic => (vec![param(Type::empty_interface())], false),
      BuiltinOperation::Recover => (Vec::new(), false),
    };
    Ok(Signature::new(params, Vec::new(), variadic))
  }
}

impl FactStore {
  /// The builtin operation a call invokes, if its callee (parentheses removed)
  /// is an identifier bound to one of the synthesized builtins. Calls to other
  /// predeclared functions such as `make` are not recognized.
  pub fn builtin_of(&self, call: &Node<CallExpr>) -> Option<BuiltinOperation> {
    let callee = unparen(&call.stx.callee).as_ident()?;
    match self.object_of(callee)? {
      Object::Builtin(builtin) => builtin.name.parse().ok(),
      _ => None,
    }
  }

  /// The builtin operation named by a call already known to invoke one.
  pub fn builtin_operation_of_call(&self, call: &Node<CallExpr>) -> Result<BuiltinOperation, Ice> {
    let Some(callee) = unparen(&call.stx.callee).as_ident() else {
      return Err(Ice::new("builtin callee is not an identifier").at(call.id, call.loc));
    };
    callee.stx.name.parse().map_err(|err: UnknownBuiltin| {
      Ice::new(err.to_string())
        .with_context("name", err.0)
        .at(call.id, call.loc)
    })
  }

  /// The effective signature of one call to a builtin operation.
  ///
  /// Arity is assumed to have been checked already. Fails with an [`Ice`] if
  /// the callee is not a known builtin or the recorded types lack the shape
  /// the operation's rule needs.
  pub fn builtin_call_signature(&self, call: &Node<CallExpr>) -> Result<Signature, Ice> {
    let op = self.builtin_operation_of_call(call)?;
    let span = debug_span!(
      "facts_go.builtin_signature",
      builtin = op.name(),
      node = %call.id,
      params = field::Empty,
      variadic = field::Empty,
    );
    let _guard = span.enter();
    let sig = CallSite {
      store: self,
      call,
      op,
    }
    .signature()?;
    span.record("params", field::display(&sig));
    span.record("variadic", sig.is_variadic());
    Ok(sig)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip() {
    for op in BuiltinOperation::ALL {
      assert_eq!(op.name().parse::<BuiltinOperation>(), Ok(op));
      assert_eq!(op.to_string(), op.name());
    }
  }

  #[test]
  fn other_predeclared_functions_are_not_synthesized() {
    for name in ["make", "new", "min", "Append", ""] {
      let err = name.parse::<BuiltinOperation>().unwrap_err();
      assert_eq!(err.0, name);
    }
  }

  #[test]
  fn numeric_counterparts_are_inverse() {
    for kind in [BasicKind::UntypedFloat, BasicKind::Float64, BasicKind::Float32] {
      let complex = complex_counterpart(kind).unwrap();
      assert_eq!(float_counterpart(complex), Some(kind));
    }
    assert_eq!(complex_counterpart(BasicKind::Int), None);
    assert_eq!(float_counterpart(BasicKind::Float64), None);
  }
}
