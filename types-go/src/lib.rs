//! The semantic model a typechecker produces for Go code.
//!
//! Types, objects and modules are cheap to clone shared handles. Basic types
//! and the empty interface are process-wide singletons, so they can be
//! compared with [`Type::ptr_eq`] as well as `==`.

pub mod constant;
pub mod object;
pub mod types;
pub mod universe;

pub use constant::ConstantValue;
pub use object::is_exported;
pub use object::Module;
pub use object::ModuleBuilder;
pub use object::Object;
pub use object::Scope;
pub use types::BasicKind;
pub use types::ChanDir;
pub use types::Method;
pub use types::Signature;
pub use types::Type;
pub use types::TypeKind;
pub use types::Var;
