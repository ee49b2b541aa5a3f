//! Read-only facts about a typechecked Go compilation unit.
//!
//! A typechecking pass feeds its deductions into a [`FactRecorder`]; once it
//! is done, [`FactRecorder::finish`] produces a [`FactStore`] that downstream
//! passes (IR construction, dependency graphs) query concurrently:
//!
//! - types, constant values and bindings of syntax nodes,
//! - whether an expression denotes a type,
//! - the modules the unit's source imports ([`FactStore::imports`]),
//! - call-site signatures of builtin operations
//!   ([`FactStore::builtin_call_signature`]).
//!
//! Absence that is a normal outcome is an `Option`; anything that indicates a
//! broken precondition or inconsistent facts is an [`Ice`].

pub mod builtin;
pub mod error;
mod imports;
pub mod options;
pub mod store;

pub use builtin::BuiltinOperation;
pub use error::Ice;
pub use options::FactsOptions;
pub use store::FactRecorder;
pub use store::FactStore;
