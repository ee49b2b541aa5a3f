//! Syntax trees for one Go compilation unit.
//!
//! Trees are built by a front end (parsing is not part of this crate) and then
//! handed, together with the typechecker's deductions, to `facts-go`. Every
//! [`ast::node::Node`] carries a [`ast::node::NodeId`] that is unique for the
//! lifetime of the process, which is what fact tables are keyed by.

pub mod ast;
pub mod lit;
pub mod loc;

pub use ast::expr::unparen;
