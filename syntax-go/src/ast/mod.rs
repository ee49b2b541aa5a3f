pub mod decl;
pub mod expr;
pub mod node;
pub mod operator;
pub mod stmt;
pub mod stx;
pub mod type_expr;
