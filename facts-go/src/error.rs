use std::fmt::Write;
use syntax_go::ast::node::NodeId;
use syntax_go::loc::Loc;

/// Internal compiler error: a caller broke a documented precondition, or the
/// typechecker's facts are inconsistent with what a query relies on.
///
/// Never a user-facing condition. Callers should abort the enclosing
/// analysis rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {message}{}", render_context(.context))]
pub struct Ice {
  pub message: String,
  pub context: Vec<(String, String)>,
}

fn render_context(context: &[(String, String)]) -> String {
  let mut out = String::new();
  for (i, (key, value)) in context.iter().enumerate() {
    let sep = if i == 0 { " (" } else { ", " };
    let _ = write!(out, "{sep}{key} = {value}");
  }
  if !context.is_empty() {
    out.push(')');
  }
  out
}

impl Ice {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      context: Vec::new(),
    }
  }

  pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.context.push((key.into(), value.into()));
    self
  }

  /// Names the node the error is about.
  pub fn at(self, node: NodeId, loc: Loc) -> Self {
    self
      .with_context("node", node.to_string())
      .with_context("loc", loc.to_string())
  }

  pub fn context_value(&self, key: &str) -> Option<&str> {
    self
      .context
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
  }
}
