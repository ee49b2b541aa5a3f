use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsOptions {
  /// Import paths that do not denote a real importable unit, such as the
  /// low-level `unsafe` package. They never appear in the import list.
  pub pseudo_modules: Vec<String>,
}

impl Default for FactsOptions {
  fn default() -> Self {
    Self {
      pseudo_modules: vec!["unsafe".to_string()],
    }
  }
}

impl FactsOptions {
  pub fn is_pseudo_module(&self, path: &str) -> bool {
    self.pseudo_modules.iter().any(|p| p == path)
  }
}

#[cfg(test)]
mod tests {
  use super::FactsOptions;

  #[test]
  fn unsafe_is_a_pseudo_module_by_default() {
    let options = FactsOptions::default();
    assert!(options.is_pseudo_module("unsafe"));
    assert!(!options.is_pseudo_module("fmt"));
  }

  #[test]
  fn missing_fields_take_defaults() {
    let options: FactsOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FactsOptions::default());
    let options: FactsOptions =
      serde_json::from_str(r#"{"pseudo_modules": ["unsafe", "C"]}"#).unwrap();
    assert!(options.is_pseudo_module("C"));
    assert_eq!(
      serde_json::to_value(FactsOptions::default()).unwrap(),
      serde_json::json!({"pseudo_modules": ["unsafe"]})
    );
  }
}
