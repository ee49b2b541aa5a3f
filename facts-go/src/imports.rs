use crate::error::Ice;
use crate::store::FactStore;
use ahash::HashSet;
use tracing::debug_span;
use tracing::field;
use tracing::trace;
use types_go::Module;

impl FactStore {
  /// The modules this unit's own source imports, in order of first occurrence
  /// across files (in the order given) and then declarations within a file.
  ///
  /// Each module appears once, and pseudo-modules never appear. This is
  /// deliberately not the module's import table, which a loader may have
  /// extended with modules the source never names.
  pub fn imports(&self) -> Result<Vec<Module>, Ice> {
    let span = debug_span!(
      "facts_go.imports",
      module = %self.module().path(),
      files = self.files().len(),
      count = field::Empty,
    );
    let _guard = span.enter();

    let mut seen = HashSet::<Module>::default();
    let mut imports = Vec::new();
    for file in self.files() {
      for spec in file.stx.imports() {
        let Some(path) = spec.stx.path_value() else {
          return Err(
            Ice::new("malformed import path literal")
              .with_context("literal", spec.stx.path.stx.raw.clone())
              .at(spec.id, spec.loc),
          );
        };
        if self.options().is_pseudo_module(&path) {
          trace!(path = %path, "skipping pseudo-module import");
          continue;
        }
        let Some(module) = self.module().import(&path) else {
          return Err(
            Ice::new("import path missing from the module's import table")
              .with_context("path", path)
              .with_context("module", self.module().path())
              .at(spec.id, spec.loc),
          );
        };
        if !seen.insert(module.clone()) {
          trace!(path = %path, "skipping repeated import");
          continue;
        }
        imports.push(module.clone());
      }
    }

    span.record("count", imports.len());
    Ok(imports)
  }
}
