use std::sync::{Arc, OnceLock};

use crate::animations::Animation;
use crate::catalog::model::{Catalog, CatalogEntry};
use crate::foundation::error::{LoopreelError, LoopreelResult};

pub(crate) mod builtin;
pub(crate) mod registry;

use registry::Registry;

/// Catalog and renderer registry, checked to cover exactly the same keys.
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    registry: Registry,
}

static BUILTIN: OnceLock<Library> = OnceLock::new();

impl Library {
    /// Pair a catalog with a registry, failing with [`LoopreelError::MissingRenderer`] unless
    /// every catalog key has a renderer and every renderer has a catalog key.
    pub fn new(catalog: Catalog, registry: Registry) -> LoopreelResult<Self> {
        check_consistency(&catalog, &registry)?;
        Ok(Self { catalog, registry })
    }

    /// The shipped gallery, built and checked once per process.
    pub fn builtin() -> LoopreelResult<&'static Library> {
        if let Some(lib) = BUILTIN.get() {
            return Ok(lib);
        }
        let lib = Self::new(builtin::builtin_catalog()?, builtin::builtin_registry()?)?;
        tracing::debug!(entries = lib.catalog.len(), "builtin library initialized");
        Ok(BUILTIN.get_or_init(|| lib))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Entry and renderer for `key`. Unknown keys fail with
    /// [`LoopreelError::UnknownCatalogKey`] before the registry is consulted.
    pub fn resolve(&self, key: &str) -> LoopreelResult<(&CatalogEntry, Arc<dyn Animation>)> {
        let entry = self.catalog.lookup(key)?;
        let renderer = self.registry.resolve(key)?;
        Ok((entry, renderer))
    }
}

/// Verify that `catalog` and `registry` are co-indexed, reporting every mismatch.
pub fn check_consistency(catalog: &Catalog, registry: &Registry) -> LoopreelResult<()> {
    let unrendered: Vec<&str> = catalog.keys().filter(|k| !registry.contains(k)).collect();
    let uncataloged: Vec<&str> = registry.keys().filter(|k| !catalog.contains(k)).collect();
    if unrendered.is_empty() && uncataloged.is_empty() {
        return Ok(());
    }

    let mut problems = Vec::new();
    if !unrendered.is_empty() {
        problems.push(format!(
            "catalog keys without renderer: {}",
            unrendered.join(", ")
        ));
    }
    if !uncataloged.is_empty() {
        problems.push(format!(
            "renderers without catalog entry: {}",
            uncataloged.join(", ")
        ));
    }
    Err(LoopreelError::missing_renderer(problems.join("; ")))
}

#[cfg(test)]
#[path = "../../tests/unit/library/mod.rs"]
mod tests;
