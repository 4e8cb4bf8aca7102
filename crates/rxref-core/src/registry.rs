//! Load-time classification of registry rows and process-wide caching.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use rxref_model::{ParsedForm, RegistryRow};

use crate::form::classify_form;
use crate::normalize::normalize_text;

/// A registry row together with its precomputed comparison keys.
#[derive(Debug, Clone)]
pub struct ClassifiedRow {
    /// The row as loaded.
    pub row: RegistryRow,

    /// Structured classification of `row.form_text`. Shared between rows
    /// with identical raw form text.
    pub parsed: Arc<ParsedForm>,

    /// Normalized active-ingredient name, computed once for matching.
    pub ingredient_norm: String,
}

/// An immutable, fully classified registry.
///
/// Built once from loaded rows; afterwards it is read-only and safe to
/// share across threads without locking.
#[derive(Debug, Default)]
pub struct Registry {
    rows: Vec<ClassifiedRow>,
}

impl Registry {
    /// Classify every row. Form parsing is memoized on the raw form string:
    /// merged-cell sheets repeat the same description over long row runs,
    /// so distinct strings are far fewer than rows.
    pub fn classify(rows: Vec<RegistryRow>) -> Self {
        let mut forms: HashMap<String, Arc<ParsedForm>> = HashMap::new();
        let rows: Vec<ClassifiedRow> = rows
            .into_iter()
            .map(|row| {
                let parsed = forms
                    .entry(row.form_text.clone())
                    .or_insert_with(|| Arc::new(classify_form(&row.form_text)))
                    .clone();
                let ingredient_norm = normalize_text(&row.ingredient);
                ClassifiedRow {
                    row,
                    parsed,
                    ingredient_norm,
                }
            })
            .collect();
        debug!(
            rows = rows.len(),
            distinct_forms = forms.len(),
            "registry classified"
        );
        Self { rows }
    }

    /// All classified rows, in load order.
    pub fn rows(&self) -> &[ClassifiedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Process-wide cache of classified registries keyed by source path.
///
/// The lock is scoped to the map alone: loading and classification run
/// outside it, so concurrent loads of unrelated sources never serialize.
/// A registry is loaded at most once per path per process; there is no
/// eviction because sources are bounded and loaded once.
#[derive(Debug, Default)]
pub struct RegistryCache {
    entries: Mutex<HashMap<PathBuf, Arc<Registry>>>,
}

impl RegistryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the registry for `path`, invoking `load` on a cache miss.
    ///
    /// If two threads miss concurrently both will load, and the first
    /// insert wins; the loser's work is discarded rather than holding the
    /// lock across classification.
    pub fn get_or_load<E>(
        &self,
        path: &Path,
        load: impl FnOnce() -> Result<Registry, E>,
    ) -> Result<Arc<Registry>, E> {
        if let Some(found) = self.lock_entries().get(path) {
            return Ok(found.clone());
        }

        let loaded = Arc::new(load()?);
        let mut entries = self.lock_entries();
        let entry = entries
            .entry(path.to_path_buf())
            .or_insert_with(|| loaded.clone());
        Ok(entry.clone())
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<Registry>>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_loads_each_path_once() {
        let cache = RegistryCache::new();
        let path = Path::new("registry.csv");
        let mut loads = 0;

        let first: Result<_, std::convert::Infallible> = cache.get_or_load(path, || {
            loads += 1;
            Ok(Registry::classify(Vec::new()))
        });
        let second: Result<_, std::convert::Infallible> = cache.get_or_load(path, || {
            loads += 1;
            Ok(Registry::classify(Vec::new()))
        });

        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
        assert_eq!(loads, 1);
    }

    #[test]
    fn load_errors_are_not_cached() {
        let cache = RegistryCache::new();
        let path = Path::new("registry.csv");

        let failed: Result<Arc<Registry>, &str> = cache.get_or_load(path, || Err("boom"));
        assert!(failed.is_err());

        let recovered: Result<Arc<Registry>, &str> =
            cache.get_or_load(path, || Ok(Registry::classify(Vec::new())));
        assert!(recovered.is_ok());
    }
}
