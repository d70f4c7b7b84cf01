//! Process-wide cache of flattened ancestor levels.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::property::ModelProperty;

/// Insert-if-absent cache keyed by model identity.
///
/// Sibling modules share ancestor chains; the first build to flatten an
/// ancestor publishes the result and every later build reuses it. Entries
/// are immutable once inserted.
#[derive(Debug, Default)]
pub struct FlattenCache {
    entries: Mutex<HashMap<String, Arc<Vec<ModelProperty>>>>,
}

impl FlattenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached level for the given model id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Vec<ModelProperty>>> {
        self.entries.lock().get(id).map(Arc::clone)
    }

    /// Publish a flattened level unless one is already present.
    ///
    /// Returns the entry that ended up in the cache, which is the existing
    /// one when another build got there first.
    pub fn insert_if_absent(
        &self,
        id: String,
        properties: Vec<ModelProperty>,
    ) -> Arc<Vec<ModelProperty>> {
        let mut entries = self.entries.lock();
        Arc::clone(
            entries
                .entry(id)
                .or_insert_with(|| Arc::new(properties)),
        )
    }

    /// Number of cached levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
