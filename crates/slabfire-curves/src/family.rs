//! Keyed curve families.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use slabfire_core::{FireError, FireResult};

use crate::error::{CurveError, CurveResult};

/// A read-only mapping from a discrete key to a curve-like entry.
///
/// Keys are kept ordered so that the valid-key listing in
/// [`FireError::UnknownCategory`] is deterministic.
#[derive(Clone)]
pub struct CurveFamily<K, C> {
    kind: &'static str,
    entries: BTreeMap<K, C>,
}

impl<K: Ord + Display + Copy, C> CurveFamily<K, C> {
    /// Builds a family from `(key, entry)` pairs.
    ///
    /// `kind` names the key category in error messages (e.g. "aggregate type").
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DuplicateKey`] if a key appears twice.
    pub fn from_entries(
        kind: &'static str,
        entries: impl IntoIterator<Item = (K, C)>,
    ) -> CurveResult<Self> {
        let mut map = BTreeMap::new();
        for (key, entry) in entries {
            if map.insert(key, entry).is_some() {
                return Err(CurveError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { kind, entries: map })
    }

    /// Looks up the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FireError::UnknownCategory`] listing the loaded keys.
    pub fn get(&self, key: &K) -> FireResult<&C> {
        self.entries.get(key).ok_or_else(|| {
            FireError::unknown_category(self.kind, key.to_string(), self.entries.keys())
        })
    }

    /// Returns true if `key` is loaded.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Loaded keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Loaded entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
        self.entries.iter()
    }

    /// Number of loaded keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the key category.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<K: fmt::Debug, C> fmt::Debug for CurveFamily<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveFamily")
            .field("kind", &self.kind)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
