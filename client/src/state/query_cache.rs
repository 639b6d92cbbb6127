//! Cache-first store for GraphQL responses.
//!
//! Entries are keyed by operation name plus canonical variables JSON and
//! remember which root fields they read, so a mutation can evict every
//! response touching a field (e.g. `property`) in one call.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

use serde_json::Value;

use crate::net::queries::Operation;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub operation: &'static str,
    pub variables: String,
}

impl CacheKey {
    #[must_use]
    pub fn new(op: &Operation, variables: &Value) -> Self {
        Self { operation: op.name, variables: variables.to_string() }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    root_fields: &'static [&'static str],
    data: Value,
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl QueryCache {
    #[must_use]
    pub fn get(&self, op: &Operation, variables: &Value) -> Option<&Value> {
        self.entries.get(&CacheKey::new(op, variables)).map(|entry| &entry.data)
    }

    pub fn insert(&mut self, op: &Operation, variables: &Value, data: Value) {
        self.entries
            .insert(CacheKey::new(op, variables), CacheEntry { root_fields: op.root_fields, data });
    }

    /// Drop every entry whose operation reads `field`. Returns the number evicted.
    pub fn evict_field(&mut self, field: &str) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.root_fields.iter().any(|f| *f == field));
        before - self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
