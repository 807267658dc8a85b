//! Process-local cache backed by `moka`, optionally bounded and expiring.

use std::time::Duration;

use moka::sync::Cache;

use super::RewriteCache;
use crate::descriptor::RequestDescriptor;

#[derive(Clone)]
pub struct MemoryCache {
    inner: Cache<String, RequestDescriptor>,
}

impl MemoryCache {
    /// Unbounded cache without expiry.
    pub fn new() -> Self {
        Self::bounded(None, None)
    }

    /// `max_entries` caps the number of cached slugs; `ttl` expires entries
    /// (hits and remembered misses alike) that long after they were stored.
    pub fn bounded(max_entries: Option<u64>, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::<String, RequestDescriptor>::builder();
        if let Some(max) = max_entries {
            builder = builder.max_capacity(max.max(1));
        }
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
        }
    }

    /// Entry count after pending evictions have been applied.
    pub fn len(&self) -> usize {
        self.inner.run_pending_tasks();
        self.inner.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn full_key(prefix: &str, key: &str) -> String {
        format!("{prefix}{key}")
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteCache for MemoryCache {
    fn get(&self, prefix: &str, key: &str) -> Option<RequestDescriptor> {
        self.inner.get(&Self::full_key(prefix, key))
    }

    fn set(&self, prefix: &str, key: &str, value: RequestDescriptor) {
        self.inner.insert(Self::full_key(prefix, key), value);
    }

    fn clear_key(&self, prefix: &str, key: &str) {
        self.inner.invalidate(&Self::full_key(prefix, key));
    }
}
