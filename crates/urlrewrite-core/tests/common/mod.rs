//! Shared helpers: resolvers over a JSON document in a temp directory.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use urlrewrite_core::cache::{MemoryCache, RewriteCache};
use urlrewrite_core::diagnostics::CollectingSink;
use urlrewrite_core::store::json::DEFAULT_RULES_FILE;
use urlrewrite_core::store::JsonRuleStore;
use urlrewrite_core::RewriteResolver;

pub struct Site {
    pub dir: TempDir,
    pub sink: Arc<CollectingSink>,
}

impl Site {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            sink: Arc::new(CollectingSink::new()),
        }
    }

    pub fn rules_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_RULES_FILE)
    }

    /// Resolver with its own cold cache, as a fresh process would have.
    pub fn resolver(&self) -> RewriteResolver<JsonRuleStore> {
        self.resolver_with_cache(Arc::new(MemoryCache::new()))
    }

    pub fn resolver_with_cache(&self, cache: Arc<dyn RewriteCache>) -> RewriteResolver<JsonRuleStore> {
        let store = JsonRuleStore::open(self.rules_path()).with_sink(self.sink.clone());
        RewriteResolver::new(store, cache, self.sink.clone())
    }
}
