//! Cache-first resolution of readable URLs into request descriptors.
//!
//! [`RewriteResolver`] is the single funnel in front of a [`RuleStore`]:
//! it normalizes slugs, consults the cache before the store, caches misses
//! (including negative ones) and keeps the cache in step with mutations.
//! Failures never reach the caller; they go to the configured [`ErrorSink`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::cache::{self, RewriteCache};
use crate::config::RewriteConfig;
use crate::descriptor::RequestDescriptor;
use crate::diagnostics::{ErrorSink, TracingSink};
use crate::error::{ErrorKind, RewriteError};
use crate::slug::{self, Slug};
use crate::store::{JsonRuleStore, RuleStore};

/// The contract exposed to request handlers and admin tooling.
///
/// Every call returns a definite answer: an unresolvable slug yields an
/// empty descriptor and a failed mutation yields `false`.
pub trait Rewriter {
    fn get(&self, readable_url: &str) -> RequestDescriptor;
    fn add(&self, readable_url: &str, descriptor: RequestDescriptor) -> bool;
    fn remove(&self, readable_url: &str) -> bool;
}

pub struct RewriteResolver<S> {
    store: S,
    cache: Arc<dyn RewriteCache>,
    sink: Arc<dyn ErrorSink>,
    prefix: String,
}

impl<S: RuleStore> RewriteResolver<S> {
    /// Resolver over `store`, namespaced under the default cache prefix.
    pub fn new(store: S, cache: Arc<dyn RewriteCache>, sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            store,
            cache,
            sink,
            prefix: cache::rewrite_prefix(cache::DEFAULT_PREFIX),
        }
    }

    /// Use `default_prefix` instead of [`cache::DEFAULT_PREFIX`] as the shared prefix.
    pub fn with_cache_prefix(mut self, default_prefix: &str) -> Self {
        self.prefix = cache::rewrite_prefix(default_prefix);
        self
    }

    pub fn cache_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// See [`slug::make_readable`].
    pub fn make_readable(raw: &str) -> String {
        slug::make_readable(raw)
    }

    /// Every readable rule in storage order; empty if storage fails.
    pub fn list(&self) -> Vec<(Slug, RequestDescriptor)> {
        self.store.list_rules().unwrap_or_else(|e| {
            self.sink.report(&e);
            Vec::new()
        })
    }

    fn parse_for_mutation(&self, raw: &str) -> Option<Slug> {
        let slug = Slug::parse(raw);
        if slug.is_empty() {
            self.sink.report(&RewriteError::InvalidSlug {
                raw: raw.to_string(),
            });
            return None;
        }
        Some(slug)
    }
}

impl<S: RuleStore> Rewriter for RewriteResolver<S> {
    fn get(&self, readable_url: &str) -> RequestDescriptor {
        let slug = Slug::parse(readable_url);
        if slug.is_empty() {
            return RequestDescriptor::new();
        }

        if let Some(cached) = self.cache.get(&self.prefix, slug.as_str()) {
            tracing::debug!(%slug, negative = cached.is_empty(), "rewrite cache hit");
            return cached;
        }

        match self.store.fetch_rule(&slug) {
            Ok(found) => {
                let descriptor = found.unwrap_or_default();
                tracing::debug!(%slug, found = !descriptor.is_empty(), "rewrite cache miss");
                self.cache.set(&self.prefix, slug.as_str(), descriptor.clone());
                descriptor
            }
            Err(e) => {
                self.sink.report(&e);
                // A malformed rule stays malformed until rewritten; an outage may not.
                if e.kind() == ErrorKind::Decode {
                    self.cache
                        .set(&self.prefix, slug.as_str(), RequestDescriptor::new());
                }
                RequestDescriptor::new()
            }
        }
    }

    fn add(&self, readable_url: &str, descriptor: RequestDescriptor) -> bool {
        let Some(slug) = self.parse_for_mutation(readable_url) else {
            return false;
        };
        match self.store.put_rule(&slug, &descriptor) {
            Ok(()) => {
                tracing::info!(%slug, "rewrite rule stored");
                self.cache.set(&self.prefix, slug.as_str(), descriptor);
                true
            }
            Err(e) => {
                self.sink.report(&e);
                self.cache.clear_key(&self.prefix, slug.as_str());
                false
            }
        }
    }

    fn remove(&self, readable_url: &str) -> bool {
        let Some(slug) = self.parse_for_mutation(readable_url) else {
            return false;
        };
        let persisted = match self.store.delete_rule(&slug) {
            Ok(existed) => {
                tracing::info!(%slug, existed, "rewrite rule removed");
                true
            }
            Err(e) => {
                self.sink.report(&e);
                false
            }
        };
        self.cache.clear_key(&self.prefix, slug.as_str());
        persisted
    }
}

impl RewriteResolver<JsonRuleStore> {
    /// Resolver over the JSON document named by `cfg`, with the cache it configures.
    pub fn from_config(cfg: &RewriteConfig) -> Result<Self> {
        let path = cfg.rules_path()?;
        Ok(Self::from_config_at(cfg, path))
    }

    /// Like [`from_config`](Self::from_config) but with an explicit document path.
    pub fn from_config_at(cfg: &RewriteConfig, rules_path: PathBuf) -> Self {
        let sink: Arc<dyn ErrorSink> = Arc::new(TracingSink);
        Self::from_config_with_sink(cfg, rules_path, sink)
    }

    pub fn from_config_with_sink(
        cfg: &RewriteConfig,
        rules_path: PathBuf,
        sink: Arc<dyn ErrorSink>,
    ) -> Self {
        tracing::debug!(path = %rules_path.display(), "opening rule document");
        let store = JsonRuleStore::open(rules_path).with_sink(sink.clone());
        Self::new(store, cfg.cache.build(), sink).with_cache_prefix(&cfg.cache.default_prefix)
    }
}
