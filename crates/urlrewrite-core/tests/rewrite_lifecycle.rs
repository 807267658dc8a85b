//! Integration tests: resolver + JSON document on disk.

mod common;

use std::sync::Arc;

use common::Site;
use serde_json::json;
use urlrewrite_core::cache::MemoryCache;
use urlrewrite_core::config::{CacheConfig, RewriteConfig};
use urlrewrite_core::store::RuleStore;
use urlrewrite_core::{ErrorKind, RequestDescriptor, RewriteResolver, Rewriter, Slug};

fn contact() -> RequestDescriptor {
    RequestDescriptor::new().with("target", "contact").with("id", 1)
}

#[test]
fn end_to_end_add_get_remove() {
    let site = Site::new();
    let resolver = site.resolver();
    assert!(!site.rules_path().exists());

    assert!(resolver.add("Contact Us", contact()));
    assert_eq!(resolver.get("contact_us"), contact());
    assert_eq!(resolver.get("missing"), RequestDescriptor::new());

    assert!(resolver.remove("contact_us"));
    assert_eq!(resolver.get("contact_us"), RequestDescriptor::new());
    assert!(site.sink.is_empty(), "{:?}", site.sink.reports());
}

#[test]
fn added_rule_survives_a_cold_cache() {
    let site = Site::new();
    assert!(site.resolver().add("contact_us", contact()));

    let fresh = site.resolver();
    assert_eq!(fresh.store().fetch_rule(&Slug::parse("contact_us")).unwrap(), Some(contact()));
    assert_eq!(fresh.get("Contact Us"), contact());
}

#[test]
fn cache_masks_document_deleted_out_of_band() {
    let site = Site::new();
    let resolver = site.resolver();
    assert!(resolver.add("contact_us", contact()));

    std::fs::remove_file(site.rules_path()).unwrap();
    assert_eq!(resolver.get("contact_us"), contact());

    // A cold resolver has nothing to fall back on.
    assert!(site.resolver().get("contact_us").is_empty());
}

#[test]
fn negative_lookup_is_not_reloaded() {
    let site = Site::new();
    let resolver = site.resolver();
    assert!(resolver.add("home", RequestDescriptor::new().with("target", "home")));

    assert!(resolver.get("missing").is_empty());

    // Make the document unreadable; a second lookup must be answered from cache.
    std::fs::write(site.rules_path(), "{ not json").unwrap();
    assert!(resolver.get("missing").is_empty());
    assert!(site.sink.is_empty(), "document was read again: {:?}", site.sink.reports());

    // A lookup that misses the cache does hit the broken document.
    assert!(resolver.get("other").is_empty());
    assert_eq!(site.sink.count(ErrorKind::Decode), 1);
}

#[test]
fn malformed_rule_is_read_and_reported_once() {
    let site = Site::new();
    let resolver = site.resolver();
    std::fs::create_dir_all(site.rules_path().parent().unwrap()).unwrap();
    std::fs::write(site.rules_path(), r#"{"broken":"{oops"}"#).unwrap();

    for _ in 0..3 {
        assert!(resolver.get("broken").is_empty());
    }
    assert_eq!(site.sink.count(ErrorKind::Decode), 1);
}

#[test]
fn removed_rule_is_gone_from_the_document_too() {
    let site = Site::new();
    let resolver = site.resolver();
    assert!(resolver.add("contact_us", contact()));
    assert!(resolver.remove("contact_us"));

    assert!(resolver.get("contact_us").is_empty());
    // Cold cache: the persisted rule must not come back after eviction.
    assert!(site.resolver().get("contact_us").is_empty());

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(site.rules_path()).unwrap()).unwrap();
    assert_eq!(doc, json!({}));
}

#[test]
fn sequential_adds_for_different_slugs_both_persist() {
    let site = Site::new();
    let x = RequestDescriptor::new().with("target", "x");
    let y = RequestDescriptor::new().with("target", "y");

    assert!(site.resolver().add("a", x.clone()));
    assert!(site.resolver().add("b", y.clone()));

    let fresh = site.resolver();
    assert_eq!(fresh.get("a"), x);
    assert_eq!(fresh.get("b"), y);
    assert_eq!(fresh.list().len(), 2);
}

#[test]
fn shared_cache_sees_other_resolvers_writes() {
    let site = Site::new();
    let cache = Arc::new(MemoryCache::new());
    let reader = site.resolver_with_cache(cache.clone());
    let writer = site.resolver_with_cache(cache);

    assert!(reader.get("news").is_empty());
    let news = RequestDescriptor::new().with("target", "news");
    assert!(writer.add("news", news.clone()));
    assert_eq!(reader.get("news"), news);
}

#[test]
fn separate_caches_keep_stale_negative_entry() {
    let site = Site::new();
    let reader = site.resolver();
    let writer = site.resolver();

    assert!(reader.get("news").is_empty());
    assert!(writer.add("news", RequestDescriptor::new().with("target", "news")));

    // No cross-instance invalidation: the reader's remembered miss wins.
    assert!(reader.get("news").is_empty());
}

#[test]
fn nested_descriptor_values_pass_through_unchanged() {
    let site = Site::new();
    let descriptor = RequestDescriptor::new()
        .with("target", "product")
        .with("params", json!({"sku": "A-1", "tags": ["new", "sale"], "price": 9.5}));
    assert!(site.resolver().add("Summer Sale", descriptor.clone()));
    assert_eq!(site.resolver().get("summer+sale"), descriptor);
}

#[test]
fn distinct_misses_do_not_grow_the_cache_past_its_bound() {
    let site = Site::new();
    let cfg = CacheConfig {
        max_entries: Some(100),
        ..CacheConfig::default()
    };
    let cache = Arc::new(cfg.memory_cache());
    let resolver = site.resolver_with_cache(cache.clone());

    for i in 0..2_000 {
        assert!(resolver.get(&format!("junk_{i}")).is_empty());
    }
    assert!(cache.len() <= 100, "len = {}", cache.len());
}

#[test]
fn resolver_from_config_writes_under_first_base_dir() {
    let site = Site::new();
    let cfg = RewriteConfig {
        base_dirs: vec![site.dir.path().to_path_buf()],
        ..RewriteConfig::default()
    };
    let resolver = RewriteResolver::from_config(&cfg).unwrap();
    assert_eq!(resolver.store().path(), site.rules_path().as_path());

    assert!(resolver.add("Contact Us", contact()));
    assert_eq!(site.resolver().get("contact_us"), contact());
}
