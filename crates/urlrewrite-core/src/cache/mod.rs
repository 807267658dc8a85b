//! Cache collaborator for resolved rules.
//!
//! Entries are addressed by `(prefix, key)`. The resolver only ever reads,
//! writes and clears single keys; it never iterates the cache. A cached empty
//! descriptor is a remembered miss.

mod memory;
mod null;

pub use memory::MemoryCache;
pub use null::NullCache;

use crate::descriptor::RequestDescriptor;

/// Namespace appended to the shared default prefix for rewrite entries.
pub const MODULE_PREFIX: &str = "URLREWRITE_";

/// Shared default prefix used when the config does not name one.
pub const DEFAULT_PREFIX: &str = "CACHE_";

/// Full prefix for rewrite entries under the given shared prefix.
pub fn rewrite_prefix(default_prefix: &str) -> String {
    format!("{default_prefix}{MODULE_PREFIX}")
}

pub trait RewriteCache: Send + Sync {
    fn get(&self, prefix: &str, key: &str) -> Option<RequestDescriptor>;
    fn set(&self, prefix: &str, key: &str, value: RequestDescriptor);
    fn clear_key(&self, prefix: &str, key: &str);
}

impl<C: RewriteCache + ?Sized> RewriteCache for std::sync::Arc<C> {
    fn get(&self, prefix: &str, key: &str) -> Option<RequestDescriptor> {
        (**self).get(prefix, key)
    }

    fn set(&self, prefix: &str, key: &str, value: RequestDescriptor) {
        (**self).set(prefix, key, value)
    }

    fn clear_key(&self, prefix: &str, key: &str) {
        (**self).clear_key(prefix, key)
    }
}
