use super::RewriteCache;
use crate::descriptor::RequestDescriptor;

/// Cache that stores nothing; every lookup reaches the rule store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl RewriteCache for NullCache {
    fn get(&self, _prefix: &str, _key: &str) -> Option<RequestDescriptor> {
        None
    }

    fn set(&self, _prefix: &str, _key: &str, _value: RequestDescriptor) {}

    fn clear_key(&self, _prefix: &str, _key: &str) {}
}
