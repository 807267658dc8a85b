//! Rule storage drivers.
//!
//! A driver persists the slug → descriptor mapping. Drivers report failures
//! as `Err`; turning those into empty answers is the resolver's job.

pub mod json;
mod path;

pub use json::JsonRuleStore;
pub use path::inherited_path;

use crate::descriptor::RequestDescriptor;
use crate::error::RewriteError;
use crate::slug::Slug;

pub trait RuleStore {
    /// Looks up the rule for `slug`. `Ok(None)` when no rule exists.
    fn fetch_rule(&self, slug: &Slug) -> Result<Option<RequestDescriptor>, RewriteError>;

    /// Creates or replaces the rule for `slug`.
    fn put_rule(&self, slug: &Slug, descriptor: &RequestDescriptor) -> Result<(), RewriteError>;

    /// Deletes the rule for `slug`; returns whether a rule was present.
    fn delete_rule(&self, slug: &Slug) -> Result<bool, RewriteError>;

    /// Every readable rule in storage order.
    fn list_rules(&self) -> Result<Vec<(Slug, RequestDescriptor)>, RewriteError>;
}
