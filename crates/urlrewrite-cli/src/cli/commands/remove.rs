//! `urlrewrite remove <slug>` – drop a rule from the document and the cache.

use anyhow::{bail, Result};
use urlrewrite_core::{Rewriter, Slug};

pub fn run_remove(resolver: &impl Rewriter, slug: &str) -> Result<()> {
    if !resolver.remove(slug) {
        bail!("rule for '{slug}' could not be removed; see the log for details");
    }
    println!("Removed rule for {}", Slug::parse(slug));
    Ok(())
}
