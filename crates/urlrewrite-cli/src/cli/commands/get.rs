//! `urlrewrite get <slug>` – resolve a slug.

use anyhow::Result;
use urlrewrite_core::Rewriter;

pub fn run_get(resolver: &impl Rewriter, slug: &str) -> Result<()> {
    let descriptor = resolver.get(slug);
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
