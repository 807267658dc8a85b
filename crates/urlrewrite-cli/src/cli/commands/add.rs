//! `urlrewrite add <slug> <descriptor>` – register a rule.

use anyhow::{bail, Context, Result};
use urlrewrite_core::{RequestDescriptor, Rewriter, Slug};

/// Parses a descriptor argument; it must be a JSON object.
pub(crate) fn parse_descriptor(raw: &str) -> Result<RequestDescriptor> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("descriptor is not valid JSON")?;
    RequestDescriptor::try_from(value)
        .map_err(|other| anyhow::anyhow!("descriptor must be a JSON object, got {other}"))
}

pub fn run_add(resolver: &impl Rewriter, slug: &str, descriptor: &str) -> Result<()> {
    let descriptor = parse_descriptor(descriptor)?;
    if !resolver.add(slug, descriptor) {
        bail!("rule for '{slug}' could not be stored; see the log for details");
    }
    println!("Added rule for {}", Slug::parse(slug));
    Ok(())
}
