//! `urlrewrite list` – show every rule in document order.

use anyhow::Result;
use urlrewrite_core::store::RuleStore;
use urlrewrite_core::RewriteResolver;

pub fn run_list<S: RuleStore>(resolver: &RewriteResolver<S>) -> Result<()> {
    let rules = resolver.list();
    if rules.is_empty() {
        println!("No rewrite rules.");
        return Ok(());
    }
    let width = rules
        .iter()
        .map(|(slug, _)| slug.as_str().len())
        .max()
        .unwrap_or(0)
        .max("SLUG".len());
    println!("{:<width$} DESCRIPTOR", "SLUG");
    for (slug, descriptor) in rules {
        println!("{:<width$} {}", slug, serde_json::to_string(&descriptor)?);
    }
    Ok(())
}
