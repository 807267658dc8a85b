//! CLI for administering URL rewrite rules.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlrewrite_core::config;
use urlrewrite_core::RewriteResolver;

use commands::{run_add, run_get, run_list, run_normalize, run_remove};

/// Top-level CLI for urlrewrite.
#[derive(Debug, Parser)]
#[command(name = "urlrewrite")]
#[command(about = "urlrewrite: map readable URL slugs to request descriptors", long_about = None)]
pub struct Cli {
    /// Rule document to use instead of the one resolved from config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a slug and print its request descriptor.
    Get {
        /// Readable URL, e.g. "contact_us" or "Contact%20Us".
        slug: String,
    },

    /// Add or replace the rule for a slug.
    Add {
        /// Readable URL to register.
        slug: String,
        /// Request descriptor as a JSON object, e.g. '{"target":"contact","id":1}'.
        descriptor: String,
    },

    /// Remove the rule for a slug.
    Remove {
        /// Readable URL to remove.
        slug: String,
    },

    /// List every rule in the document.
    List,

    /// Print the normalized form of a slug without touching storage.
    Normalize {
        /// Raw input.
        raw: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Normalize { raw } = &cli.command {
            run_normalize(raw);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = match cli.rules {
            Some(path) => RewriteResolver::from_config_at(&cfg, path),
            None => RewriteResolver::from_config(&cfg)?,
        };

        match cli.command {
            CliCommand::Get { slug } => run_get(&resolver, &slug)?,
            CliCommand::Add { slug, descriptor } => run_add(&resolver, &slug, &descriptor)?,
            CliCommand::Remove { slug } => run_remove(&resolver, &slug)?,
            CliCommand::List => run_list(&resolver)?,
            CliCommand::Normalize { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
