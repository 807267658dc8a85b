//! Tests for subcommand and flag parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_get() {
    match parse(&["urlrewrite", "get", "contact_us"]).command {
        CliCommand::Get { slug } => assert_eq!(slug, "contact_us"),
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_add() {
    match parse(&["urlrewrite", "add", "Contact Us", r#"{"target":"contact"}"#]).command {
        CliCommand::Add { slug, descriptor } => {
            assert_eq!(slug, "Contact Us");
            assert_eq!(descriptor, r#"{"target":"contact"}"#);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_descriptor() {
    assert!(Cli::try_parse_from(["urlrewrite", "add", "contact_us"]).is_err());
}

#[test]
fn cli_parse_remove() {
    match parse(&["urlrewrite", "remove", "contact_us"]).command {
        CliCommand::Remove { slug } => assert_eq!(slug, "contact_us"),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_list() {
    let cli = parse(&["urlrewrite", "list"]);
    assert!(matches!(cli.command, CliCommand::List));
    assert!(cli.rules.is_none());
}

#[test]
fn cli_parse_normalize() {
    match parse(&["urlrewrite", "normalize", "My Page"]).command {
        CliCommand::Normalize { raw } => assert_eq!(raw, "My Page"),
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_rules_override_after_subcommand() {
    let cli = parse(&["urlrewrite", "get", "home", "--rules", "/tmp/rules.json"]);
    assert_eq!(cli.rules.as_deref(), Some(Path::new("/tmp/rules.json")));
}

#[test]
fn cli_parse_rules_override_before_subcommand() {
    let cli = parse(&["urlrewrite", "--rules", "/tmp/rules.json", "list"]);
    assert_eq!(cli.rules.as_deref(), Some(Path::new("/tmp/rules.json")));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["urlrewrite", "purge"]).is_err());
}
