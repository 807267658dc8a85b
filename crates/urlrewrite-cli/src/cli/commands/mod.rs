//! CLI command handlers, one file per subcommand.

mod add;
mod get;
mod list;
mod normalize;
mod remove;

pub use add::run_add;
pub use get::run_get;
pub use list::run_list;
pub use normalize::run_normalize;
pub use remove::run_remove;

#[cfg(test)]
pub(crate) use add::parse_descriptor;
