pub mod config;
pub mod logging;

pub mod cache;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod fs;
pub mod resolver;
pub mod slug;
pub mod store;

pub use descriptor::RequestDescriptor;
pub use error::{ErrorKind, RewriteError};
pub use resolver::{RewriteResolver, Rewriter};
pub use slug::{make_readable, Slug};
