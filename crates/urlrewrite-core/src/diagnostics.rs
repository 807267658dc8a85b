//! Out-of-band error reporting.
//!
//! Rewrite operations never fail outward; whatever went wrong is reported
//! here instead. Reporting must not change control flow.

use std::sync::Mutex;

use crate::error::{ErrorKind, RewriteError};

pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &RewriteError);
}

/// Logs every reported error as a `warn` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &RewriteError) {
        tracing::warn!(kind = ?error.kind(), "{}", chain(error));
    }
}

/// Keeps reported errors in memory, rendered with their source chain.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<(ErrorKind, String)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(ErrorKind, String)> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self, kind: ErrorKind) -> usize {
        self.reports().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.reports().is_empty()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, error: &RewriteError) {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((error.kind(), chain(error)));
    }
}

/// `outer: inner: innermost`
fn chain(error: &RewriteError) -> String {
    let mut out = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    out
}
