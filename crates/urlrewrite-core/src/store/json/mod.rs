//! Rule store backed by a single JSON document.
//!
//! Every operation reads the whole document and mutations rewrite it in full
//! (delete, then write). There is no locking: two writers racing on the same
//! file can lose one update. Only a single writer per document is safe.

mod table;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::descriptor::{decode_rule, encode_rule, RequestDescriptor};
use crate::diagnostics::{ErrorSink, TracingSink};
use crate::error::RewriteError;
use crate::fs::{Filesystem, LocalFilesystem};
use crate::slug::Slug;

use super::RuleStore;
use table::RuleTable;

/// Default document location relative to the configuration base directory.
pub const DEFAULT_RULES_FILE: &str = "config/urlrewrite.json";

pub struct JsonRuleStore<F = LocalFilesystem> {
    path: PathBuf,
    fs: F,
    sink: Arc<dyn ErrorSink>,
}

impl JsonRuleStore<LocalFilesystem> {
    /// Store for the document at `path` on the local disk.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_filesystem(path, LocalFilesystem)
    }
}

impl<F: Filesystem> JsonRuleStore<F> {
    pub fn with_filesystem(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
            sink: Arc::new(TracingSink),
        }
    }

    /// Where tolerated errors (e.g. a corrupt document overwritten by `put_rule`) are reported.
    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: std::io::Error) -> RewriteError {
        RewriteError::Storage {
            path: self.path.clone(),
            source,
        }
    }

    /// `Ok(None)` when the document does not exist.
    fn read_table(&self) -> Result<Option<RuleTable>, RewriteError> {
        if !self.fs.file_available(&self.path) {
            tracing::debug!(path = %self.path.display(), "rule document missing");
            return Ok(None);
        }
        let text = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| self.storage_error(e))?;
        let table = RuleTable::parse(&text).map_err(|source| RewriteError::Document {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(table))
    }

    /// Table to start a write from: unreadable or corrupt documents count as empty.
    fn load_table_for_write(&self) -> RuleTable {
        match self.read_table() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                self.sink.report(&e);
                RuleTable::default()
            }
        }
    }

    fn write_table(&self, table: &RuleTable) -> Result<(), RewriteError> {
        let json = table.to_json().map_err(RewriteError::Encode)?;
        self.fs
            .file_delete(&self.path)
            .map_err(|e| self.storage_error(e))?;
        self.fs
            .file_write(&self.path, &json)
            .map_err(|e| self.storage_error(e))?;
        tracing::debug!(path = %self.path.display(), rules = table.len(), "rule document written");
        Ok(())
    }
}

impl<F: Filesystem> RuleStore for JsonRuleStore<F> {
    fn fetch_rule(&self, slug: &Slug) -> Result<Option<RequestDescriptor>, RewriteError> {
        let Some(table) = self.read_table()? else {
            return Ok(None);
        };
        table
            .get(slug.as_str())
            .map(|raw| decode_rule(slug.as_str(), raw))
            .transpose()
    }

    fn put_rule(&self, slug: &Slug, descriptor: &RequestDescriptor) -> Result<(), RewriteError> {
        let encoded = encode_rule(descriptor)?;
        let mut table = self.load_table_for_write();
        table.insert(slug.as_str().to_string(), encoded);
        self.write_table(&table)
    }

    fn delete_rule(&self, slug: &Slug) -> Result<bool, RewriteError> {
        let Some(mut table) = self.read_table()? else {
            return Ok(false);
        };
        if table.remove(slug.as_str()).is_none() {
            return Ok(false);
        }
        self.write_table(&table)?;
        Ok(true)
    }

    fn list_rules(&self) -> Result<Vec<(Slug, RequestDescriptor)>, RewriteError> {
        let Some(table) = self.read_table()? else {
            return Ok(Vec::new());
        };
        let mut rules = Vec::with_capacity(table.len());
        for (key, raw) in table.iter() {
            match decode_rule(key, raw) {
                Ok(descriptor) => rules.push((Slug::from_normalized(key.as_str()), descriptor)),
                Err(e) => self.sink.report(&e),
            }
        }
        Ok(rules)
    }
}
