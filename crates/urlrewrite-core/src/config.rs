use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{self, MemoryCache, NullCache, RewriteCache};
use crate::store::{self, json::DEFAULT_RULES_FILE};

/// Every distinct unknown slug is remembered as a miss, so the defaults are bounded.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Rule cache parameters (`[cache]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When false, every lookup reads the rule document.
    pub enabled: bool,
    /// Shared prefix; rewrite entries live under `<default_prefix>URLREWRITE_`.
    pub default_prefix: String,
    /// Seconds before a cached rule (or cached miss) expires. None = never.
    pub ttl_secs: Option<u64>,
    /// Upper bound on cached slugs. None = unbounded.
    pub max_entries: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_prefix: cache::DEFAULT_PREFIX.to_string(),
            ttl_secs: Some(DEFAULT_TTL_SECS),
            max_entries: Some(DEFAULT_MAX_ENTRIES),
        }
    }
}

impl CacheConfig {
    pub fn build(&self) -> Arc<dyn RewriteCache> {
        if !self.enabled {
            return Arc::new(NullCache);
        }
        Arc::new(self.memory_cache())
    }

    /// The in-process cache these settings describe, ignoring `enabled`.
    pub fn memory_cache(&self) -> MemoryCache {
        MemoryCache::bounded(self.max_entries, self.ttl_secs.map(Duration::from_secs))
    }
}

/// Global configuration loaded from `~/.config/urlrewrite/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Directories searched in order for `rules_file`; the first holding it wins.
    /// Empty = `~/.local/share/urlrewrite`.
    pub base_dirs: Vec<PathBuf>,
    /// Rule document path, relative to the base directories (or absolute).
    pub rules_file: PathBuf,
    pub cache: CacheConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            base_dirs: Vec::new(),
            rules_file: PathBuf::from(DEFAULT_RULES_FILE),
            cache: CacheConfig::default(),
        }
    }
}

impl RewriteConfig {
    /// Resolved location of the rule document.
    pub fn rules_path(&self) -> Result<PathBuf> {
        let dirs = if self.base_dirs.is_empty() {
            vec![default_base_dir()?]
        } else {
            self.base_dirs.clone()
        };
        store::inherited_path(&dirs, &self.rules_file)
            .ok_or_else(|| anyhow::anyhow!("no base directory for {}", self.rules_file.display()))
    }
}

/// `~/.local/share/urlrewrite`
pub fn default_base_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_data_home().join("urlrewrite"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlrewrite")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RewriteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RewriteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<RewriteConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RewriteConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
