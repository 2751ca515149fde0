//! Runtime configuration for the oracle service.
//!
//! Defaults match a stock GloVe 6B/300d install. Every field can be overridden
//! through an `ICHING_*` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_LEXICON_PATH: &str = "./glove/glove.6B.300d.txt";
pub const DEFAULT_DIMENSION: usize = 300;
pub const DEFAULT_TOP_K: usize = 6;
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Whitespace-delimited word vector table.
    pub lexicon_path: PathBuf,
    /// Binary cache location. `None` means `<lexicon_path>.cache.bin`.
    pub cache_path: Option<PathBuf>,
    /// Read and write the binary cache.
    pub use_cache: bool,
    /// Expected vector dimensionality (D).
    pub dimension: usize,
    /// Number of hexagrams returned per query.
    pub top_k: usize,
    /// HTTP listen address.
    pub bind_addr: SocketAddr,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            lexicon_path: PathBuf::from(DEFAULT_LEXICON_PATH),
            cache_path: None,
            use_cache: true,
            dimension: DEFAULT_DIMENSION,
            top_k: DEFAULT_TOP_K,
            bind_addr: DEFAULT_BIND
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8000))),
        }
    }
}

impl OracleConfig {
    /// Defaults with `ICHING_*` environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`,
    /// so tests do not have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("ICHING_LEXICON_PATH") {
            config.lexicon_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ICHING_CACHE_PATH") {
            config.cache_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup("ICHING_USE_CACHE") {
            config.use_cache = parse_flag(&flag)
                .with_context(|| format!("ICHING_USE_CACHE has invalid value '{}'", flag))?;
        }
        if let Some(dim) = lookup("ICHING_DIMENSION") {
            config.dimension = dim
                .trim()
                .parse()
                .with_context(|| format!("ICHING_DIMENSION has invalid value '{}'", dim))?;
        }
        if let Some(top_k) = lookup("ICHING_TOP_K") {
            config.top_k = top_k
                .trim()
                .parse()
                .with_context(|| format!("ICHING_TOP_K has invalid value '{}'", top_k))?;
        }
        if let Some(bind) = lookup("ICHING_BIND") {
            config.bind_addr = bind
                .trim()
                .parse()
                .with_context(|| format!("ICHING_BIND has invalid value '{}'", bind))?;
        }

        if config.dimension == 0 {
            anyhow::bail!("ICHING_DIMENSION must be greater than zero");
        }

        Ok(config)
    }

    /// Resolved cache location.
    pub fn cache_file(&self) -> PathBuf {
        match &self.cache_path {
            Some(path) => path.clone(),
            None => {
                let mut raw = self.lexicon_path.clone().into_os_string();
                raw.push(".cache.bin");
                PathBuf::from(raw)
            }
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got '{}'", other)),
    }
}
