//! Configuration types for feedstore.
//!
//! [`Config::load`] layers the embedded defaults, a TOML file and
//! `FEEDSTORE_`-prefixed environment variables (`FEEDSTORE_SERVER__BIND`).
//! Without an explicit path it reads `~/.config/feedstore/config.toml`,
//! creating it with the defaults if it does not yet exist.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use crate::error::FeedResult;
use crate::store::FeedStore;
use crate::types::Identity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind          = "127.0.0.1:8080"
caller_header = "x-feed-caller"

[feed]
owner   = "owner"
editors = []

[log]
filter = "info"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Request header carrying the authenticated caller identity.
    #[serde(default = "default_caller_header")]
    pub caller_header: String,
}

fn default_bind() -> String { "127.0.0.1:8080".to_string() }
fn default_caller_header() -> String { "x-feed-caller".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            caller_header: default_caller_header(),
        }
    }
}

/// `[feed]` section: who owns the store at startup and who may post.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub editors: Vec<String>,
}

fn default_owner() -> String { "owner".to_string() }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            editors: Vec::new(),
        }
    }
}

impl FeedConfig {
    /// Construct the store described by this section.
    pub fn build_store(&self) -> FeedResult<FeedStore<Identity>> {
        let editors = self
            .editors
            .iter()
            .map(|e| Identity::parse(e))
            .collect::<FeedResult<Vec<_>>>()?;
        FeedStore::new(Identity::parse(&self.owner)?, editors)
    }
}

/// `[log]` section. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and created with the defaults if missing.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => {
                let path = config_path();
                if !path.exists() {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
                }
                (path, false)
            }
        };

        Self::layered(&path, required, environment())
    }

    fn layered(path: &Path, required: bool, env: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Environment layer
// ---------------------------------------------------------------------------

/// `FEEDSTORE_<SECTION>__<KEY>`; `FEEDSTORE_FEED__EDITORS` is comma separated.
fn environment() -> config::Environment {
    config::Environment::with_prefix("FEEDSTORE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("feed.editors")
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("feedstore")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
