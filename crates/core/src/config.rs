//! Application configuration.
//!
//! Values are layered: built-in defaults, then `game-radar.toml` in the user
//! config directory, then `game-radar.toml` in the working directory, then
//! `RADAR_*` environment variables. The scraping credential is read from
//! `FIRECRAWL_API_KEY`.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::warn;

/// File name looked up in the config directory and the working directory.
pub const CONFIG_FILE_NAME: &str = "game-radar.toml";
/// Environment variable carrying the scraping API credential.
pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";

const DEFAULT_OUTPUT_PATH: &str = "data/games.json";
const DEFAULT_SOURCE_URL: &str = "https://www.ign.com/upcoming/games";
const DEFAULT_API_BASE: &str = "https://api.firecrawl.dev";
const DEFAULT_WAIT_FOR_MS: u64 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const DEFAULT_CONFIG: &str = r#"# game-radar configuration

# Where the collection is written, relative to the working directory.
output_path = "data/games.json"

# Page rendered to markdown by the scraping service.
source_url = "https://www.ign.com/upcoming/games"

# Scraping service base URL.
api_base = "https://api.firecrawl.dev"

# Milliseconds the service waits for the page to settle.
wait_for_ms = 3000

request_timeout_secs = 60
"#;

/// Settings for a scrape run.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Destination of the JSON file.
    pub output_path: PathBuf,
    /// Page to scrape.
    pub source_url: String,
    /// Base URL of the scraping API.
    pub api_base: String,
    /// Content-settle wait passed to the scraping API.
    pub wait_for_ms: u64,
    /// Timeout applied to the outbound request.
    pub request_timeout_secs: u64,
    /// Bearer credential for the scraping API.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            wait_for_ms: DEFAULT_WAIT_FOR_MS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the standard locations and the environment.
    pub fn load() -> Result<Self> {
        let mut files = Vec::new();
        if let Some(path) = user_config_path() {
            files.push(path);
        }
        files.push(PathBuf::from(CONFIG_FILE_NAME));
        Self::load_from(&files)
    }

    /// Load configuration from the given files (missing files are skipped)
    /// layered over the defaults and under the environment.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("source_url", DEFAULT_SOURCE_URL)?
            .set_default("api_base", DEFAULT_API_BASE)?
            .set_default("wait_for_ms", DEFAULT_WAIT_FOR_MS as i64)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        for file in files {
            builder = builder.add_source(File::from(file.clone()).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("RADAR").try_parsing(true))
            .build()
            .context("failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .context("failed to parse configuration")?;

        if let Some(key) = env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty()) {
            config.api_key = Some(key);
        }
        Ok(config)
    }

    /// Override the destination file.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the scraping API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Outbound request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Location of the per-user config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("game-radar").join(CONFIG_FILE_NAME))
}

/// Write a commented default config file to the user config directory if
/// none exists yet. Returns the path when a file was written.
///
/// Failures are logged, not returned.
pub fn ensure_default_config() -> Option<PathBuf> {
    user_config_path().and_then(|path| prepare_default_config(&path))
}

fn prepare_default_config(path: &Path) -> Option<PathBuf> {
    match write_default_config(path) {
        Ok(written) => written,
        Err(err) => {
            warn!("Skipping default config: {:#}", err);
            None
        }
    }
}

fn write_default_config(path: &Path) -> Result<Option<PathBuf>> {
    if path.exists() {
        return Ok(None);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(Some(path.to_path_buf()))
}
