//! Configuration loading for EssentialAI.
//! Reads essentialai.toml from the current directory or the path in the ESSENTIALAI_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_ENV: &str = "ESSENTIALAI_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "essentialai.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), static_dir: default_static_dir() }
    }
}

/// Which predictor backs the /predict form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorMode {
    Static,
    Remote,
}

impl std::str::FromStr for PredictorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(PredictorMode::Static),
            "remote" => Ok(PredictorMode::Remote),
            other => anyhow::bail!("Unknown predictor mode '{}' (expected 'static' or 'remote')", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    #[serde(default = "default_mode")]
    pub mode: PredictorMode,
    /// Hosted Gradio app receiving `{ "data": [[..features..]] }`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_mode()     -> PredictorMode { PredictorMode::Static }
fn default_endpoint() -> String        { "https://29036e4cb32be8988e.gradio.live/".to_string() }

impl Default for PredictorConfig {
    fn default() -> Self {
        Self { mode: default_mode(), endpoint: default_endpoint(), timeout_secs: None }
    }
}

impl PredictorConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,
}

fn default_cookie_name() -> String { "essentialai_session".to_string() }
fn default_ttl_minutes() -> u64    { 60 }

impl Default for SessionConfig {
    fn default() -> Self {
        Self { cookie_name: default_cookie_name(), ttl_minutes: default_ttl_minutes() }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes.saturating_mul(60))
    }
}

mod tests;

impl Config {
    /// Load configuration from essentialai.toml.
    /// Checks ESSENTIALAI_CONFIG first, then the current directory. A missing
    /// default file falls back to built-in defaults; a missing file named by
    /// the env var is an error. Environment overrides are applied last.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load_from(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load_from(DEFAULT_CONFIG_PATH)?,
            Err(_) => {
                tracing::info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy essentialai.example.toml to essentialai.toml and edit it.",
                path.display()
            );
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply ESSENTIALAI_PREDICT_URL, ESSENTIALAI_PREDICT_MODE and
    /// ESSENTIALAI_PORT using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ESSENTIALAI_PREDICT_URL") {
            self.predictor.endpoint = url;
        }
        if let Some(mode) = lookup("ESSENTIALAI_PREDICT_MODE") {
            self.predictor.mode = mode.parse()?;
        }
        if let Some(port) = lookup("ESSENTIALAI_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("ESSENTIALAI_PORT '{}' is not a valid port: {}", port, e))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.session.ttl_minutes == 0 {
            anyhow::bail!("session.ttl_minutes must be greater than zero");
        }
        if self.predictor.mode == PredictorMode::Remote {
            let parsed = url::Url::parse(&self.predictor.endpoint)
                .map_err(|e| anyhow::anyhow!("predictor.endpoint '{}' is not a URL: {}", self.predictor.endpoint, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("predictor.endpoint must use http or https, got '{}'", parsed.scheme());
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
