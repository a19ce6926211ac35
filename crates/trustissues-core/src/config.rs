use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::intercept::DEFAULT_KEYWORDS;

/// Endpoint used to register a domain the service has not seen yet.
/// Both paths accept the same `{"website": domain}` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationEndpoint {
    #[default]
    AddWebsite,
    Websites,
}

impl CreationEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            CreationEndpoint::AddWebsite => "add_website",
            CreationEndpoint::Websites => "websites",
        }
    }
}

/// Global configuration loaded from `~/.config/trustissues/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Base URL of the warning service.
    pub base_url: String,
    /// Connect timeout for each HTTP call, in seconds.
    pub connect_timeout_secs: u64,
    /// Upper bound on each remote call, in seconds. Elapsed calls resolve to a timeout failure.
    pub request_timeout_secs: u64,
    /// POST domains the service reports as unknown so they get analysed.
    #[serde(default = "default_register_unknown")]
    pub register_unknown: bool,
    /// Which creation endpoint to use: "add_website" (default) or "websites".
    #[serde(default)]
    pub creation_endpoint: CreationEndpoint,
    /// Button labels that trigger the interstitial (case-insensitive substring match).
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_register_unknown() -> bool {
    true
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            register_unknown: default_register_unknown(),
            creation_endpoint: CreationEndpoint::default(),
            keywords: default_keywords(),
        }
    }
}

impl TrustConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Check that `base_url` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url in config: {}", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("base_url must be http or https: {}", self.base_url);
        }
        if parsed.cannot_be_a_base() {
            anyhow::bail!("base_url cannot be used as a base: {}", self.base_url);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("trustissues")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TrustConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &std::path::Path) -> Result<TrustConfig> {
    if !path.exists() {
        let default_cfg = TrustConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: TrustConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
