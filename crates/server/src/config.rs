use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// On-disk config formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Port as written in the file; both `8000` and `"8000"` are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

/// Config file contents before defaults and validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    access_key: Option<String>,
    #[serde(default)]
    port: Option<PortValue>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    shows: Vec<String>,
}

/// Validated application config.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB v3 API key.
    pub api_key: String,
    /// Accepted for compatibility with existing config files; not used.
    pub access_key: Option<String>,
    pub host: String,
    pub port: u16,
    /// Optional TMDB `language` parameter, e.g. `en-US`.
    pub language: Option<String>,
    /// Show references: TMDB ids or IMDb `tt…` ids.
    pub shows: Vec<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, shows: Vec<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            language: None,
            shows,
        }
    }

    /// Load the config file at `path`, apply defaults and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        tracing::info!(
            "Loaded config from {} ({} shows)",
            path.display(),
            config.shows.len()
        );
        Ok(config)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let raw: RawConfig = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let port = match raw.port {
            None => DEFAULT_PORT,
            Some(PortValue::Number(port)) => port,
            Some(PortValue::Text(text)) if text.trim().is_empty() => DEFAULT_PORT,
            Some(PortValue::Text(text)) => text
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("port '{}' is not a number", text)))?,
        };

        let config = Self {
            api_key: raw.api_key.trim().to_string(),
            access_key: raw.access_key.filter(|key| !key.is_empty()),
            host: raw
                .host
                .filter(|host| !host.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            language: raw.language.filter(|lang| !lang.trim().is_empty()),
            shows: raw
                .shows
                .into_iter()
                .map(|show| show.trim().to_string())
                .filter(|show| !show.is_empty())
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField("api_key"));
        }
        if self.shows.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one show must be specified".to_string(),
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("bad listen address {}:{}", self.host, self.port)))
    }
}
