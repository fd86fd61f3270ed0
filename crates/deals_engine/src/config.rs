use url::Url;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "DEALS_BACKEND_URL";

/// Backend used when [`BACKEND_URL_ENV`] is unset or blank (local development).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid backend url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url {0} must use http or https")]
    UnsupportedScheme(String),
}

/// Where the deals backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealsConfig {
    base_url: Url,
}

impl DealsConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.to_string()));
        }
        Ok(Self { base_url: parsed })
    }

    /// Reads [`BACKEND_URL_ENV`], falling back to [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(BACKEND_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
