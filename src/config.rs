use crate::errors::ConfigError;
use std::env;

pub const DEFAULT_API_URL: &str = "https://b2dc1005b2cbd4cb2a5defb7547b4b9b.serveo.net/api";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_START_SECTION: &str = "home";

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub port: u16,
    pub api_base_url: String,
    pub start_section: String,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = lookup("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        match reqwest::Url::parse(&api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidApiUrl(api_base_url)),
        }

        let start_section = lookup("CATALOG_START_SECTION")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_START_SECTION.to_string());

        Ok(Self {
            port,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            start_section,
        })
    }
}
