use std::net::SocketAddr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-thinking-exp-01-21";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TTS_HOST_TEMPLATE: &str = "https://translate.google.{tld}";
pub const DEFAULT_TTS_LANGUAGE: &str = "hi";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub tts_host_template: String,
    pub tts_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let port_raw = get("PORT", "5000");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port,
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            tts_host_template: get("TTS_HOST_TEMPLATE", DEFAULT_TTS_HOST_TEMPLATE),
            tts_language: get("TTS_LANGUAGE", DEFAULT_TTS_LANGUAGE),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: self.host.clone(),
            })
    }
}
