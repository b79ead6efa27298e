//! Immutable process configuration, built once at startup and passed into
//! components at construction time. Environment variables override an
//! optional TOML overlay (`CONFIG_PATH`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub host: String,
    pub port: u16,
    pub deprecate_rest: bool,
    pub llm: LlmConfig,
}

/// Settings for the chat-completions summarization backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Generation-stage timeout. Unset means the backend call carries no
    /// explicit bound beyond the client defaults; configured here rather
    /// than hardcoded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    "gpt-4o".into()
}

fn default_base_url() -> String {
    "https://api.openai.com".into()
}

/// Shape of the optional TOML overlay file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    mode: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    deprecate_rest: Option<bool>,
    #[serde(default)]
    llm: Option<LlmConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_file_and_env(FileConfig::default())
    }

    /// Load `CONFIG_PATH` (if set and readable) and apply env overrides.
    pub fn from_env_and_toml() -> Self {
        let file = std::env::var("CONFIG_PATH")
            .ok()
            .and_then(|path| match std::fs::read_to_string(&path) {
                Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                    Ok(fc) => Some(fc),
                    Err(e) => {
                        tracing::warn!(path, error = %e, "ignoring unparseable config file");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(path, error = %e, "ignoring unreadable config file");
                    None
                }
            })
            .unwrap_or_default();
        Self::from_file_and_env(file)
    }

    fn from_file_and_env(file: FileConfig) -> Self {
        let mode = std::env::var("MODE")
            .ok()
            .or(file.mode)
            .unwrap_or_else(|| "server".into());
        let host = std::env::var("HOST")
            .ok()
            .or(file.host)
            .unwrap_or_else(|| "127.0.0.1".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .or(file.port)
            .unwrap_or(8000);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .ok()
            .or(file.deprecate_rest)
            .unwrap_or(false);

        let mut llm = file.llm.unwrap_or_default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                llm.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            if !model.trim().is_empty() {
                llm.model = model;
            }
        }
        if let Ok(base) = std::env::var("OPENAI_BASE_URL") {
            if !base.trim().is_empty() {
                llm.base_url = base;
            }
        }
        if let Some(secs) = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            llm.timeout_secs = Some(secs);
        }

        Self {
            mode,
            host,
            port,
            deprecate_rest,
            llm,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        let ip: IpAddr = self
            .host
            .parse()
            .unwrap_or_else(|_| IpAddr::V4(Ipv4Addr::LOCALHOST));
        SocketAddr::new(ip, self.port)
    }
}
