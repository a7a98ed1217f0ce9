use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LOG_FILE: &str = "app.log";
const DEFAULT_PG_PORT: u16 = 5432;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Connection URL with the password masked, for log lines.
    pub fn redacted_url(&self) -> String {
        format!("postgres://{}:***@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatabaseConfig({})", self.redacted_url())
    }
}

#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Everything the process reads from its environment, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub log_file: String,
    pub database: DatabaseConfig,
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PG_PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PG_PORT",
                value: raw,
            })?,
            None => DEFAULT_PG_PORT,
        };

        let database = DatabaseConfig {
            host: required("PG_HOST")?,
            port,
            name: required("PG_DATABASE")?,
            user: required("PG_USER")?,
            password: required("PG_PASSWORD")?,
        };

        let completion = CompletionConfig {
            api_key: required("API_KEY")?,
            model: optional("OPENAI_MODEL", DEFAULT_MODEL),
            base_url: optional("OPENAI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        };

        Ok(Self {
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            log_file: optional("LOG_FILE", DEFAULT_LOG_FILE),
            database,
            completion,
        })
    }
}
