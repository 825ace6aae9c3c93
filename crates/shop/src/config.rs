//! Runtime configuration, read from the environment (and `.env` if present).
//!
//! | Variable            | Default                 |
//! |---------------------|-------------------------|
//! | `API_URL`           | `http://localhost:3000` |
//! | `ACTOR_BUFFER_SIZE` | `32`                    |
//! | `MAIL_SENDER`       | `noreply@example.com`   |

use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// Public base URL; activation links and redirects are built on it.
    pub api_url: String,
    /// Request queue length of every resource actor.
    pub actor_buffer_size: usize,
    /// From address on activation mail.
    pub mail_sender: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            actor_buffer_size: 32,
            mail_sender: "noreply@example.com".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!(api_url = %config.api_url, "Configuration loaded");
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = lookup("API_URL").unwrap_or(defaults.api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "API_URL",
                value: api_url,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let actor_buffer_size = match lookup("ACTOR_BUFFER_SIZE") {
            None => defaults.actor_buffer_size,
            Some(raw) => match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "ACTOR_BUFFER_SIZE",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "ACTOR_BUFFER_SIZE",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        let mail_sender = lookup("MAIL_SENDER").unwrap_or(defaults.mail_sender);

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            actor_buffer_size,
            mail_sender,
        })
    }
}
