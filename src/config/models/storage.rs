//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite:` or `postgres://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Build a PostgreSQL configuration from discrete connection parameters
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, name: &str) -> Self {
        let credentials = if password.is_empty() {
            user.to_string()
        } else {
            format!("{}:{}", user, password)
        };

        Self {
            url: format!("postgres://{}@{}:{}/{}", credentials, host, port, name),
            ..Default::default()
        }
    }

    /// URL with the password masked, for logs and error messages
    pub fn redacted_url(&self) -> String {
        match url::Url::parse(&self.url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                let _ = parsed.set_password(Some("***"));
                parsed.to_string()
            }
            _ => self.url.clone(),
        }
    }
}
