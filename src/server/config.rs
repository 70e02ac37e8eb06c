use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub admin_token: String,

    /// Socket address the HTTP server binds to.
    pub server_addr: String,
    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,
    /// Client addresses allowed to call admin endpoints; every address is allowed when empty.
    pub admin_allowed_ips: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_token = std::env::var("ADMIN_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("ADMIN_TOKEN".to_string()))?;
        if admin_token.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "ADMIN_TOKEN".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_token,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
            admin_allowed_ips: std::env::var("ADMIN_ALLOWED_IPS")
                .map(|ips| parse_ip_list(&ips))
                .unwrap_or_default(),
        })
    }
}

/// Splits a comma-separated address list, dropping blank entries.
fn parse_ip_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .collect()
}
