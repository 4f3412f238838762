//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Request body cap when `MAX_BODY_BYTES` is unset (16 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Trained model bundle
    pub model_path: String,

    /// Environment (development, production)
    pub environment: String,

    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            model_path: risk_core::constants::get_model_path(),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Socket to bind; an unparseable host falls back to all interfaces
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.host.parse::<IpAddr>().unwrap_or_else(|_| {
            tracing::warn!("Invalid HOST {:?}, binding 0.0.0.0", self.host);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> Config {
        Config {
            host: host.to_string(),
            port: 5000,
            model_path: "model_data.json".to_string(),
            environment: "development".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    #[test]
    fn test_socket_addr() {
        assert_eq!(config("127.0.0.1").socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config("not-an-ip").socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_default_body_limit() {
        assert_eq!(config("0.0.0.0").max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_is_production() {
        assert!(!config("0.0.0.0").is_production());
    }
}
