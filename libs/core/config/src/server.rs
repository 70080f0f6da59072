use crate::{env_parse_or, ConfigError, FromEnv};
use std::net::Ipv4Addr;

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Listen address for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, as handed to the TCP listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` falls back to all interfaces when unset or empty; `PORT` must fit a u16.
    fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var(HOST_VAR)
            .ok()
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| Ipv4Addr::UNSPECIFIED.to_string());

        Ok(Self {
            host,
            port: env_parse_or(PORT_VAR, DEFAULT_PORT)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars([(HOST_VAR, None::<&str>), (PORT_VAR, None)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8000");
        });
    }

    #[test]
    fn test_empty_host_falls_back_to_all_interfaces() {
        temp_env::with_vars([(HOST_VAR, Some("")), (PORT_VAR, Some("9000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:9000");
        });
    }

    #[test]
    fn test_custom_host_and_port() {
        temp_env::with_vars(
            [(HOST_VAR, Some("127.0.0.1")), (PORT_VAR, Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
            },
        );
    }

    #[test]
    fn test_invalid_or_out_of_range_port_names_the_variable() {
        for raw in ["not_a_number", "99999", ""] {
            temp_env::with_var(PORT_VAR, Some(raw), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == PORT_VAR));
            });
        }
    }
}
