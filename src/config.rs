use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads HOST, PORT and STATIC_DIR. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unparsable PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Self {
            host,
            port,
            static_dir,
        }
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    // Used when the primary port is already taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("no fallback port after {}", self.port))?;
        Ok(format!("{}:{}", self.host, port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("STATIC_DIR", "/srv/site"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.fallback_addr().unwrap().to_string(), "0.0.0.0:9101");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn last_port_has_no_fallback() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "65535")]));
        assert!(config.fallback_addr().is_err());
    }
}
