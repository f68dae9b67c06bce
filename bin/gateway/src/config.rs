use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level gateway configuration.
///
/// Every field has a default matching the docker-compose deployment (RPC node
/// under the `smart-contract` hostname, artifacts in `/shared`), so the
/// gateway runs without a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint url
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Directory the deployment step writes contract artifacts into
    #[serde(default = "default_shared_path")]
    pub shared_path: PathBuf,

    /// Address the HTTP server listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Port for the Prometheus exporter; disabled when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_rpc_url() -> String {
    "http://smart-contract:8545".to_string()
}

fn default_shared_path() -> PathBuf {
    PathBuf::from("/shared")
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            shared_path: default_shared_path(),
            listen_addr: default_listen_addr(),
            metrics_port: None,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.rpc_url, "http://smart-contract:8545");
        assert_eq!(config.shared_path, PathBuf::from("/shared"));
        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert!(config.metrics_port.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            rpc_url = "http://localhost:8545"
            shared_path = "./deployed"
            listen_addr = "127.0.0.1:8080"
            metrics_port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.shared_path, PathBuf::from("./deployed"));
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.metrics_port, Some(9000));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "rpc_url = \"http://node:8545\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.rpc_url, "http://node:8545");

        assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
    }
}
