use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Presence of this section selects the TLS transport.
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    /// PEM certificate chain file.
    pub certificate: PathBuf,
    /// PEM private key file.
    pub private_key: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `BEACON_CONFIG`
    /// (default `beacon.yml`). A missing file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("BEACON_CONFIG").unwrap_or_else(|_| "beacon.yml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_yaml::from_str(&contents).with_context(|| format!("invalid config: {path}"))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("failed to read config: {path}")),
        }
    }
}
