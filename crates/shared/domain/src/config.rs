use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level client configuration shared across tools.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub chain: ChainConfig,
    pub node: NodeConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Chain identity the client encodes messages for.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_id: String,
    pub address_prefix: String,
}

/// Node endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub rpc_url: String,
}

/// Logging defaults used by the CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: "dtc-1".to_owned(),
            address_prefix: crate::constants::ADDRESS_PREFIX.to_owned(),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self { rpc_url: "http://localhost:26657".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None }
    }
}
