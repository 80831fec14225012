use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base File**: loads settings from a file (e.g. `client.toml`). When no
///    path is provided it defaults to `"client"` in the working directory.
/// 2. **Environment Overrides**: overlays values from variables prefixed with
///    `DTC__`. Nested keys use double underscores (`DTC__NODE__RPC_URL` maps
///    to `node.rpc_url`).
///
/// # Errors
/// Fails when the file is missing, the environment variables are malformed,
/// or the content does not match `T`.
///
/// # Example
/// ```rust,ignore
/// use dtc_kernel::config::load_config;
/// use dtc_domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("client"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("DTC").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
