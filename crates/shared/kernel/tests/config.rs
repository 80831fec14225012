use dtc_domain::config::ClientConfig;
use dtc_kernel::config::load_config;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_layered_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        r#"
[chain]
chain_id = "dtc-testnet-2"

[node]
rpc_url = "http://validator:26657"

[logging]
level = "debug"
"#,
    )?;

    let cfg: ClientConfig = load_config(Some(&path))?;
    assert_eq!(cfg.chain.chain_id, "dtc-testnet-2");
    // Untouched sections keep their defaults.
    assert_eq!(cfg.chain.address_prefix, "dtc");
    assert_eq!(cfg.node.rpc_url, "http://validator:26657");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.path.is_none());

    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let result: Result<ClientConfig, _> = load_config(Some("/nonexistent/client"));
    assert!(result.is_err());
}
