use anyhow::Context;
use clap::{Parser, Subcommand};
use dtc_client::domain::ModuleSet;
use dtc_client::domain::config::ClientConfig;
use dtc_client::kernel::codec::RawMsg;
use dtc_client::kernel::config::load_config;
use dtc_logger::{LevelFilter, Logger};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dtc", version, about = "Inspect the DTC client message registry")]
struct Cli {
    /// Path to a config file without extension, e.g. `config/client`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print registered type URLs in registration order.
    List {
        /// Restrict the listing to a single module.
        #[arg(long)]
        module: Option<String>,
    },
    /// Show which module registered a type URL.
    Resolve { type_url: String },
    /// Check an encoded envelope file against the registry.
    Verify {
        /// JSON file with `type_url` and hex-encoded `value` fields.
        file: PathBuf,
    },
}

#[derive(Deserialize)]
struct EnvelopeFile {
    type_url: String,
    value: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ClientConfig = match &cli.config {
        Some(path) => load_config(Some(path)).context("Critical: Configuration is malformed")?,
        None => ClientConfig::default(),
    };

    let level = cfg.logging.level.parse().unwrap_or(LevelFilter::INFO);
    let _log = match cfg.logging.path.clone() {
        Some(path) => Logger::builder()
            .name(env!("CARGO_PKG_NAME"))
            .console(false)
            .level(level)
            .path(path)
            .init()?,
        None => Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?,
    };

    tracing::debug!(chain_id = %cfg.chain.chain_id, rpc_url = %cfg.node.rpc_url, "client configuration loaded");

    match cli.command {
        Command::List { module } => {
            let selection = match module.as_deref() {
                Some(name) => {
                    anyhow::ensure!(dtc_client::is_known_module(name), "unknown module `{name}`");
                    ModuleSet::from(name)
                }
                None => ModuleSet::ALL,
            };
            let registry = dtc_client::registry_with(selection)?;
            for url in registry.iter() {
                println!("{url}");
            }
        }
        Command::Resolve { type_url } => {
            let registry = dtc_client::registry()?;
            match registry.module_of(&type_url) {
                Some(module) => println!("{type_url} -> {module}"),
                None => anyhow::bail!("`{type_url}` is not registered"),
            }
        }
        Command::Verify { file } => {
            let registry = dtc_client::registry()?;
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let envelope: EnvelopeFile =
                serde_json::from_str(&text).context("malformed envelope file")?;
            let value = hex::decode(&envelope.value).context("envelope value is not valid hex")?;
            let len = value.len();
            registry.verify(&RawMsg { type_url: envelope.type_url.clone(), value })?;
            println!("{} verified ({len} bytes)", envelope.type_url);
        }
    }

    Ok(())
}
