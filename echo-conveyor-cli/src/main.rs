//! Standalone driver for the Echo Conveyor relay.
//!
//! Sends one payload through the same resolve → dispatch path a host would
//! use. With no arguments it publishes `beep-boop` to channel `junk` at
//! `http://127.0.0.1:8080/put`.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use echo_conveyor_core::{ClientSettings, EchoConveyor, Plugin, PLUGIN_INFO};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_URL: &str = "http://127.0.0.1:8080/";
const DEFAULT_CHANNEL: &str = "junk";
const DEFAULT_PAYLOAD: &str = "beep-boop";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payload to relay
    #[arg(default_value = DEFAULT_PAYLOAD)]
    payload: String,

    /// Upstream receiver base URL (`put` is appended)
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Destination channel
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    channel: String,

    /// JSON file holding the raw configuration map; overrides --url and --channel
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = ClientSettings::default().timeout_secs)]
    timeout_secs: u64,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// The untyped map handed to the plugin, exactly as a host would pass it.
    fn raw_config(&self) -> Result<Value> {
        match &self.config {
            Some(path) => load_config_file(path),
            None => {
                let mut map = Map::new();
                map.insert("publisher_url".to_string(), Value::String(self.url.clone()));
                map.insert("publisher_channel".to_string(), Value::String(self.channel.clone()));
                Ok(Value::Object(map))
            }
        }
    }
}

fn load_config_file(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    info!("{} v{} starting", PLUGIN_INFO.name, PLUGIN_INFO.version);

    let config = cli.raw_config()?;
    let settings =
        ClientSettings { timeout_secs: cli.timeout_secs, ..ClientSettings::default() };
    let plugin = EchoConveyor::new(settings).context("building relay")?;

    let echoed = plugin
        .execute(Bytes::from(cli.payload.into_bytes()), &config)
        .await
        .context("relay failed")?;

    println!("{}", String::from_utf8_lossy(&echoed));
    Ok(())
}
