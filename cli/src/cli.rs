use crate::actions::{Action, ActionTable};
use crate::commands::report_error;
use crate::config::{ColorMode, Config, OutputFormat};
use crate::error::Result;
use crate::rpc::RpcClient;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "http://localhost:26657";

#[derive(Debug, Parser)]
#[command(name = "story-validator")]
#[command(about = "Story blockchain validator utility", long_about = None)]
pub struct Cli {
    /// RPC endpoint URL
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    pub rpc: String,

    /// Action to perform
    #[arg(long, value_enum, default_value_t = Action::Health)]
    pub action: Action,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// When to colorize output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Read settings from this file instead of ~/.story-validator/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Flags layered over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rpc_url: String,
    pub action: Action,
    pub format: OutputFormat,
    pub timeout: Option<Duration>,
    pub color: ColorMode,
    pub debug: bool,
}

impl Settings {
    pub fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            timeout: cli.timeout.map(Duration::from_secs).or_else(|| config.timeout()),
            format: cli.format.unwrap_or(config.output_format),
            color: cli.color.unwrap_or(config.color),
            debug: cli.debug || config.debug,
            rpc_url: cli.rpc,
            action: cli.action,
        }
    }
}

/// Run the selected action once, writing its output to `out`.
pub async fn execute(settings: &Settings, out: &mut (dyn Write + Send)) -> Result<()> {
    let client = RpcClient::new(settings.rpc_url.clone(), settings.timeout)?;
    ActionTable::new()
        .dispatch(settings.action, &client, settings.format, out)
        .await
}

/// Like [`execute`], but a failure is also reported as one error line on
/// `out`, the same stream that carries the status output.
pub async fn run(settings: &Settings, out: &mut (dyn Write + Send)) -> Result<()> {
    match execute(settings, out).await {
        Ok(()) => Ok(()),
        Err(e) => {
            report_error(out, &e)?;
            Err(e)
        }
    }
}
