// story-validator
// Queries a node's JSON-RPC endpoint and prints its status

use clap::Parser;
use env_logger::Env;
use std::io;
use std::process::ExitCode;
use story_validator_cli::cli::{run, Cli, Settings};
use story_validator_cli::commands::{init_color, report_error};
use story_validator_cli::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout();

    // The flag alone decides color until the config file is known
    init_color(cli.color.unwrap_or_default());

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let _ = report_error(&mut stdout, &*e);
            return ExitCode::FAILURE;
        }
    };
    let settings = Settings::resolve(cli, config);

    let env = if settings.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("info")
    };
    env_logger::init_from_env(env);

    init_color(settings.color);

    match run(&settings, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
