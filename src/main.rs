use clap::Parser;
use tracing::debug;

use matchsight::adapter::inbound::cli::command::Cli;
use matchsight::adapter::inbound::cli::{self, diagnostic};
use matchsight::error::{ConfigError, Error};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::configure(&cli);
    debug!(command = ?cli.command, "matchsight starting");

    if let Err(error) = cli::run(&cli).await {
        let src = match &error {
            Error::Config(ConfigError::Parse(_)) => cli
                .config_path()
                .and_then(|path| std::fs::read_to_string(path).ok()),
            _ => None,
        };
        eprintln!("{:?}", diagnostic::report(error, src.as_deref()));
        std::process::exit(1);
    }
}
