//! CLI module graph and command dispatch.

pub mod analyze;
pub mod check;
pub mod command;
pub mod config;
pub mod connect;
pub mod diagnostic;
pub mod interactive;
pub mod output;
pub mod paths;
pub mod render;
pub mod sports;

use std::path::Path;

use command::{CheckCommand, Cli, ColorChoice, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

impl Cli {
    /// Config file the selected command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match &self.command {
            Commands::Analyze(args) => Some(&args.config),
            Commands::Interactive(arg) | Commands::Connect(arg) | Commands::Disconnect(arg) => {
                Some(&arg.config)
            }
            Commands::Check(CheckCommand::Config(arg) | CheckCommand::Credential(arg)) => {
                Some(&arg.config)
            }
            Commands::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
                Some(&arg.config)
            }
            Commands::Config(ConfigCommand::Init(_)) | Commands::Sports => None,
        }
    }

    /// Log level implied by `--quiet`/`--verbose`, if either was given.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Apply global flags: color mode, output mode and logging.
///
/// Logging settings come from the config file when it parses; a broken file
/// is reported later by the command itself.
pub fn configure(cli: &Cli) {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let logging = cli
        .config_path()
        .and_then(|path| Config::load_or_default(path).ok())
        .map(|config| config.logging)
        .unwrap_or_else(LoggingConfig::default);
    match cli.log_level() {
        Some(level) => logging.init_with_level(level),
        None => logging.init(),
    }
}

/// Run the selected command.
pub async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Analyze(args) => analyze::execute(args).await,
        Commands::Interactive(arg) => interactive::execute(arg).await,
        Commands::Sports => sports::list(),
        Commands::Connect(arg) => connect::execute(arg),
        Commands::Disconnect(arg) => connect::execute_disconnect(arg),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
        Commands::Check(CheckCommand::Credential(arg)) => check::execute_credential(&arg.config),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}
