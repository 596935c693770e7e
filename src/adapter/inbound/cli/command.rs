//! Command-line interface definitions.
//!
//! Defines the CLI structure for matchsight using `clap`: one-shot
//! analysis, the interactive form, credential connection and the usual
//! configuration and diagnostic helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::paths;
use crate::domain::Sport;

/// Search-grounded match predictions in the terminal
#[derive(Parser, Debug)]
#[command(name = "matchsight")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one match and print the prediction dashboard
    Analyze(AnalyzeArgs),

    /// Fill in matches through an interactive form
    Interactive(ConfigPathArg),

    /// List supported sports and their market categories
    Sports,

    /// Select an API key and store it for later runs
    Connect(ConfigPathArg),

    /// Remove the stored API key
    Disconnect(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `matchsight config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `matchsight check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
    /// Report whether an API key is available.
    Credential(ConfigPathArg),
}

/// Shared `--config` argument.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `matchsight analyze`.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Home team name
    #[arg(long)]
    pub home: String,

    /// Away team name
    #[arg(long)]
    pub away: String,

    /// League or tournament, used as search context
    #[arg(long)]
    pub league: Option<String>,

    /// Sport (defaults to `analysis.default_sport`)
    #[arg(long)]
    pub sport: Option<Sport>,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `matchsight config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "matchsight");
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "matchsight",
            "analyze",
            "--home",
            "Arsenal",
            "--away",
            "Chelsea",
            "--league",
            "Premier League",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.home, "Arsenal");
                assert_eq!(args.away, "Chelsea");
                assert_eq!(args.league.as_deref(), Some("Premier League"));
                assert!(args.sport.is_none());
                assert_eq!(args.config, paths::default_config());
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyze_sport() {
        let cli = Cli::try_parse_from([
            "matchsight",
            "analyze",
            "--home",
            "India",
            "--away",
            "Australia",
            "--sport",
            "Cricket",
        ])
        .unwrap();

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.sport, Some(Sport::Cricket));
    }

    #[test]
    fn test_parse_analyze_table_tennis_alias() {
        let cli = Cli::try_parse_from([
            "matchsight",
            "analyze",
            "--home",
            "A",
            "--away",
            "B",
            "--sport",
            "table-tennis",
        ])
        .unwrap();

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.sport, Some(Sport::TableTennis));
    }

    #[test]
    fn test_unknown_sport_rejected() {
        let result = Cli::try_parse_from([
            "matchsight",
            "analyze",
            "--home",
            "A",
            "--away",
            "B",
            "--sport",
            "curling",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_requires_teams() {
        assert!(Cli::try_parse_from(["matchsight", "analyze", "--home", "A"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["matchsight", "--json", "-vv", "sports"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Sports));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["matchsight", "sports", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["matchsight", "--color", "never", "sports"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_parse_check_credential() {
        let cli =
            Cli::try_parse_from(["matchsight", "check", "credential", "-c", "/tmp/c.toml"]).unwrap();
        match cli.command {
            Commands::Check(CheckCommand::Credential(arg)) => {
                assert_eq!(arg.config, PathBuf::from("/tmp/c.toml"));
            }
            other => panic!("expected check credential, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli =
            Cli::try_parse_from(["matchsight", "config", "init", "/tmp/x.toml", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommand::Init(args)) => {
                assert_eq!(args.path, PathBuf::from("/tmp/x.toml"));
                assert!(args.force);
            }
            other => panic!("expected config init, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_connect_and_interactive() {
        assert!(matches!(
            Cli::try_parse_from(["matchsight", "connect"]).unwrap().command,
            Commands::Connect(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["matchsight", "interactive"]).unwrap().command,
            Commands::Interactive(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["matchsight", "disconnect"]).unwrap().command,
            Commands::Disconnect(_)
        ));
    }
}
