//! Command line entry point for the terminal Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use life_term::{
    config::{CliOverrides, Settings},
    game_of_life::Rule,
    run_simulation, CancellationToken,
};
use log::debug;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life_term")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation until interrupted (the default)
    Run(RunArgs),

    /// Write a configuration file with the default settings
    InitConfig {
        /// Where to write the file (.yaml, .yml or .json)
        #[arg(short, long, default_value = "life.yaml")]
        path: PathBuf,

        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the initial random grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Delay between frames in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Probability that a cell starts alive
    #[arg(long)]
    density: Option<f64>,

    /// Birth/survival rule such as B3/S23
    #[arg(short, long)]
    rule: Option<Rule>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_command(args),
        Commands::InitConfig { path, force } => init_config_command(path, force),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn load_settings(args: &RunArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    let cli_overrides = CliOverrides {
        seed: args.seed,
        max_generations: args.generations,
        density: args.density,
        rule: args.rule.clone(),
        frame_delay_ms: args.delay_ms,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(args: RunArgs) -> Result<()> {
    let settings = load_settings(&args)?;
    debug!("Settings: {:?}", settings);

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Failed to install Ctrl-C handler")?;

    let summary = run_simulation(&settings, &cancel).context("Simulation failed")?;

    println!("{}", status(Status::Info, &summary.to_string()));
    Ok(())
}

fn init_config_command(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        let message = format!(
            "Skipped: {} (already exists, use --force to overwrite)",
            path.display()
        );
        println!("{}", status(Status::Warning, &message));
        return Ok(());
    }

    Settings::default()
        .to_file(&path)
        .context("Failed to create default configuration")?;
    let message = format!("Created: {}", path.display());
    println!("{}", status(Status::Success, &message));

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Warning,
    Info,
}

/// Color a status line with ANSI codes unless `NO_COLOR` is set or the terminal is dumb
fn status(kind: Status, text: &str) -> String {
    let plain = std::env::var_os("NO_COLOR").is_some()
        || std::env::var("TERM").is_ok_and(|term| term == "dumb");
    if plain {
        return text.to_string();
    }

    let code = match kind {
        Status::Success => 32,
        Status::Warning => 33,
        Status::Info => 34,
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let args = [
            "life_term", "run", "--seed", "42", "--generations", "5", "--rule", "B36/S23",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.generations, Some(5));
                assert_eq!(args.rule.map(|r| r.to_string()).as_deref(), Some("B36/S23"));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_run() {
        let cli = Cli::try_parse_from(["life_term"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_rejects_bad_rule() {
        assert!(Cli::try_parse_from(["life_term", "run", "--rule", "B9"]).is_err());
    }

    #[test]
    fn test_cli_has_no_edge_option() {
        let result = Cli::try_parse_from(["life_term", "run", "--boundary", "wrap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_keeps_text() {
        for kind in [Status::Success, Status::Warning, Status::Info] {
            assert!(status(kind, "done").contains("done"));
        }
    }

    #[test]
    fn test_load_settings_with_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("life.yaml");
        let mut file_settings = Settings::default();
        file_settings.simulation.seed = Some(1);
        file_settings.display.frame_delay_ms = 250;
        file_settings.to_file(&path).unwrap();

        let args = RunArgs {
            config: Some(path),
            seed: Some(2),
            ..RunArgs::default()
        };
        let settings = load_settings(&args).unwrap();
        assert_eq!(settings.simulation.seed, Some(2));
        assert_eq!(settings.display.frame_delay_ms, 250);
    }

    #[test]
    fn test_load_settings_rejects_bad_density() {
        let args = RunArgs {
            density: Some(-0.1),
            ..RunArgs::default()
        };
        assert!(load_settings(&args).is_err());
    }

    #[test]
    fn test_init_config_command() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/life.yaml");

        init_config_command(path.clone(), false).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), Settings::default());

        std::fs::write(&path, "display:\n  margin: 4\n").unwrap();
        init_config_command(path.clone(), false).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap().display.margin, 4);

        init_config_command(path.clone(), true).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap().display.margin, 2);
    }
}
