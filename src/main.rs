//! mood-quotes: pick a mood, get a quote.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use mood_quotes::{
    AppConfig, CliOverrides, Mood, ShowConfig, Validatable, cli,
    config::{CONFIG_FILE_NAMES, OutputConfig},
    output::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mood-quotes")]
#[command(version)]
#[command(about = "Pick a mood, get a quote", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred

EXAMPLES:
    # Open the interactive widget
    mood-quotes

    # Second quote for a tired day
    mood-quotes show --mood tired --advance 1

    # Whole catalog as JSON
    mood-quotes catalog -o json > quotes.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress status messages on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "MOOD_QUOTES_CONFIG")]
    config: Option<PathBuf>,

    /// Defaults to `tui`
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `show` subcommand
#[derive(Parser)]
struct ShowArgs {
    /// Mood to select (happy, sad, stressed, tired, motivated)
    #[arg(short, long, value_enum)]
    mood: Option<Mood>,

    /// Number of times to press "next quote"
    #[arg(short, long, default_value_t = 0)]
    advance: usize,

    /// Output format (defaults to the config file's, then auto)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Output arguments shared by the listing subcommands
#[derive(Parser)]
struct ListArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive quote widget
    Tui {
        /// Theme (dark, light, high-contrast)
        #[arg(long)]
        theme: Option<String>,

        /// Disable mouse support
        #[arg(long)]
        no_mouse: bool,
    },

    /// Print the quote for a mood without the interactive UI
    Show(ShowArgs),

    /// List moods with their labels and quote counts
    Moods(ListArgs),

    /// Print every quote, grouped by mood
    Catalog(ListArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .mood-quotes.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let code = cli::exit_code(run(Cli::parse()));
    if code != cli::exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Commands::Tui {
        theme: None,
        no_mouse: false,
    });

    // Initialize logging. The TUI owns the screen, so only warnings get through by default.
    let log_level = match (&command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Tui { .. }, false) => "warn",
        _ if cli.quiet => "warn",
        _ => "info",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mut overrides = CliOverrides {
        no_color: cli.no_color,
        ..CliOverrides::default()
    };
    if let Commands::Tui { theme, no_mouse } = &command {
        overrides.theme.clone_from(theme);
        if *no_mouse {
            overrides.mouse_enabled = Some(false);
        }
    }

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    for error in config.validate() {
        tracing::warn!("Invalid configuration: {error}");
    }

    let code = match command {
        Commands::Tui { .. } => cli::run_interactive(&config)?,

        Commands::Show(args) => cli::run_show(ShowConfig {
            mood: args.mood,
            advance: args.advance,
            output: output_config(&config, args.output),
            output_file: args.output_file,
            quiet: cli.quiet,
        })?,

        Commands::Moods(args) => cli::run_moods(
            args.output.unwrap_or(config.output.format),
            args.output_file,
            cli.quiet,
        )?,

        Commands::Catalog(args) => cli::run_catalog(
            args.output.unwrap_or(config.output.format),
            args.output_file,
            cli.quiet,
        )?,

        Commands::Config { action } => {
            run_config_action(action, &config, loaded_from, cli.quiet)?;
            cli::exit_codes::SUCCESS
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "mood-quotes", &mut io::stdout());
            cli::exit_codes::SUCCESS
        }
    };

    Ok(code)
}

fn output_config(config: &AppConfig, format: Option<OutputFormat>) -> OutputConfig {
    OutputConfig {
        format: format.unwrap_or(config.output.format),
        no_color: config.output.no_color,
    }
}

fn run_config_action(
    action: ConfigAction,
    config: &AppConfig,
    loaded_from: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            if !quiet {
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
            }
            let yaml = serde_yaml_ng::to_string(config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                ::dirs::config_dir().map(|p| p.join("mood-quotes").display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match loaded_from {
                Some(path) => println!("{}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".mood-quotes.yaml");
            mood_quotes::config::write_example_config(&target)?;
            if !quiet {
                eprintln!("Created {}", target.display());
            }
        }
        ConfigAction::Schema { output } => {
            let schema = mood_quotes::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    if !quiet {
                        eprintln!("Schema written to {}", path.display());
                    }
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(())
}
