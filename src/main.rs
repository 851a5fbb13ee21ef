//! esg-explorer: terminal explorer for ESG rating tables.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use esg_explorer::{
    api::{EsgClient, EsgClientConfig},
    config::{self, file::CONFIG_FILE_NAMES, CliOverrides, Validatable},
    query::StalePolicy,
    tui::{self, App, Theme, ViewTab},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "esg-explorer")]
#[command(version)]
#[command(about = "Browse ESG ratings served by the ESG API", long_about = None)]
#[command(after_help = "VIEWS:
    /                All ESG scores for one company, grouped by source
    /table-fetcher   Every row of one rating table
    /company-table   One company's rows in one rating table

EXAMPLES:
    # Explore a local API server
    esg-explorer --api-url http://localhost:5000

    # Open straight into the table view with the light theme
    esg-explorer --view table --theme light

    # Keep a debug log while the TUI runs
    esg-explorer -v --log-file esg.log")]
struct Cli {
    /// Base URL of the ESG API
    #[arg(long, global = true, env = "ESG_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// View to open: a route or one of scores, table, company-table
    #[arg(long, global = true)]
    view: Option<String>,

    /// Color theme: dark, light, or high-contrast
    #[arg(long, global = true)]
    theme: Option<String>,

    /// When fetches overlap, show only the response to the latest one
    #[arg(long, global = true)]
    discard_stale: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file + flags)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .esg-explorer.yaml in the current directory
    Init,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout,
            theme: self.theme.clone(),
            start_view: self.view.clone(),
            discard_stale_responses: self.discard_stale,
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>, owns_terminal: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "info" };
    let registry = tracing_subscriber::registry().with(EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    ));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if owns_terminal {
        // Anything written to the terminal would corrupt the TUI
        registry.init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref(), cli.command.is_none())?;

    match cli.command {
        None => run_explorer(&cli),

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "esg-explorer", &mut io::stdout());
            Ok(())
        }

        Some(Commands::ConfigSchema { ref output }) => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Some(Commands::Config { ref action }) => match action {
            ConfigAction::Show => {
                let (mut config, loaded_from) = config::load_config(cli.config.as_deref())
                    .context("failed to load configuration")?;
                config.merge_cli(&cli.overrides());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::file::search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".esg-explorer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Load configuration, then hand the terminal to the TUI.
fn run_explorer(cli: &Cli) -> Result<()> {
    let (mut config, _) =
        config::load_config(cli.config.as_deref()).context("failed to load configuration")?;
    config.merge_cli(&cli.overrides());

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }

    tui::set_theme(Theme::from_name(&config.tui.theme));

    let client = EsgClient::new(EsgClientConfig {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(config.api.timeout_secs),
    })
    .context("failed to create ESG API client")?;

    let start = ViewTab::from_route(&config.tui.start_view).unwrap_or_default();
    let policy = StalePolicy::from_discard_flag(config.behavior.discard_stale_responses);
    let mut app = App::new(start, policy, config.api.base_url.clone());

    tracing::info!(
        "starting at {} against {}",
        start.route(),
        config.api.base_url
    );
    tui::run_tui(
        &mut app,
        Arc::new(client),
        Duration::from_millis(config.tui.tick_rate_ms),
    )
    .context("terminal UI failed")?;
    Ok(())
}
