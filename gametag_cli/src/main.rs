use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use is_terminal::IsTerminal;
use std::path::PathBuf;

use gametag_cli::config::{ConfigManager, get_config};
use gametag_cli::error::{CliError, CliResult};
use gametag_cli::orchestrators::{EnrichCommandOrchestrator, EnrichOptions};
use gametag_cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gametag")]
#[command(author, version, about = "Enrich game catalogs with store genre tags", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add tags to the highest-playtime entries of catalog file(s)
    Enrich {
        /// Catalog files (JSON arrays of entries), processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of entries to enrich per file
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Maximum number of lookups in flight
        #[arg(long = "max-concurrent")]
        max_concurrent: Option<usize>,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Do not reuse tags between files
        #[arg(long)]
        no_cache: bool,

        /// Print per-file statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., enrichment.top_k)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., enrichment.top_k)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Print the configuration file path
    Path,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
    Jsonl,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::JsonLines,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("gametag_core", log::LevelFilter::Debug)
            .filter_module("gametag_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let debug = cli.debug;
    if let Err(error) = run(cli).await {
        eprint!("{}", error.format_for_user(debug));
        std::process::exit(error.exit_code() as i32);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Enrich {
            files,
            top_k,
            max_concurrent,
            format,
            no_cache,
            stats,
        } => {
            let mut config = get_config().context("Failed to load configuration")?;
            config.apply_cli_overrides(top_k, max_concurrent, no_cache);

            let format = match format {
                Some(arg) => arg.into(),
                None => OutputFormat::from_string(&config.output.default_format)
                    .map_err(|e| CliError::misuse(&e.to_string()))?,
            };
            let options = EnrichOptions {
                files,
                format,
                use_color: config.output.color_enabled && std::io::stdout().is_terminal(),
                show_stats: stats,
            };

            let orchestrator = EnrichCommandOrchestrator::new(&config)?;
            let mut stdout = std::io::stdout().lock();
            orchestrator.run(&options, &mut stdout).await?;
        }
        Commands::Config { command } => config_command(command)?,
        Commands::Completions { shell } => generate_completions(shell),
    }

    Ok(())
}

fn config_command(command: ConfigCommand) -> CliResult<()> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            let value = manager
                .get(&key)
                .map_err(|e| CliError::misuse(&format!("{e:#}")))?;
            println!("{value}");
        }
        ConfigCommand::Set { key, value } => {
            manager
                .set(&key, &value)
                .map_err(|e| CliError::misuse(&format!("{e:#}")))?;
            eprintln!("{}", format!("Set {key} = {value}").green());
            eprintln!(
                "Configuration saved to: {}",
                manager.get_config_path().display()
            );
        }
        ConfigCommand::List => {
            let items = manager.list()?;
            eprintln!("Config file: {}", manager.get_config_path().display());

            let mut current_section = String::new();
            for (key, value) in items {
                let (section, name) = key.split_once('.').unwrap_or(("general", key.as_str()));
                if section != current_section {
                    println!("[{section}]");
                    current_section = section.to_string();
                }
                println!("  {name} = {value}");
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
