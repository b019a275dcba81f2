//! Dontcite CLI - append cited quotes to Dontpad pages
//!
//! Takes a selection (text, page URL, page title), formats it as a citation
//! entry and appends it to the configured Dontpad page.

mod config;
mod input;
mod reporter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{Config, LayeredPath, PATH_ENV};
use dontcite::domain::MSG_NO_SELECTION;
use dontcite::{
    format_entry, Clock, DontpadClient, PageStore, PathProvider, SelectionChannel, StatusLevel,
    SystemClock, UpdateService,
};
use input::SelectionArgs;
use reporter::TerminalReporter;

#[derive(Parser)]
#[command(name = "dontcite")]
#[command(about = "Dontcite - append cited quotes to Dontpad pages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a selection to the Dontpad page
    Add {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Dontpad page path (overrides env and config)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the entry a selection would produce, without sending it
    Preview {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the current content of the Dontpad page
    Show {
        /// Dontpad page path (overrides env and config)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Manage the stored Dontpad page path
    Path {
        #[command(subcommand)]
        action: PathAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum PathAction {
    /// Store the page path (will prompt if not provided)
    Set {
        /// Page path, e.g. "reading/2026"
        path: Option<String>,
    },
    /// Show the active page path and where it comes from
    Show,
    /// Forget the stored page path
    Clear,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { selection, path } => cmd_add(selection, path).await,
        Commands::Preview { selection } => cmd_preview(selection),
        Commands::Show { path } => cmd_show(path).await,
        Commands::Path { action } => cmd_path(action),
        Commands::Config => cmd_config(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_add(args: SelectionArgs, path: Option<String>) -> Result<ExitCode> {
    let config = Config::load()?;
    let selection = args.read()?;
    debug!(base_url = %config.effective_base_url(), "Loaded configuration");

    let (channel, responder) = SelectionChannel::new();
    tokio::spawn(responder.answer_once(selection));

    let reporter = Arc::new(TerminalReporter::new());
    let service = UpdateService::new(
        Arc::new(DontpadClient::with_base_url(&config.effective_base_url())),
        Arc::new(channel),
        Arc::new(LayeredPath::from_env(path, &config)),
        reporter.clone(),
    );

    // Outcome is already on screen through the reporter
    let _ = service.run().await;

    match reporter.last_level() {
        Some(StatusLevel::Error) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn cmd_preview(args: SelectionArgs) -> Result<ExitCode> {
    let selection = args.read()?;

    match selection.highlighted_text() {
        Some(text) => {
            let entry = format_entry(text, &selection.title, &selection.url, SystemClock.today());
            println!("{}", entry.trim_start_matches('\n'));
        }
        None => println!("{}", MSG_NO_SELECTION.yellow()),
    }

    Ok(ExitCode::SUCCESS)
}

async fn cmd_show(path: Option<String>) -> Result<ExitCode> {
    let config = Config::load()?;
    let page_path = LayeredPath::from_env(path, &config).page_path()?;
    let client = DontpadClient::with_base_url(&config.effective_base_url());

    let page = client
        .fetch_page(&page_path)
        .await
        .with_context(|| format!("Failed to fetch Dontpad page '{}'", page_path))?;

    if page.body.is_empty() {
        println!("{}", format!("(page '{}' is empty)", page_path).dimmed());
    } else {
        println!("{}", page.body);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_path(action: PathAction) -> Result<ExitCode> {
    let mut config = Config::load()?;

    match action {
        PathAction::Set { path } => {
            let raw = match path {
                Some(p) => p,
                None => Input::<String>::new()
                    .with_prompt("Dontpad path")
                    .interact_text()
                    .context("Failed to read Dontpad path")?,
            };

            let page_path = config.set_path(&raw)?;
            config.save()?;
            println!(
                "{} Dontpad path set to '{}' ({:?})",
                "✓".green(),
                page_path,
                Config::config_path()?
            );
        }

        PathAction::Show => {
            let layers = LayeredPath::from_env(None, &config);
            match layers.active() {
                Some((raw, source)) => {
                    println!("{} {}", raw.cyan(), format!("(from {})", source).dimmed());
                }
                None => {
                    println!("No Dontpad path configured.");
                    println!("\n{}", "Set one with:".dimmed());
                    println!("  dontcite path set <PATH>");
                    println!("  or export {}=<PATH>", PATH_ENV);
                }
            }
        }

        PathAction::Clear => {
            if config.clear_path() {
                config.save()?;
                println!("{} Stored Dontpad path removed", "✓".green());
            } else {
                println!("No stored Dontpad path.");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_config() -> Result<ExitCode> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", Config::config_path()?);
    println!(
        "  Dontpad path: {}",
        config.dontpad_path.as_deref().unwrap_or("(not set)")
    );
    println!("  Base URL: {}", config.effective_base_url());

    if let Some((raw, source)) = LayeredPath::from_env(None, &config).active() {
        println!("  Active path: {} {}", raw.cyan(), format!("(from {})", source).dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
