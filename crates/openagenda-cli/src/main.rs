//! Entry point for `oagenda`, the keyword-driven OpenAgenda harvester.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use openagenda::OpenAgendaClient;
use openagenda_cli::config::{self, HarvestConfig};
use openagenda_cli::orchestrator::Orchestrator;
use openagenda_cli::output;

#[derive(Parser)]
#[command(
    name = "oagenda",
    about = "oagenda — search OpenAgenda agendas by keyword and retrieve their events",
    version,
    after_help = "Run 'oagenda <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search agendas matching each keyword and print the result pages
    Search {
        /// Search keywords, queried in order
        #[arg(required = true)]
        keywords: Vec<String>,

        #[command(flatten)]
        query: QueryArgs,
    },
    /// Search agendas, then retrieve events for every (agenda, keyword) pair
    Harvest {
        /// Search keywords, queried in order
        #[arg(required = true)]
        keywords: Vec<String>,

        #[command(flatten)]
        query: QueryArgs,

        /// Event listing page size
        #[arg(long, default_value = "20")]
        event_size: u32,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// API key (falls back to the OPENAGENDA_KEY environment variable)
    #[arg(long)]
    key: Option<String>,

    /// Agenda search page size
    #[arg(long, default_value = "10")]
    size: u32,

    /// Agenda sort order
    #[arg(long, default_value = "createdAt.desc")]
    sort: String,

    /// Restrict discovery to official agendas
    #[arg(long)]
    official: bool,

    /// Directory to save harvested JSON into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the API endpoint (for testing)
    #[arg(long)]
    base_url: Option<String>,
}

enum Mode {
    Search,
    Harvest,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Global flags ride on environment variables so every module can check them
    if cli.json {
        std::env::set_var("OAGENDA_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("OAGENDA_QUIET", "1");
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Search { keywords, query } => run(keywords, query, 20, Mode::Search).await,
        Commands::Harvest {
            keywords,
            query,
            event_size,
        } => run(keywords, query, event_size, Mode::Harvest).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "oagenda", &mut std::io::stdout());
            Ok(())
        }
    };

    // One protective boundary for the whole run. Exit codes: 0=success, 1=error.
    if let Err(e) = &result {
        if output::is_json() {
            println!(
                "{}",
                serde_json::json!({ "error": true, "message": format!("{e:#}") })
            );
        } else if !output::is_quiet() {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
    result
}

async fn run(keywords: Vec<String>, args: QueryArgs, event_size: u32, mode: Mode) -> Result<()> {
    let key = config::resolve_key(args.key)?;
    let client = match &args.base_url {
        Some(base) => OpenAgendaClient::with_base_url(key, base),
        None => OpenAgendaClient::new(key),
    };

    let config = HarvestConfig {
        keywords,
        agenda_size: args.size,
        event_size,
        sort: args.sort,
        official: args.official,
        out_dir: args.out,
    };

    let orchestrator = Orchestrator::new(client, config);
    match mode {
        Mode::Search => orchestrator.search().await,
        Mode::Harvest => orchestrator.harvest().await,
    }
}
