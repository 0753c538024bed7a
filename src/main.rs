//! CLI entry point for the FSA ratings browser.
//!
//! Lists local authorities, shows the hygiene rating distribution for one
//! authority, or runs an interactive picker over stdin.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use fsa_ratings::{
    config::ApiConfig,
    infra::fsa::FsaClient,
    output::{RatingReport, render_directory, render_outcome},
    ratings::tally,
    selection::{RatingsBrowser, SelectionOutcome},
    services::ratings_api::RatingsApi,
};
use std::ffi::OsStr;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DIRECTORY_ERROR: &str = "An error occurred while fetching the list of authorities";

#[derive(Parser)]
#[command(name = "fsa_ratings")]
#[command(about = "Food hygiene rating distributions per local authority", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List local authorities and their identifiers
    Authorities,
    /// Show the rating distribution for one authority
    Ratings {
        /// Authority name, exactly as listed by `authorities`
        #[arg(value_name = "AUTHORITY")]
        authority: String,

        /// Print a JSON report instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Pick authorities interactively from a numbered list
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();
    let config = ApiConfig::from_env()?;
    info!(
        authorities_url = %config.authorities_url,
        api_version = %config.api_version,
        "Configuration loaded"
    );
    let client = FsaClient::new(config)?;

    match cli.command {
        Commands::Authorities => {
            let browser = load_browser(client).await?;
            print!("{}", render_directory(browser.directory()));
        }
        Commands::Ratings { authority, json } => {
            if json {
                print_report(&client, &authority).await?;
            } else {
                let browser = load_browser(client).await?;
                show_selection(&browser, &authority).await?;
            }
        }
        Commands::Browse => {
            let browser = load_browser(client).await?;
            browse(&browser).await?;
        }
    }

    Ok(())
}

/// Logging setup: stderr for humans, plus a daily-rolling JSON log file.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/fsa_ratings.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fsa_ratings.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries the actual results, so stderr stays quiet by default
    let stderr_filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let json_filter = EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?);
    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(json_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

async fn load_browser(client: FsaClient) -> Result<RatingsBrowser<FsaClient>> {
    match RatingsBrowser::load(client).await {
        Ok(browser) => Ok(browser),
        Err(e) => {
            error!(error = %e, "Failed to load authority directory");
            eprintln!("{DIRECTORY_ERROR}");
            Err(e.into())
        }
    }
}

async fn show_selection(browser: &RatingsBrowser<FsaClient>, authority: &str) -> Result<()> {
    let outcome = browser.select(authority).await;
    let text = render_outcome(&outcome);
    match outcome {
        SelectionOutcome::Cleared => bail!("unknown authority '{authority}'"),
        SelectionOutcome::Failed { error, .. } => {
            eprintln!("{text}");
            Err(error.into())
        }
        _ => {
            println!("{text}");
            Ok(())
        }
    }
}

#[tracing::instrument(skip(client))]
async fn print_report(client: &FsaClient, authority: &str) -> Result<()> {
    let directory = match client.fetch_authority_directory().await {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("{DIRECTORY_ERROR}");
            return Err(e.into());
        }
    };
    let authority_id = directory
        .get(authority)
        .ok_or_else(|| anyhow!("unknown authority '{authority}'"))?;

    let records = client
        .fetch_establishments(authority_id)
        .await
        .with_context(|| format!("An error occurred while loading results for {authority}"))?;

    let t = tally(&records);
    println!("{}", RatingReport::new(authority, authority_id, &t).to_json()?);
    Ok(())
}

/// Interactive picker. Accepts a list number or an exact authority name;
/// a blank line clears the result and `q` quits.
async fn browse(browser: &RatingsBrowser<FsaClient>) -> Result<()> {
    let directory = browser.directory();
    print!("{}", render_directory(directory));
    println!("\nPlease select an authority (number or name, q to quit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "q" {
            break;
        }

        let name = match input.parse::<usize>() {
            Ok(n) if n >= 1 => directory.nth(n - 1).map_or(input, |(name, _)| name),
            _ => input,
        };

        println!("{}", render_outcome(&browser.select(name).await));
        println!("Please select an authority (number or name, q to quit):");
    }

    Ok(())
}
