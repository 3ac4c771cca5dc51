//! Fetch-Verdict main entry point
//!
//! Command-line interface for manually exercising the fetcher and its helpers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fetch_verdict::browser::detect_browser;
use fetch_verdict::config::{load_config_with_hash, FetcherConfig};
use fetch_verdict::params::{decode_params, encode_params};
use fetch_verdict::status::{classify, describe};
use fetch_verdict::{Fetcher, Validators};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fetch-Verdict: classify HTTP fetch outcomes for crawl schedulers
#[derive(Parser, Debug)]
#[command(name = "fetch-verdict")]
#[command(version = "1.0.0")]
#[command(about = "Fetch a URL and report how a crawler should treat it", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a URL and print its outcome
    Fetch {
        url: String,

        /// ETag from a previous fetch, sent as If-None-Match
        #[arg(long)]
        etag: Option<String>,

        /// Last-Modified from a previous fetch, sent as If-Modified-Since
        #[arg(long)]
        last_modified: Option<String>,
    },

    /// Classify a status code without fetching anything
    Classify {
        #[arg(allow_hyphen_values = true)]
        code: i32,
    },

    /// Detect the browser family from a user agent string
    Browser { user_agent: String },

    /// Convert query parameters
    #[command(subcommand)]
    Params(ParamsCommand),
}

#[derive(Subcommand, Debug)]
enum ParamsCommand {
    /// Encode key=value pairs into a query string
    Encode { pairs: Vec<String> },

    /// Decode a query string into key=value pairs
    Decode { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config.fetcher
        }
        None => FetcherConfig::default(),
    };

    match cli.command {
        Command::Fetch {
            url,
            etag,
            last_modified,
        } => {
            let validators = Validators {
                etag,
                last_modified,
            };
            handle_fetch(config, &url, &validators).await?
        }
        Command::Classify { code } => handle_classify(code),
        Command::Browser { user_agent } => {
            println!("{}", detect_browser(Some(user_agent.as_str())));
        }
        Command::Params(ParamsCommand::Encode { pairs }) => handle_encode(&pairs)?,
        Command::Params(ParamsCommand::Decode { query }) => {
            for (key, value) in decode_params(&query)? {
                println!("{} = {}", key, value);
            }
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fetch_verdict=info,warn"),
            1 => EnvFilter::new("fetch_verdict=debug,info"),
            2 => EnvFilter::new("fetch_verdict=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles `fetch`: one request, outcome on stdout
async fn handle_fetch(
    config: FetcherConfig,
    url: &str,
    validators: &Validators,
) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(config)?;
    let result = fetcher.fetch_conditional(url, validators).await?;

    println!("Outcome: {}", result.outcome());

    if let Some(response) = result.response() {
        println!("Final URL: {}", response.url());
        println!("Status: {}", response.status());
        println!("Fetched at: {}", response.fetched_at().to_rfc3339());
        if let Some(content_type) = response.content_type() {
            println!("Content-Type: {}", content_type);
        }
        if let Some(etag) = response.etag() {
            println!("ETag: {}", etag);
        }
        if let Some(last_modified) = response.last_modified() {
            println!("Last-Modified: {}", last_modified);
        }
        println!("Body: {} bytes", response.body().len());
    }

    Ok(())
}

/// Handles `classify`: prints the outcome for a bare status code
fn handle_classify(code: i32) {
    println!("{} {}: {}", code, describe(code), classify(code));
}

/// Handles `params encode`
fn handle_encode(pairs: &[String]) -> anyhow::Result<()> {
    let mut params = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected key=value, got '{}'", pair))?;
        params.insert(key.to_string(), value.to_string());
    }

    println!("{}", encode_params(&params));
    Ok(())
}
