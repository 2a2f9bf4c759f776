// src/main.rs
// =============================================================================
// This is the entry point of the site-scout CLI.
//
// What happens here:
// 1. Initialize process-wide logging (once, at startup, never reconfigured)
// 2. Parse command-line arguments using clap
// 3. Wire the fetcher, classifier, and crawl orchestrator together
// 4. Run the crawl, persist the collection, print a summary
// 5. Exit with a proper code (0 = run completed, 2 = hard failure)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod classify;      // src/classify/ - marker-substring site classification
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the crawl orchestrator (frontier, workers, quota)
mod extract;       // src/extract/ - link extraction from HTML
mod fetch;         // src/fetch/ - HTTP fetching
mod sink;          // src/sink/ - result persistence

use anyhow::{Context, Result};
use clap::Parser;
use classify::MarkerClassifier;
use cli::Cli;
use crawl::{CrawlConfig, Crawler};
use fetch::HttpFetcher;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    init_telemetry();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Process-wide logging: timestamped, severity-labelled events to stderr, so
// stdout stays clean for the JSON report. RUST_LOG overrides the default
// filter.
fn init_telemetry() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_scout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// The application logic.
// Per-URL network failures are absorbed inside the crawl; only configuration
// problems and a failed output write surface here as errors.
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // A seed that doesn't parse is a configuration error, not a crawl result
    url::Url::parse(&cli.seed_url)
        .with_context(|| format!("invalid seed URL '{}'", cli.seed_url))?;

    let fetcher = Arc::new(
        HttpFetcher::new(Duration::from_secs(cli.timeout))
            .context("failed to build the HTTP client")?,
    );
    let classifier = Arc::new(MarkerClassifier::new(fetcher.clone(), &cli.marker));

    let config = CrawlConfig {
        quota: cli.quota,
        workers: cli.workers,
        delay: Duration::from_millis(cli.delay_ms),
    };
    let crawler = Crawler::new(config, fetcher, classifier)?;

    let results = crawler.run(&cli.seed_url).await;

    sink::persist(&cli.output, &results)?;
    info!("Collected sites saved to {}", cli.output.display());

    print_summary(&cli, &results)?;

    Ok(0)
}

// The run summary emitted on stdout with --json
#[derive(Serialize)]
struct RunReport<'a> {
    seed: &'a str,
    marker: &'a str,
    quota: usize,
    collected: usize,
    output: String,
    sites: &'a [String],
}

// Prints the summary either as a short table or as JSON
fn print_summary(cli: &Cli, results: &[String]) -> Result<()> {
    if cli.json {
        let report = RunReport {
            seed: &cli.seed_url,
            marker: &cli.marker,
            quota: cli.quota,
            collected: results.len(),
            output: cli.output.display().to_string(),
            sites: results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("📊 Summary:");
        println!("   🔍 Seed: {}", cli.seed_url);
        println!("   🏷️  Marker: {}", cli.marker);
        println!("   ✅ Collected: {} of {} (quota)", results.len(), cli.quota);
        println!("   📄 Output: {}", cli.output.display());
    }
    Ok(())
}
