// src/cli.rs
// =============================================================================
// This file defines the command-line interface using the `clap` crate.
//
// The tool has a single job - crawl outward from a seed URL and collect
// matching sites - so the interface is one positional argument plus flags
// for every crawl knob, with the defaults the crawler has always used.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    version,
    about = "Crawl the web from a seed URL and collect sites served by a target platform",
    long_about = "site-scout performs a bounded breadth-first crawl: it follows outbound links \
                  from a seed URL, classifies each discovered link by a marker substring in the \
                  response (content-type header or body), and collects matches until a quota is \
                  reached. The collected URLs are written one per line to the output file."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    pub seed_url: String,

    /// Maximum number of matching sites to collect
    #[arg(long, default_value_t = 200)]
    pub quota: usize,

    /// Number of concurrent crawl workers
    #[arg(long, default_value_t = 5)]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Courtesy pause between requests per worker, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Marker substring that identifies a matching site (matched
    /// case-insensitively against the content-type header and the body)
    #[arg(long, default_value = "php")]
    pub marker: String,

    /// Output file for the collected site URLs, one per line
    #[arg(long, default_value = "sites.txt")]
    pub output: PathBuf,

    /// Print the run summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
