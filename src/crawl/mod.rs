// src/crawl/mod.rs
// =============================================================================
// The crawl core.
//
// Submodules:
// - orchestrator: frontier/visited-set ownership, the worker pool, and the
//   quota/termination logic
//
// Everything the workers share - the frontier, the visited set, the result
// collection - is owned here; fetch, extract, classify, and sink are leaf
// collaborators reached through narrow contracts.
// =============================================================================

mod orchestrator;

pub use orchestrator::{ConfigError, CrawlConfig, Crawler};
