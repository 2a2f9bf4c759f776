// src/fetch/mod.rs
// =============================================================================
// HTTP fetching.
//
// Submodules:
// - http: the Fetch trait, the reqwest-backed fetcher, and the error taxonomy
//
// The Fetch trait is the seam between the crawler and the network: the
// orchestrator and the classifier both fetch through it, and tests substitute
// stub implementations.
// =============================================================================

mod http;

pub use http::{Fetch, FetchError, HttpFetcher, Page};
