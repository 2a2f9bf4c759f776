// src/classify/marker.rs
// =============================================================================
// This module decides whether a URL points at a site served by the target
// platform.
//
// Decision rule:
// - fetch the URL (an independent request, separate from the crawl fetch
//   that discovered it)
// - match if the content-type header contains the marker substring, OR the
//   response body contains it, case-insensitively
//
// Any fetch failure during classification yields false, never an error;
// classification must not be able to abort the crawl.
// =============================================================================

use crate::fetch::Fetch;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

// Boolean predicate over a single URL
#[async_trait]
pub trait Classify: Send + Sync {
    async fn is_target_site(&self, url: &str) -> bool;
}

// Classifies by marker substring (default "php") in the content-type header
// or the page body.
pub struct MarkerClassifier {
    fetcher: Arc<dyn Fetch>,
    // Lowercased once at construction; matching is case-insensitive
    marker: String,
}

impl MarkerClassifier {
    pub fn new(fetcher: Arc<dyn Fetch>, marker: &str) -> Self {
        Self {
            fetcher,
            marker: marker.to_lowercase(),
        }
    }
}

#[async_trait]
impl Classify for MarkerClassifier {
    async fn is_target_site(&self, url: &str) -> bool {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Classification check failed for {}: {}", url, e);
                return false;
            }
        };

        if page.content_type.to_lowercase().contains(&self.marker) {
            return true;
        }

        page.body.to_lowercase().contains(&self.marker)
    }
}
