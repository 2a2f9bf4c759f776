// src/extract/mod.rs
// =============================================================================
// Link extraction.
//
// Submodules:
// - html: pulls candidate URLs out of fetched page markup
// =============================================================================

mod html;

pub use html::extract_links;
