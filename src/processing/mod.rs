//! Forwarding zone processing logic.
//!
//! This module contains the business logic of the inspection:
//! - [`listing`] - Per-project zone listing with best-effort failure handling
//! - [`analyzer`] - Filtering and annotating zone bindings for the subject network

mod analyzer;
mod listing;

// Re-export public functions
pub use analyzer::{analyze_bindings, analyze_listings, Analysis, SkippedProject};
pub use listing::{collect_listings, collect_listings_concurrently, ProjectListing};
