//! Analyzer output: one zone bound to the subject network.

use super::NetworkIdentity;
use serde::Serialize;

/// One (zone, matching network binding) pair with its conflict flags.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedBinding {
    pub zone_name: String,
    pub dns_name: String,
    pub source_project: String,
    /// Project owning the bound network.
    pub target_project: String,
    pub bound_network: NetworkIdentity,
    /// Forwarding targets in listed order, duplicates kept.
    pub target_ips: Vec<String>,
    pub is_cross_project: bool,
    /// The DNS name was already emitted earlier in this run.
    pub is_duplicate_dns_name: bool,
    pub has_multiple_targets: bool,
}

impl AnnotatedBinding {
    /// `source → target` for cross-project bindings.
    pub fn cross_direction(&self) -> Option<String> {
        self.is_cross_project
            .then(|| format!("{} → {}", self.source_project, self.target_project))
    }
}
