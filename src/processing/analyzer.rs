//! Binding analysis.
//!
//! Walks the listed zones in project order, keeps the bindings that point at
//! the subject network and flags cross-project bindings, repeated DNS names
//! and zones with several forwarding targets.

use super::listing::{collect_listings, ProjectListing};
use crate::inventory::Inventory;
use crate::models::{AnnotatedBinding, NetworkIdentity, NetworkRef};
use serde::Serialize;
use std::collections::HashSet;

/// A project whose zones could not be listed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SkippedProject {
    pub project: String,
    pub reason: String,
}

/// Result of one analysis run.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Bindings in discovery order: project, then zone, then binding.
    pub bindings: Vec<AnnotatedBinding>,
    pub skipped_projects: Vec<SkippedProject>,
}

/// List the zones of `projects` in order and analyze them.
pub fn analyze_bindings(
    inventory: &dyn Inventory,
    subject_project: &str,
    subject_network: &NetworkIdentity,
    projects: &[String],
) -> Analysis {
    let listings = collect_listings(inventory, projects);
    analyze_listings(subject_project, subject_network, &listings)
}

/// Annotate every zone binding that points at `subject_network`.
///
/// Bare network names are assumed to live in `subject_project`. The order of
/// `listings` decides which occurrence of a DNS name counts as the duplicate.
pub fn analyze_listings(
    subject_project: &str,
    subject_network: &NetworkIdentity,
    listings: &[ProjectListing],
) -> Analysis {
    let mut seen_dns_names: HashSet<&str> = HashSet::new();
    let mut analysis = Analysis::default();

    for listing in listings {
        let zones = match &listing.zones {
            Ok(zones) => zones,
            Err(e) => {
                analysis.skipped_projects.push(SkippedProject {
                    project: listing.project.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        for zone in zones {
            if zone.forwarding_targets.is_empty() {
                log::debug!("zone {} in {} has no forwarding targets", zone.zone_name, listing.project);
                continue;
            }

            for reference in &zone.network_bindings {
                let network_ref = match NetworkRef::parse(reference) {
                    Ok(network_ref) => network_ref,
                    Err(e) => {
                        log::debug!("zone {}: skipping binding: {e}", zone.zone_name);
                        continue;
                    }
                };
                if network_ref.network() != subject_network {
                    continue;
                }

                let target_project = network_ref.owning_project(subject_project);
                // insert() is false when the name was already emitted
                let is_duplicate_dns_name = !seen_dns_names.insert(zone.dns_name.as_str());

                analysis.bindings.push(AnnotatedBinding {
                    zone_name: zone.zone_name.clone(),
                    dns_name: zone.dns_name.clone(),
                    source_project: zone.source_project.clone(),
                    target_project: target_project.to_string(),
                    bound_network: network_ref.network().clone(),
                    target_ips: zone.forwarding_targets.clone(),
                    is_cross_project: zone.source_project != target_project,
                    is_duplicate_dns_name,
                    has_multiple_targets: zone.forwarding_targets.len() > 1,
                });
            }
        }
    }

    log::info!(
        "{} bindings to {subject_network}, {} projects skipped",
        analysis.bindings.len(),
        analysis.skipped_projects.len()
    );
    analysis
}
