//! Per-project zone listing.
//!
//! A failing project does not stop the run: each project yields a
//! [`ProjectListing`] holding either its zones or the failure.

use crate::error::InspectorError;
use crate::inventory::Inventory;
use crate::models::ForwardingZoneRecord;
use std::sync::Arc;

/// Outcome of listing one project's forwarding zones.
#[derive(Debug)]
pub struct ProjectListing {
    pub project: String,
    pub zones: Result<Vec<ForwardingZoneRecord>, InspectorError>,
}

impl ProjectListing {
    pub fn list(inventory: &dyn Inventory, project: &str) -> Self {
        let zones = inventory.list_forwarding_zones(project);
        if let Err(e) = &zones {
            log::warn!("Failed to retrieve zones from project {project}: {e}");
        }
        ProjectListing {
            project: project.to_string(),
            zones,
        }
    }
}

/// List each project in order, one at a time.
pub fn collect_listings(inventory: &dyn Inventory, projects: &[String]) -> Vec<ProjectListing> {
    projects
        .iter()
        .map(|project| ProjectListing::list(inventory, project))
        .collect()
}

/// List all projects concurrently on the blocking pool.
///
/// Results come back in the order of `projects`, the same as [`collect_listings`].
pub async fn collect_listings_concurrently(
    inventory: Arc<dyn Inventory + Send + Sync>,
    projects: &[String],
) -> Vec<ProjectListing> {
    let tasks = projects.iter().cloned().map(|project| {
        let inventory = Arc::clone(&inventory);
        tokio::task::spawn_blocking(move || ProjectListing::list(inventory.as_ref(), &project))
    });

    futures::future::join_all(tasks)
        .await
        .into_iter()
        .zip(projects)
        .map(|(joined, project)| {
            joined.unwrap_or_else(|e| {
                log::error!("Listing worker for project {project} failed: {e}");
                ProjectListing {
                    project: project.clone(),
                    zones: Err(InspectorError::Worker(e.to_string())),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::models::{NetworkIdentity, VmRef};
    use std::time::Duration;

    /// Sleeps longer for earlier projects so completion order is reversed.
    struct SlowInventory;

    impl Inventory for SlowInventory {
        fn resolve_network(&self, _vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
            NetworkIdentity::new("vpc-a")
        }

        fn list_forwarding_zones(
            &self,
            project: &str,
        ) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
            match project {
                "p1" => std::thread::sleep(Duration::from_millis(60)),
                "p2" => std::thread::sleep(Duration::from_millis(30)),
                "panic" => panic!("worker blew up"),
                _ => {}
            }
            if project == "denied" {
                return Err(InspectorError::inventory(
                    "dns managed-zones list denied",
                    CommandError::Failed {
                        code: Some(1),
                        stderr: "PERMISSION_DENIED".to_string(),
                    },
                ));
            }
            Ok(vec![ForwardingZoneRecord {
                zone_name: format!("zone-{project}"),
                dns_name: "corp.internal.".to_string(),
                source_project: project.to_string(),
                network_bindings: vec!["vpc-a".to_string()],
                forwarding_targets: vec!["10.0.0.1".to_string()],
            }])
        }
    }

    fn projects(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_listings_keeps_failures() {
        let listings = collect_listings(&SlowInventory, &projects(&["p3", "denied", "p4"]));
        assert_eq!(listings.len(), 3);
        assert!(listings[0].zones.is_ok());
        assert!(matches!(
            listings[1].zones,
            Err(InspectorError::Inventory { .. })
        ));
        assert_eq!(listings[2].project, "p4");
    }

    #[tokio::test]
    async fn test_concurrent_listing_preserves_project_order() {
        let order = projects(&["p1", "p2", "denied", "p3"]);
        let listings = collect_listings_concurrently(Arc::new(SlowInventory), &order).await;
        let got: Vec<&str> = listings.iter().map(|l| l.project.as_str()).collect();
        assert_eq!(got, vec!["p1", "p2", "denied", "p3"]);
        let zone = &listings[0].zones.as_ref().expect("p1 should succeed")[0];
        assert_eq!(zone.zone_name, "zone-p1");
        assert!(listings[2].zones.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_listing_worker_panic_is_per_project() {
        let order = projects(&["p3", "panic", "p4"]);
        let listings = collect_listings_concurrently(Arc::new(SlowInventory), &order).await;
        assert!(listings[0].zones.is_ok());
        assert!(matches!(listings[1].zones, Err(InspectorError::Worker(_))));
        assert!(listings[2].zones.is_ok());
    }
}
