//! gcloud CLI interaction.
//!
//! This module handles all Google Cloud operations:
//! - [`cli`] - Command execution for the gcloud CLI
//! - [`compute`] - VM network lookup
//! - [`dns`] - Forwarding zone listing
//! - [`cache`] - Daily snapshots of gcloud responses

mod cache;
mod cli;
mod compute;
mod dns;

use crate::error::InspectorError;
use crate::inventory::Inventory;
use crate::models::{ForwardingZoneRecord, NetworkIdentity, VmRef};

// Re-export public types and functions
pub use cache::CachedInventory;
pub use compute::parse_instance_network;
pub use dns::parse_managed_zones;

/// [`Inventory`] backed by the gcloud CLI.
#[derive(Debug, Clone)]
pub struct GcloudInventory {
    gcloud: String,
}

impl GcloudInventory {
    /// `gcloud` is the executable to invoke, e.g. `gcloud` or a full path.
    pub fn new(gcloud: impl Into<String>) -> Self {
        GcloudInventory {
            gcloud: gcloud.into(),
        }
    }
}

impl Inventory for GcloudInventory {
    fn resolve_network(&self, vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
        compute::describe_instance_network(&self.gcloud, vm)
    }

    fn list_forwarding_zones(
        &self,
        project: &str,
    ) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
        dns::list_forwarding_zones(&self.gcloud, project)
    }
}
