//! The inventory service seam.
//!
//! Everything the analyzer needs from the cloud is behind [`Inventory`], so the
//! gcloud client, the snapshot cache and test fakes are interchangeable.

use crate::error::InspectorError;
use crate::models::{ForwardingZoneRecord, NetworkIdentity, VmRef};

pub trait Inventory {
    /// Network identity of the VM's first network interface.
    fn resolve_network(&self, vm: &VmRef) -> Result<NetworkIdentity, InspectorError>;

    /// Zones of `project` that carry a forwarding configuration.
    fn list_forwarding_zones(
        &self,
        project: &str,
    ) -> Result<Vec<ForwardingZoneRecord>, InspectorError>;
}

/// Resolve the subject network; any failure here is fatal to the run.
pub fn resolve_subject_network(
    inventory: &dyn Inventory,
    vm: &VmRef,
) -> Result<NetworkIdentity, InspectorError> {
    let network = inventory.resolve_network(vm)?;
    log::info!("VM {vm} is attached to network {network}");
    Ok(network)
}
