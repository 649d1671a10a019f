//! Compute Engine instance lookup.
//!
//! Resolves the VPC network of a VM from `gcloud compute instances describe`.

use super::cli;
use crate::error::InspectorError;
use crate::models::{NetworkIdentity, VmRef};
use serde::Deserialize;

/// Subset of the instance resource we read.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawInstance {
    #[serde(default)]
    network_interfaces: Vec<RawNetworkInterface>,
}

#[derive(Deserialize, Debug)]
struct RawNetworkInterface {
    network: Option<String>,
}

/// Describe the VM with gcloud and return the network of its first interface.
pub fn describe_instance_network(gcloud: &str, vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
    let args = [
        "compute",
        "instances",
        "describe",
        vm.name.as_str(),
        "--zone",
        vm.location.as_str(),
        "--project",
        vm.project.as_str(),
        "--format=json",
    ];
    let operation = format!("compute instances describe {vm}");
    let instance: RawInstance = cli::run_json(gcloud, &args, &operation)?;
    primary_network(instance, vm)
}

/// Parse `gcloud compute instances describe --format=json` output.
pub fn parse_instance_network(json: &str, vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
    let instance: RawInstance = cli::parse_json(json, &format!("instance {vm}"))?;
    primary_network(instance, vm)
}

fn primary_network(instance: RawInstance, vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
    let interface = instance
        .network_interfaces
        .into_iter()
        .next()
        .ok_or_else(|| InspectorError::malformed(format!("VM {vm} has no network interfaces")))?;
    let network_url = interface.network.ok_or_else(|| {
        InspectorError::malformed(format!("VM {vm} network interface has no network"))
    })?;
    log::debug!("VM {vm} network url: {network_url}");
    NetworkIdentity::from_resource_path(&network_url)
}
