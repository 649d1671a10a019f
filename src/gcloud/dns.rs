//! Cloud DNS managed-zone listing.
//!
//! Reads `gcloud dns managed-zones list` output and keeps only forwarding zones.

use super::cli;
use crate::error::InspectorError;
use crate::models::ForwardingZoneRecord;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawManagedZone {
    name: String,
    dns_name: String,
    forwarding_config: Option<RawForwardingConfig>,
    private_visibility_config: Option<RawPrivateVisibilityConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawForwardingConfig {
    #[serde(default)]
    target_name_servers: Vec<RawTargetNameServer>,
    kind: Option<String>,
}

impl RawForwardingConfig {
    fn is_empty(&self) -> bool {
        self.target_name_servers.is_empty() && self.kind.is_none()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawTargetNameServer {
    ipv4_address: Option<String>,
    ipv6_address: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawPrivateVisibilityConfig {
    #[serde(default)]
    networks: Vec<RawNetworkBinding>,
}

/// gcloud lists bindings as objects, older exports as plain strings.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawNetworkBinding {
    Url(String),
    Object {
        #[serde(rename = "networkUrl")]
        network_url: String,
    },
    /// Kept so the analyzer can skip it as a malformed binding.
    Other(serde_json::Value),
}

impl RawNetworkBinding {
    fn into_reference(self) -> String {
        match self {
            RawNetworkBinding::Url(url) => url,
            RawNetworkBinding::Object { network_url } => network_url,
            RawNetworkBinding::Other(value) => {
                log::debug!("unrecognised network binding {value}");
                String::new()
            }
        }
    }
}

/// List the forwarding zones of `project` with gcloud.
pub fn list_forwarding_zones(
    gcloud: &str,
    project: &str,
) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
    let args = ["dns", "managed-zones", "list", "--project", project, "--format=json"];
    let operation = format!("dns managed-zones list {project}");
    let zones: Vec<RawManagedZone> = cli::run_json(gcloud, &args, &operation)?;
    Ok(forwarding_zones(zones, project))
}

/// Parse `gcloud dns managed-zones list --format=json` output for `project`.
pub fn parse_managed_zones(
    json: &str,
    project: &str,
) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
    let zones: Vec<RawManagedZone> =
        cli::parse_json(json, &format!("managed zones {project}"))?;
    Ok(forwarding_zones(zones, project))
}

fn forwarding_zones(zones: Vec<RawManagedZone>, project: &str) -> Vec<ForwardingZoneRecord> {
    let total = zones.len();
    let records: Vec<ForwardingZoneRecord> = zones
        .into_iter()
        .filter_map(|zone| {
            let forwarding = zone.forwarding_config.filter(|f| !f.is_empty())?;
            let forwarding_targets = forwarding
                .target_name_servers
                .into_iter()
                .filter_map(|t| t.ipv4_address.or(t.ipv6_address))
                .collect();
            let network_bindings = zone
                .private_visibility_config
                .unwrap_or_default()
                .networks
                .into_iter()
                .map(RawNetworkBinding::into_reference)
                .collect();
            Some(ForwardingZoneRecord {
                zone_name: zone.name,
                dns_name: zone.dns_name,
                source_project: project.to_string(),
                network_bindings,
                forwarding_targets,
            })
        })
        .collect();
    log::info!(
        "project {project}: {} forwarding zones of {total} managed zones",
        records.len()
    );
    records
}
