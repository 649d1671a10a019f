//! Forwarding zone record as read from one project.

use serde::{Deserialize, Serialize};

/// A Cloud DNS zone that forwards queries to external name servers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ForwardingZoneRecord {
    /// Zone name, unique within `source_project` only.
    pub zone_name: String,
    /// DNS suffix the zone answers for, e.g. `corp.internal.`.
    pub dns_name: String,
    /// Project the zone definition was read from.
    pub source_project: String,
    /// Bare network names or network resource paths, in listed order.
    #[serde(default)]
    pub network_bindings: Vec<String>,
    /// Target name server addresses, in listed order.
    #[serde(default)]
    pub forwarding_targets: Vec<String>,
}
