//! VPC network identities and zone network references.
//!
//! A zone's private visibility lists networks either by bare name (`vpc-a`) or
//! by resource path (`https://www.googleapis.com/compute/v1/projects/p1/global/networks/vpc-a`).
//! [`NetworkRef::parse`] turns both shapes into one normalized value.

use crate::error::InspectorError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Regex for `.../projects/{project}/global/networks/{network}`.
static NETWORK_PATH_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_network_path_regex() -> &'static Regex {
    NETWORK_PATH_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|/)projects/([^/]+)/global/networks/([^/]+)$").expect("Invalid Regex")
    })
}

/// Name of a VPC network, e.g. `vpc-a`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NetworkIdentity(String);

impl NetworkIdentity {
    /// Create from a bare network name.
    pub fn new(name: impl Into<String>) -> Result<Self, InspectorError> {
        let name = name.into();
        if name.is_empty() || name.contains('/') {
            return Err(InspectorError::malformed(format!(
                "invalid network name '{name}'"
            )));
        }
        Ok(NetworkIdentity(name))
    }

    /// Take the last segment of a network resource path.
    ///
    /// # Examples
    /// ```
    /// use dns_forwarding_inspector::models::NetworkIdentity;
    /// let net = NetworkIdentity::from_resource_path(
    ///     "https://www.googleapis.com/compute/v1/projects/p1/global/networks/vpc-a",
    /// )
    /// .unwrap();
    /// assert_eq!(net.as_str(), "vpc-a");
    /// ```
    pub fn from_resource_path(path: &str) -> Result<Self, InspectorError> {
        let last = path.trim_end().rsplit('/').next().unwrap_or_default();
        if last.is_empty() {
            return Err(InspectorError::malformed(format!(
                "network path '{path}' has no network name"
            )));
        }
        Ok(NetworkIdentity(last.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A network binding of a zone, normalized once at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRef {
    /// Bare network name; the owning project is not stated.
    Bare(NetworkIdentity),
    /// Resource path naming both the owning project and the network.
    Qualified {
        project: String,
        network: NetworkIdentity,
    },
}

impl NetworkRef {
    /// Parse a binding string.
    ///
    /// Anything containing `/` must match `.../projects/{P}/global/networks/{N}`;
    /// other strings are bare network names.
    pub fn parse(reference: &str) -> Result<Self, InspectorError> {
        let reference = reference.trim();
        if !reference.contains('/') {
            return NetworkIdentity::new(reference).map(NetworkRef::Bare);
        }
        let caps = get_network_path_regex()
            .captures(reference)
            .ok_or_else(|| {
                InspectorError::malformed(format!(
                    "network reference '{reference}' is not .../projects/{{project}}/global/networks/{{network}}"
                ))
            })?;
        Ok(NetworkRef::Qualified {
            project: caps[1].to_string(),
            network: NetworkIdentity(caps[2].to_string()),
        })
    }

    pub fn network(&self) -> &NetworkIdentity {
        match self {
            NetworkRef::Bare(network) => network,
            NetworkRef::Qualified { network, .. } => network,
        }
    }

    /// Project owning the network; bare names are assumed to live in `default_project`.
    pub fn owning_project<'a>(&'a self, default_project: &'a str) -> &'a str {
        match self {
            NetworkRef::Bare(_) => default_project,
            NetworkRef::Qualified { project, .. } => project,
        }
    }
}
