//! Reference to the VM under inspection.

use crate::error::InspectorError;
use std::fmt;

/// Identifies a VM instance by project, location (zone) and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmRef {
    pub project: String,
    pub location: String,
    pub name: String,
}

impl VmRef {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, InspectorError> {
        let vm = VmRef {
            project: project.into(),
            location: location.into(),
            name: name.into(),
        };
        if vm.project.is_empty() || vm.location.is_empty() || vm.name.is_empty() {
            return Err(InspectorError::malformed(format!(
                "VM reference needs project, location and name: {vm}"
            )));
        }
        Ok(vm)
    }
}

impl fmt::Display for VmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.location, self.name)
    }
}
