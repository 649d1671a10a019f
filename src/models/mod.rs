//! Domain models for DNS forwarding inspection.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkIdentity`] and [`NetworkRef`] - VPC network names and zone network bindings
//! - [`VmRef`] - The VM under inspection
//! - [`ForwardingZoneRecord`] - A forwarding zone as read from one project
//! - [`AnnotatedBinding`] - One zone bound to the subject network, with conflict flags

mod binding;
mod network;
mod vm;
mod zone;

// Re-export public types
pub use binding::AnnotatedBinding;
pub use network::{NetworkIdentity, NetworkRef};
pub use vm::VmRef;
pub use zone::ForwardingZoneRecord;
