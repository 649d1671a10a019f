//! Inspect Cloud DNS forwarding zones bound to the VPC network of a VM.
//!
//! The flow is: resolve the VM's network, list the forwarding zones of every
//! scanned project, keep the bindings that point at that network, report.

pub mod config;
pub mod error;
pub mod gcloud;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Args;
use error::InspectorError;
use gcloud::{CachedInventory, GcloudInventory};
use inventory::{resolve_subject_network, Inventory};
use models::VmRef;
use output::ReportHeader;
use processing::{analyze_listings, collect_listings, collect_listings_concurrently, Analysis};
use std::sync::Arc;

/// gcloud inventory, wrapped in the snapshot cache when `--cache-dir` is set.
pub fn build_inventory(args: &Args) -> Arc<dyn Inventory + Send + Sync> {
    let gcloud = GcloudInventory::new(args.gcloud.clone());
    match &args.cache_dir {
        Some(dir) => {
            log::info!("Using cache dir: {}", dir.display());
            Arc::new(CachedInventory::new(Box::new(gcloud), dir))
        }
        None => Arc::new(gcloud),
    }
}

/// Resolve the subject network of `vm` and analyze `projects` against it.
///
/// Only the network lookup is fatal; project listing failures end up in
/// [`Analysis::skipped_projects`].
pub async fn inspect(
    inventory: Arc<dyn Inventory + Send + Sync>,
    vm: &VmRef,
    projects: &[String],
    parallel: bool,
) -> Result<(models::NetworkIdentity, Analysis), InspectorError> {
    let network = resolve_subject_network(inventory.as_ref(), vm)?;

    let listings = if parallel {
        collect_listings_concurrently(Arc::clone(&inventory), projects).await
    } else {
        collect_listings(inventory.as_ref(), projects)
    };
    let analysis = analyze_listings(&vm.project, &network, &listings);
    Ok((network, analysis))
}

/// Run the whole inspection for parsed command-line arguments and print the report.
pub async fn run(args: &Args) -> Result<(), InspectorError> {
    let vm = VmRef::new(&args.project, &args.zone, &args.vm)?;
    let projects = args.scan_projects();
    log::info!("Inspecting {vm} across projects {projects:?}");

    let (network, analysis) = inspect(build_inventory(args), &vm, &projects, args.parallel).await?;

    let header = ReportHeader {
        vm: &args.vm,
        project: &args.project,
        network: &network,
    };
    output::print_report(&header, &analysis, args.json)
}
