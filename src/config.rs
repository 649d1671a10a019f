//! Constants and command-line options.

use clap::Parser;
use std::path::PathBuf;

/// Refuse gcloud responses larger than this many bytes.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

/// gcloud binary used when neither `--gcloud` nor `GCLOUD_BIN` is set.
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";

/// log4rs configuration picked up from the working directory when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// File name prefixes used by the snapshot cache.
pub const CACHE_PREFIX_INSTANCE: &str = "instance";
pub const CACHE_PREFIX_ZONES: &str = "zones";

/// Inspect Cloud DNS forwarding zones bound to a VM's VPC network.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// VM instance name
    #[arg(long)]
    pub vm: String,

    /// Project ID of the VM
    #[arg(long)]
    pub project: String,

    /// Zone (location) of the VM
    #[arg(long, visible_alias = "location")]
    pub zone: String,

    /// Extra projects to inspect for DNS zones, scanned after the VM project.
    /// A project id given more than once is scanned only at its first position.
    #[arg(long, num_args = 0..)]
    pub extra_projects: Vec<String>,

    /// Enable debug logging and print the full error chain
    #[arg(long)]
    pub debug: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// List zones of all projects concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Directory for daily snapshots of gcloud responses
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// gcloud executable
    #[arg(long, env = "GCLOUD_BIN", default_value = DEFAULT_GCLOUD_BIN)]
    pub gcloud: String,
}

impl Args {
    /// The VM project followed by the extra projects, repeats dropped.
    pub fn scan_projects(&self) -> Vec<String> {
        use itertools::Itertools;

        std::iter::once(&self.project)
            .chain(self.extra_projects.iter())
            .filter(|p| !p.is_empty())
            .unique()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::try_parse_from([
            "dns-forwarding-inspector",
            "--vm",
            "web-1",
            "--project",
            "p1",
            "--zone",
            "us-central1-a",
        ])
        .expect("Failed to parse args");
        assert_eq!(args.vm, "web-1");
        assert!(args.extra_projects.is_empty());
        assert!(!args.debug);
        assert_eq!(args.scan_projects(), vec!["p1"]);
    }

    #[test]
    fn test_scan_projects_keeps_order_and_drops_repeats() {
        let args = Args::try_parse_from([
            "dns-forwarding-inspector",
            "--vm",
            "web-1",
            "--project",
            "p1",
            "--location",
            "us-central1-a",
            "--extra-projects",
            "p3",
            "p1",
            "p2",
            "p3",
        ])
        .expect("Failed to parse args");
        assert_eq!(args.scan_projects(), vec!["p1", "p3", "p2"]);
    }

    #[test]
    fn test_extra_projects_help_mentions_repeats() {
        use clap::CommandFactory;

        let mut cmd = Args::command();
        let help = cmd.render_long_help().to_string();
        assert!(
            help.contains("first position"),
            "{help}"
        );
    }

    #[test]
    fn test_args_missing_vm_fails() {
        let result = Args::try_parse_from([
            "dns-forwarding-inspector",
            "--project",
            "p1",
            "--zone",
            "us-central1-a",
        ]);
        assert!(result.is_err(), "--vm is required");
    }
}
