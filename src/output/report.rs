//! Human readable and JSON reports.

use crate::error::InspectorError;
use crate::models::{AnnotatedBinding, NetworkIdentity};
use crate::processing::{Analysis, SkippedProject};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

const BANNER: &str = "================ DNS Forwarding Inspection Report ================";

/// VM context printed above the bindings.
#[derive(Serialize, Debug, Clone)]
pub struct ReportHeader<'a> {
    pub vm: &'a str,
    pub project: &'a str,
    pub network: &'a NetworkIdentity,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader<'a>,
    bindings: &'a [AnnotatedBinding],
    skipped_projects: &'a [SkippedProject],
}

/// Text report; `Display` writes the whole report.
struct TextReport<'a> {
    header: &'a ReportHeader<'a>,
    analysis: &'a Analysis,
}

/// Render the text report.
pub fn render_report(header: &ReportHeader<'_>, analysis: &Analysis) -> String {
    TextReport { header, analysis }.to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TextReport { header, analysis } = self;
        writeln!(out, "\n{BANNER}")?;
        writeln!(out, "VM: {}", header.vm)?;
        writeln!(out, "Project: {}", header.project)?;
        writeln!(out, "VPC: {}\n", header.network)?;

        for skipped in &analysis.skipped_projects {
            writeln!(
                out,
                "Warning: Failed to retrieve zones from project {}: {}",
                skipped.project, skipped.reason
            )?;
        }
        if !analysis.skipped_projects.is_empty() {
            writeln!(out)?;
        }

        if analysis.bindings.is_empty() {
            writeln!(out, "No forwarding zones found bound to this VM's VPC.")?;
            return Ok(());
        }

        for b in &analysis.bindings {
            let location = if b.is_cross_project {
                "Cross-project"
            } else {
                "Same project"
            };
            writeln!(out, "Forwarding Zone: {} ({location})", b.zone_name)?;
            writeln!(out, "   DNS Name: {}", b.dns_name)?;
            writeln!(out, "   Source Project: {}", b.source_project)?;
            writeln!(out, "   Target Project: {}", b.target_project)?;
            if let Some(direction) = b.cross_direction() {
                writeln!(out, "   Cross Binding: {direction}")?;
            }
            writeln!(out, "   VPC Bindings: {}", b.bound_network)?;
            writeln!(out, "   Target IPs: {}", b.target_ips.iter().join(", "))?;
            if b.has_multiple_targets {
                writeln!(out, "   Warning: Multiple forwarding targets detected.")?;
            }
            if b.is_duplicate_dns_name {
                writeln!(
                    out,
                    "   Warning: Duplicate DNS name across zones. This may cause resolution conflicts."
                )?;
            }
            writeln!(out, "---")?;
        }

        writeln!(
            out,
            "\nTotal forwarding zones scanned: {}",
            analysis.bindings.len()
        )?;
        writeln!(
            out,
            "\nNote: Metadata DNS may forward queries to the above targets due to these bindings."
        )
    }
}

/// Render the report as pretty JSON.
pub fn render_json(header: &ReportHeader<'_>, analysis: &Analysis) -> Result<String, InspectorError> {
    let report = JsonReport {
        header,
        bindings: &analysis.bindings,
        skipped_projects: &analysis.skipped_projects,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| InspectorError::malformed(format!("Error serializing report: {e}")))
}

/// Print the report to stdout.
pub fn print_report(
    header: &ReportHeader<'_>,
    analysis: &Analysis,
    json: bool,
) -> Result<(), InspectorError> {
    if json {
        println!("{}", render_json(header, analysis)?);
        return Ok(());
    }
    let text = render_report(header, analysis);
    for line in text.lines() {
        if line.trim_start().starts_with("Warning:") {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}
