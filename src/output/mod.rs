//! Output formatting for the inspection report.
//!
//! This module handles rendering the analysis:
//! - [`report`] - Plain text and JSON reports

mod report;

pub use report::{print_report, render_json, render_report, ReportHeader};
