//! Flat text export of a session's logs, for download from the UI layer.
//!
//! Format: header line, blank line, an `OBSERVATIONS:` block with one
//! observation per line, then a `CHEMICAL REACTIONS:` block with one
//! equation per line.

use crate::constants::REPORT_HEADER;
use crate::session::ReactionLogEntry;

pub fn build_report(observations: &[String], reaction_log: &[ReactionLogEntry]) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push_str("\n\n");

    out.push_str("OBSERVATIONS:\n");
    for observation in observations {
        out.push_str(observation);
        out.push('\n');
    }

    out.push_str("\nCHEMICAL REACTIONS:\n");
    for entry in reaction_log {
        if let Some(equation) = &entry.equation {
            out.push_str(equation);
            out.push('\n');
        }
    }

    out
}
