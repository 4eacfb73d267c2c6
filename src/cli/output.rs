//! Human-readable run summary

use crate::processor::ProcessOutcome;

/// Warnings block (if any) followed by the processed-count line
pub fn format_summary(outcome: &ProcessOutcome) -> String {
    let mut out = String::new();

    if !outcome.warnings.is_empty() {
        out.push_str("Errors and Warnings:\n");
        for message in &outcome.warnings {
            out.push_str(message);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "Processed {} script(s) to {}",
        outcome.processed_count,
        outcome.output_path.display()
    ));
    out
}
