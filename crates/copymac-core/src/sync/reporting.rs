//! Sync operation reporting and statistics

use std::fmt::Write;

use super::SyncResult;
use crate::config::SyncDirection;

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(direction: SyncDirection, result: &SyncResult) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n=== {direction} summary ===");
        let _ = writeln!(output, "Written:   {}", result.converted);
        let _ = writeln!(output, "Unchanged: {}", result.unchanged);
        let _ = writeln!(output, "Deleted:   {}", result.deleted);
        if direction.tags_destination() {
            let _ = writeln!(output, "Tagged:    {}", result.tagged);
        }

        // Show skipped count with reasons breakdown
        let _ = write!(output, "Skipped:   {}", result.skipped);
        if result.skipped > 0 && !result.skip_reasons.is_empty() {
            let mut reasons: Vec<_> = result.skip_reasons.iter().collect();
            reasons.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (reason, count) in reasons {
                let _ = write!(output, " ({reason}: {count})");
            }
        }
        let _ = writeln!(output);

        let _ = writeln!(output, "\nTotal operations: {}", result.total_operations());
        output
    }
}
