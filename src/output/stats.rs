//! Upload statistics reporting.

use console::style;

use crate::upload::UploadSummary;

/// Print totals for an upload run.
pub fn print_upload_summary(summary: &UploadSummary) {
    println!();
    println!("{}", style("Upload summary:").bold());
    println!("  Uploaded:        {}", style(summary.uploaded).green());
    println!("  Already present: {}", summary.already_present);
    if summary.deleted > 0 {
        println!("  Deleted locally: {}", summary.deleted);
    }
    if !summary.delete_failed.is_empty() {
        println!(
            "  Not deleted:     {}",
            style(summary.delete_failed.len()).yellow()
        );
        for (path, reason) in &summary.delete_failed {
            println!("    {}: {}", path.display(), reason);
        }
    }
    if !summary.failed.is_empty() {
        println!("  Failed:          {}", style(summary.failed.len()).red());
        for (path, reason) in &summary.failed {
            println!("    {}: {}", path.display(), reason);
        }
    }
}
