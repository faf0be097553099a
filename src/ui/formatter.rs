//! Pure formatting functions for UI output.
//!
//! Every release step announces itself with one status line before it runs,
//! so when something fails the last line on screen names the step.

use console::style;

use crate::release::ReleaseReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a skipped step, dimmed.
pub fn display_skip(message: &str) {
    println!("{} {}", style("↷").cyan(), style(message).dim());
}

/// Summarise a finished release.
pub fn display_report(report: &ReleaseReport) {
    println!(
        "\n{} {} from '{}' onto '{}'",
        style("Released").bold(),
        style(&report.tag).green(),
        report.release_branch,
        report.dist_branch
    );
    if !report.published {
        println!("  {}", style("package was not published (dry run)").dim());
    }
    if !report.pushed {
        println!("  {}", style("nothing was pushed (dry run)").dim());
    }
}
