//! Plain-text rendering of an aggregated report
//!
//! Formatting only: consumes the sorted detail list and produces the
//! fixed-width console table. Printing or logging the result is the
//! caller's concern.

use schema::ComponentDetail;

const RULE_WIDTH: usize = 60;

/// Render the sorted component details as a fixed-width ASCII table
///
/// Columns are Component(20) / Status(10) / Details(30) under a
/// 60-character rule line.
#[must_use]
pub fn format_table(details: &[ComponentDetail]) -> String {
    let mut table = String::new();
    table.push('\n');
    table.push_str(&format_row("Component", "Status", "Details"));
    table.push('\n');
    table.push_str(&"-".repeat(RULE_WIDTH));
    table.push('\n');

    for detail in details {
        let status = match detail.status {
            schema::Status::Up => "UP",
            schema::Status::Down => "DOWN",
        };
        table.push_str(&format_row(&detail.component, status, &detail.details));
        table.push('\n');
    }

    table
}

fn format_row(component: &str, status: &str, details: &str) -> String {
    format!("{:<20} {:<10} {:<30}", component, status, details)
}
