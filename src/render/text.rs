//! Console rendering of a dashboard report.

use std::fmt::Write;

use crate::dashboard::DashboardReport;
use crate::health::StatusCard;

const SQL_PREVIEW_CHARS: usize = 120;
const PROGRESS_WIDTH: usize = 20;

/// Render the report as plain text, listing at most `slow_query_limit` slow queries.
pub fn text(report: &DashboardReport, slow_query_limit: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "WordPress Performance  [{}]  health {}/100",
        report.overall.as_str().to_uppercase(),
        report.health_score
    );
    let _ = writeln!(
        out,
        "Report {} at {}",
        report.report_id,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push('\n');

    for card in &report.cards {
        write_card(&mut out, card);
    }

    out.push_str("\nEnvironment\n");
    for row in &report.environment {
        let _ = writeln!(out, "  {:<20} {}", row.label, row.value);
    }

    let slow = report.snapshot.slow_queries();
    if !slow.is_empty() && slow_query_limit > 0 {
        let shown = slow.len().min(slow_query_limit);
        let _ = writeln!(out, "\nSlow Queries (top {} of {})", shown, slow.len());
        for query in slow.iter().take(shown) {
            let _ = writeln!(
                out,
                "  {:>9.1}ms  {}",
                query.duration_ms(),
                sql_preview(&query.sql)
            );
            if !query.caller.is_empty() {
                let _ = writeln!(out, "              {}", query.caller);
            }
        }
    }

    if !report.recommendations.is_empty() {
        out.push_str("\nRecommendations\n");
        for rec in &report.recommendations {
            let _ = writeln!(out, "  [{}] {}", rec.priority, rec.issue);
            let _ = writeln!(out, "      {}", rec.action);
        }
    }

    out
}

fn write_card(out: &mut String, card: &StatusCard) {
    let _ = write!(
        out,
        "{:<20} {:>10}  {:<8}",
        card.title,
        card.value,
        card.status.as_str().to_uppercase()
    );
    if let Some(progress) = card.progress {
        let _ = write!(out, " {}", progress_bar(progress));
    }
    let _ = writeln!(out, "  {}", card.description);
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

/// Collapse whitespace and cut long statements.
fn sql_preview(sql: &str) -> String {
    let collapsed = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SQL_PREVIEW_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(SQL_PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}
