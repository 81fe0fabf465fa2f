//! Text rendering for project reports.

use console::Style;
use projsizelib::ProjectReport;

/// Render a report in the human-readable text format.
///
/// The header names the project and the total; each file block shows the
/// relative path and its line count, with a dashed separator between
/// blocks (not after the last one). The header is bold when stdout is a
/// terminal; piped output stays plain.
pub fn render_report(report: &ProjectReport) -> String {
    let header = Style::new().bold();

    let mut out = format!(
        "{}\nlines: {}",
        header.apply_to(format!("Project: {}", report.project)),
        report.lines
    );

    if !report.files.is_empty() {
        let blocks: Vec<String> = report
            .files
            .iter()
            .map(|f| format!("File: {}\nSize: {} lines", f.path.display(), f.lines))
            .collect();

        out.push_str("\n\n");
        out.push_str(&blocks.join("\n--------\n"));
    }

    out
}
