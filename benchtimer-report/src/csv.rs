//! CSV Output

use crate::report::Report;

/// Generate a CSV report, one line per entry.
pub fn generate_csv_report(report: &Report) -> String {
    let mut csv = String::from("name,parameter,runs,warmup_runs,mean_ms\n");
    for entry in &report.entries {
        csv.push_str(&format!(
            "{},{},{},{},{:.6}\n",
            escape(&entry.name),
            entry.parameter,
            entry.runs,
            entry.warmup_runs,
            entry.mean_ms
        ));
    }
    csv
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
