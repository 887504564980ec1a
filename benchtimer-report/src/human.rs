//! Human-readable output
//!
//! One row per parameter, one column per benchmark name.

use crate::report::Report;
use benchtimer_core::format_millis;

const PARAM_WIDTH: usize = 10;

/// Format a report as a terminal table
pub fn format_human_output(report: &Report) -> String {
    let names = report.names();
    let width = names
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(0)
        .max(12)
        + 2;

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format!(
        "BenchTimer Results ({} runs per measurement)\n",
        report.meta.config.runs
    ));
    let rule_len = PARAM_WIDTH + width * names.len();
    output.push_str(&"=".repeat(rule_len.max(40)));
    output.push('\n');

    output.push_str(&format!("{:<PARAM_WIDTH$}", "n"));
    for name in &names {
        output.push_str(&format!("{:>width$}", name));
    }
    output.push('\n');
    output.push_str(&"-".repeat(rule_len.max(40)));
    output.push('\n');

    for parameter in report.parameters() {
        output.push_str(&format!("{:<PARAM_WIDTH$}", parameter));
        for name in &names {
            let cell = report
                .entry(name, parameter)
                .map(|e| format_millis(e.mean_ms))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!("{:>width$}", cell));
        }
        output.push('\n');
    }

    output
}
