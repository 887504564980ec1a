//! Number formatting helpers shared by log lines and reports

/// Format a whole number with `,` thousands separators (`1234567` → `1,234,567`).
pub fn format_whole(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a millisecond value with a unit that keeps it readable.
pub fn format_millis(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.2} ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.2} µs", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{:.2} ms", ms)
    } else {
        format!("{:.2} s", ms / 1_000.0)
    }
}
