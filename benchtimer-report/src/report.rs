//! Report Data Structures

use benchtimer_core::Measurement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version of the JSON report layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema, version and run settings
    pub meta: ReportMeta,
    /// Measurements in the order they were taken
    pub entries: Vec<ReportEntry>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report layout version, see [`SCHEMA_VERSION`]
    pub schema_version: u32,
    /// benchtimer version that produced the report
    pub version: String,
    /// When the report was started
    pub timestamp: DateTime<Utc>,
    /// Settings the sweep ran with
    pub config: ReportConfig,
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Measured runs per benchmark
    pub runs: u32,
    /// RNG seed, if inputs were reproducible
    pub seed: Option<u64>,
}

/// One measured benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Benchmark name (column in the human table)
    pub name: String,
    /// Scaling parameter, e.g. input size (row in the human table)
    pub parameter: u64,
    /// Measured iterations averaged into `mean_ms`
    pub runs: u32,
    /// Untimed warmup iterations run first
    pub warmup_runs: u32,
    /// Average work-step time in milliseconds
    pub mean_ms: f64,
}

impl ReportEntry {
    /// Build an entry from a measurement taken at `parameter`
    pub fn from_measurement(name: impl Into<String>, parameter: u64, m: &Measurement) -> Self {
        Self {
            name: name.into(),
            parameter,
            runs: m.runs,
            warmup_runs: m.warmup_runs,
            mean_ms: m.mean_millis(),
        }
    }
}

impl Report {
    /// Start an empty report stamped with the current time
    pub fn new(config: ReportConfig) -> Self {
        Self {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now(),
                config,
            },
            entries: Vec::new(),
        }
    }

    /// Distinct benchmark names in first-seen order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.name.as_str()) {
                names.push(&entry.name);
            }
        }
        names
    }

    /// Distinct parameters in ascending order
    pub fn parameters(&self) -> Vec<u64> {
        let mut params: Vec<u64> = self.entries.iter().map(|e| e.parameter).collect();
        params.sort_unstable();
        params.dedup();
        params
    }

    /// Look up the entry for a name/parameter pair
    pub fn entry(&self, name: &str, parameter: u64) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.parameter == parameter)
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> Report {
    let mut report = Report::new(ReportConfig {
        runs: 10,
        seed: Some(7),
    });
    for (name, parameter, mean_ms) in [
        ("random", 50, 0.5),
        ("ordered", 50, 0.01),
        ("random", 100, 2.0),
        ("ordered", 100, 0.02),
    ] {
        report.entries.push(ReportEntry {
            name: name.to_string(),
            parameter,
            runs: 10,
            warmup_runs: 2,
            mean_ms,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_measurement() {
        let m = Measurement {
            description: "Sorting random".into(),
            runs: 4,
            warmup_runs: 2,
            total: Duration::from_millis(8),
        };
        let entry = ReportEntry::from_measurement("random", 50, &m);
        assert_eq!(entry.name, "random");
        assert_eq!(entry.parameter, 50);
        assert_eq!(entry.runs, 4);
        assert_eq!(entry.warmup_runs, 2);
        assert!((entry.mean_ms - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_names_and_parameters() {
        let report = sample_report();
        assert_eq!(report.names(), vec!["random", "ordered"]);
        assert_eq!(report.parameters(), vec![50, 100]);
        assert_eq!(report.entry("ordered", 100).map(|e| e.mean_ms), Some(0.02));
        assert!(report.entry("reverse", 50).is_none());
    }
}
