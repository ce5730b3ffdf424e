use std::fmt;

use crate::types::{Evaluation, PerfdataLabels, Severity, StatusRecord};

/// The single result line handed back to the monitoring scheduler.
#[derive(Debug)]
pub struct CheckReport {
    pub evaluation: Evaluation,
    pub perfdata: PerfData,
}

impl CheckReport {
    pub fn new(evaluation: Evaluation, record: &StatusRecord, labels: PerfdataLabels) -> Self {
        Self {
            evaluation,
            perfdata: PerfData::from_record(record, labels),
        }
    }

    pub fn severity(&self) -> Severity {
        self.evaluation.severity
    }

    pub fn exit_code(&self) -> u8 {
        self.severity().exit_code()
    }

    /// Violation messages, each followed by a single space.
    pub fn message(&self) -> String {
        self.evaluation
            .violations
            .iter()
            .map(|v| format!("{} ", v))
            .collect()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}| {}", self.severity(), self.message(), self.perfdata)
    }
}

/// Ordered `key=value` pairs appended after the `|` separator.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    pub entries: Vec<(&'static str, String)>,
}

impl PerfData {
    pub fn from_record(record: &StatusRecord, labels: PerfdataLabels) -> Self {
        let comments_key = match labels {
            PerfdataLabels::Legacy => "theme_update_count",
            PerfdataLabels::Corrected => "unapproved_comments",
        };

        let entries = vec![
            ("plugin_update_count", record.plugin_update_count.to_string()),
            ("theme_update_count", record.theme_update_count.to_string()),
            ("core_update_available", record.core_update_available.to_string()),
            (comments_key, record.unapproved_comments.to_string()),
            ("response_time_ms", format!("{:.6}", record.response_time_ms)),
            ("peak_script_memory_mb", format!("{:.6}", record.peak_script_memory_mb)),
            ("wp_version", record.wp_version.clone()),
            ("php_version", record.php_version.clone()),
            ("db_query_count", record.db_query_count.to_string()),
        ];

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
