use std::fmt;

use tracing::info;

use crate::types::{Evaluation, Severity, StatusRecord, Thresholds};

/// A single exceeded threshold, in the order the checks run.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    PluginUpdates { available: i64 },
    ThemeUpdates { available: i64 },
    CoreUpdate,
    UnapprovedComments { count: i64, threshold: i64 },
    ResponseTime { measured_ms: f64, threshold_ms: f64 },
    PeakMemory { used_mb: f64, threshold_mb: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PluginUpdates { available } => {
                write!(f, "Plugin updates exceed threshold (available: {})", available)
            }
            Violation::ThemeUpdates { available } => {
                write!(f, "Theme updates exceed threshold (available: {})", available)
            }
            Violation::CoreUpdate => f.write_str("Core update available"),
            Violation::UnapprovedComments { count, threshold } => {
                write!(f, "{} Unapproved comments exceed {} threshold", count, threshold)
            }
            Violation::ResponseTime { measured_ms, threshold_ms } => write!(
                f,
                "Response time ({:.2}) exceeds threshold ({:.2})",
                measured_ms, threshold_ms
            ),
            Violation::PeakMemory { used_mb, threshold_mb } => write!(
                f,
                "Memory exceeds threshold (used: {:.2} MB, threshold: {:.2} MB)",
                used_mb, threshold_mb
            ),
        }
    }
}

pub fn evaluate(record: &StatusRecord, thresholds: &Thresholds) -> Evaluation {
    let mut violations = Vec::new();

    if record.plugin_update_count > thresholds.plugin_updates {
        violations.push(Violation::PluginUpdates { available: record.plugin_update_count });
    }
    if record.theme_update_count > thresholds.theme_updates {
        violations.push(Violation::ThemeUpdates { available: record.theme_update_count });
    }
    // Core threshold is a switch, not a count.
    if record.core_update_available && thresholds.core_updates == 0 {
        violations.push(Violation::CoreUpdate);
    }
    if record.unapproved_comments > thresholds.unapproved_comments {
        violations.push(Violation::UnapprovedComments {
            count: record.unapproved_comments,
            threshold: thresholds.unapproved_comments,
        });
    }
    if record.response_time_ms > thresholds.response_time_ms {
        violations.push(Violation::ResponseTime {
            measured_ms: record.response_time_ms,
            threshold_ms: thresholds.response_time_ms,
        });
    }
    if record.peak_script_memory_mb > thresholds.peak_memory_mb {
        violations.push(Violation::PeakMemory {
            used_mb: record.peak_script_memory_mb,
            threshold_mb: thresholds.peak_memory_mb,
        });
    }

    let severity = if violations.is_empty() { Severity::Ok } else { Severity::Warning };
    info!("{} threshold violation(s), severity {}", violations.len(), severity);

    Evaluation { violations, severity }
}
