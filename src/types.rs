use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::evaluator::Violation;

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub credential: String,
    pub thresholds: Thresholds,
    pub perfdata_labels: PerfdataLabels,
}

/// Warning boundaries. A measured value must be strictly greater than its
/// threshold to count as a violation, except `core_updates` which is an
/// on/off switch: zero enables the core-update check, anything else disables it.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub core_updates: i64,
    pub plugin_updates: i64,
    pub theme_updates: i64,
    pub unapproved_comments: i64,
    pub response_time_ms: f64,
    pub peak_memory_mb: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            core_updates: 0,
            plugin_updates: 0,
            theme_updates: 0,
            unapproved_comments: 0,
            response_time_ms: 1.0,
            peak_memory_mb: 12.0,
        }
    }
}

/// Which key the unapproved-comments value is published under in perfdata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerfdataLabels {
    /// `theme_update_count`, as existing dashboards expect.
    #[default]
    Legacy,
    /// `unapproved_comments`.
    Corrected,
}

/// Status document reported by the monitored site.
///
/// Absent fields and explicit `null`s both decode to the zero value, unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wp_status_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub database_access: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub plugin_update_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub theme_update_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub core_update_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub unapproved_comments: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_script_memory_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub peak_script_memory_mb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wp_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub php_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub db_query_count: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    pub fn exit_code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => f.write_str("OK"),
            Severity::Warning => f.write_str("WARNING"),
            Severity::Critical => f.write_str("CRITICAL"),
        }
    }
}

/// Outcome of the threshold checks, violations in check order.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub violations: Vec<Violation>,
    pub severity: Severity,
}

impl Evaluation {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
