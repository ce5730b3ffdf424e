use clap::Parser;

use crate::error::ProbeError;
use crate::types::{Config, PerfdataLabels, Thresholds};

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0  OK        every value is within its threshold
  1  WARNING   at least one threshold was exceeded
  2  CRITICAL  missing -H/-P, request failure, or undecodable response";

/// Monitors a WordPress installation by querying its status endpoint and
/// checking the reported metrics against warning thresholds.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "check_wp_status",
    disable_version_flag = true,
    after_help = EXIT_CODES_HELP
)]
pub struct Args {
    /// URL of the endpoint to check (required)
    #[arg(short = 'H', value_name = "URL", env = "CHECK_WP_STATUS_URL")]
    pub url: Option<String>,

    /// Value sent verbatim as the Authorization header (required)
    #[arg(
        short = 'P',
        value_name = "PASSWORD",
        env = "CHECK_WP_STATUS_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Warn if a core update is available; any non-zero value disables this check
    #[arg(short = 'Z', value_name = "VALUE", default_value_t = 0, allow_negative_numbers = true)]
    pub core_update_threshold: i64,

    /// Warn if pending plugin updates are above threshold
    #[arg(short = 'Y', value_name = "VALUE", default_value_t = 0, allow_negative_numbers = true)]
    pub plugin_update_threshold: i64,

    /// Warn if pending theme updates are above threshold
    #[arg(short = 'X', value_name = "VALUE", default_value_t = 0, allow_negative_numbers = true)]
    pub theme_update_threshold: i64,

    /// Warn if unapproved comments are above threshold
    #[arg(short = 'W', value_name = "VALUE", default_value_t = 0, allow_negative_numbers = true)]
    pub unapproved_comments_threshold: i64,

    /// Warn if response time (ms) is above threshold
    #[arg(short = 'V', value_name = "VALUE", default_value = "1.0", allow_negative_numbers = true)]
    pub response_time_threshold: f64,

    /// Warn if peak memory usage (MB) is above threshold
    #[arg(short = 'U', value_name = "VALUE", default_value = "12.0", allow_negative_numbers = true)]
    pub peak_memory_threshold: f64,

    /// Publish unapproved comments as `unapproved_comments` in perfdata instead of the legacy `theme_update_count` key
    #[arg(long)]
    pub corrected_perfdata: bool,
}

impl Config {
    /// Validates parsed arguments. URL and credential must be present and
    /// not blank; the credential is kept exactly as given.
    pub fn from_args(args: Args) -> Result<Self, ProbeError> {
        let url = args.url.filter(|v| !v.trim().is_empty());
        let credential = args.password.filter(|v| !v.trim().is_empty());

        let (url, credential) = match (url, credential) {
            (Some(url), Some(credential)) => (url, credential),
            _ => {
                return Err(ProbeError::Config(
                    "The -H (URL) and -P (password) parameters are required".to_string(),
                ))
            }
        };

        let thresholds = Thresholds {
            core_updates: args.core_update_threshold,
            plugin_updates: args.plugin_update_threshold,
            theme_updates: args.theme_update_threshold,
            unapproved_comments: args.unapproved_comments_threshold,
            response_time_ms: args.response_time_threshold,
            peak_memory_mb: args.peak_memory_threshold,
        };

        let perfdata_labels = if args.corrected_perfdata {
            PerfdataLabels::Corrected
        } else {
            PerfdataLabels::Legacy
        };

        Ok(Config {
            url: url.trim().to_string(),
            credential,
            thresholds,
            perfdata_labels,
        })
    }
}

/// Flattens a clap parse failure into the one-line diagnostic.
impl From<clap::Error> for ProbeError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        ProbeError::Config(first.trim_start_matches("error: ").trim().to_string())
    }
}
