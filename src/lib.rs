// Public modules
pub mod types;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod decoder;
pub mod evaluator;
pub mod report;

// Re-export commonly used items
pub use types::*;
pub use config::Args;
pub use error::ProbeError;
pub use fetcher::StatusFetcher;
pub use decoder::decode_status;
pub use evaluator::{evaluate, Violation};
pub use report::{CheckReport, PerfData};

/// Runs one check: fetch, decode, evaluate, format. Stops at the first failure.
pub async fn run_check(config: &Config) -> Result<CheckReport, ProbeError> {
    let fetcher = StatusFetcher::new()?;
    let body = fetcher.fetch(&config.url, &config.credential).await?;
    // Release pooled connections before evaluating.
    drop(fetcher);

    let record = decode_status(&body)?;
    let evaluation = evaluate(&record, &config.thresholds);

    Ok(CheckReport::new(evaluation, &record, config.perfdata_labels))
}
