use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use check_wp_status::{run_check, Args, Config, ProbeError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help prints to stdout and exits 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return usage_failure(ProbeError::from(e)),
    };
    let cfg = match Config::from_args(args) {
        Ok(cfg) => cfg,
        Err(e) => return usage_failure(e),
    };
    debug!("checking {}", cfg.url);

    match run_check(&cfg).await {
        Ok(report) => {
            info!("check finished with {}", report.severity());
            println!("{}", report);
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            info!("check aborted: {:?}", e);
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// One diagnostic line on stdout, full usage on stderr.
fn usage_failure(err: ProbeError) -> ExitCode {
    println!("{}", err);
    eprintln!("{}", Args::command().render_help());
    ExitCode::from(err.exit_code())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
