// s3size: A tool for reporting the total size of an S3 bucket.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use clap::ArgMatches;
use std::future;
use std::process::ExitCode;
use tokio::signal;
use tracing::{
    debug,
    error,
    warn,
};
use tracing_subscriber::filter::{
    EnvFilter,
    LevelFilter,
};

mod cli;
mod common;
mod s3;

use common::{
    compute_total_size_until,
    ClientConfig,
    HumanSize,
};

// Set up logging to stderr, stdout is reserved for the size report.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Completes when Ctrl-C is pressed. If the handler can't be installed we
// never complete, rather than cancelling the run.
async fn interrupted() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Unable to listen for Ctrl-C: {}", e);

        future::pending::<()>().await;
    }
}

// Size the configured bucket, stopping early if we're interrupted.
async fn size_bucket(config: &ClientConfig) -> Result<u64> {
    let client = s3::Client::new(config)
        .await
        .context("unable to load SDK config")?;

    debug!(
        "Sizing '{}' in region '{}'",
        config.bucket_name,
        client.region,
    );

    compute_total_size_until(&client, &config.bucket_name, interrupted())
        .await
        .context("Failed to calculate bucket size")
}

async fn run(matches: ArgMatches) -> Result<()> {
    let config = cli::client_config(&matches)?;

    let size = size_bucket(&config).await?;

    println!("{}", size.humansize(&config.unit));

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Usage errors are printed by clap, --help and --version exit cleanly.
    let matches = match cli::parse_args() {
        Ok(matches) => matches,
        Err(e)      => {
            if let Err(print_err) = e.print() {
                error!("{}", print_err);
            }

            return ExitCode::from(cli::usage_exit_code(&e));
        },
    };

    match run(matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);

            ExitCode::FAILURE
        },
    }
}
