//! Builds `testing.env` for the cross-chain test suite.
//!
//! ```bash
//! build-testenv Mainnet Ethereum
//! ```
//!
//! Exits with status 1 and a single stderr line on any validation or lookup
//! failure; the output file is only written after resolution fully succeeded.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use testenv_rs::{env_file, parse_selection, resolve, Result, StaticRegistry};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let selection = parse_selection(&args)?;
    let config = resolve(selection, &StaticRegistry)?;
    env_file::write(&config, Path::new(env_file::DEFAULT_ENV_PATH))?;

    tracing::info!(
        network = %selection.network,
        chain = %selection.chain,
        path = env_file::DEFAULT_ENV_PATH,
        "wrote test environment"
    );

    Ok(())
}
