mod cli;
mod error;
mod output;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::warn;
use ratewindow_core::{pipeline, ReqwestHttpClient};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate()?;

    for code in config.selection.unknown_codes() {
        warn!("currency '{code}' is not among the codes the source is known to publish");
    }

    output::print_arguments(&mut io::stdout().lock(), &config)?;

    let client = ReqwestHttpClient::new(config.accept_invalid_certs)?;
    let result = pipeline::run(&config, Arc::new(client)).await?;
    output::render(&mut io::stdout().lock(), &result, cli.pretty)
}
