use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use wise_rates::{ApiClient, Cli, Config, Session, cli};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = match args.verbose {
        false => "warn",
        true => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{config:?}");
    let client = ApiClient::new(config);

    let stdout = io::stdout();
    let result = match &args.command {
        Some(command) => cli::run(command, &client, &mut stdout.lock()),
        None => Session::new(&client, io::stdin().lock(), stdout.lock()).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
