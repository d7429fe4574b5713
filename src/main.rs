use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use vidgrab::cli::Cli;
use vidgrab::core::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the dialogue
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    info!("Starting vidgrab v{}", env!("CARGO_PKG_VERSION"));

    match cli.run().await {
        Ok(outcome) => {
            debug!("Finished with {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}
