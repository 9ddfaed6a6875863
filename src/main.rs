//! Consult terminal entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use bubbletea_rs::Program;
use consult::tui::{ConsultApp, set_startup_context};
use consult::{ConsultConfig, ConsultError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ConsultError> {
    let config = ConsultConfig::load_layered()?;

    if let Some(path) = config.log_file_path() {
        consult::logging::init_file_logging(path)?;
    }

    let context = config.startup_context()?;
    tracing::info!(
        professionals = context.directory.len(),
        route = ?context.start_route,
        "starting consult TUI"
    );

    // Model::init() reads this back. A second call in the same process keeps
    // the first context.
    let _ = set_startup_context(context);

    run_tui().await.map_err(|error| ConsultError::Tui {
        message: error.to_string(),
    })?;

    io::stdout().flush().ok();
    Ok(())
}

/// Runs the bubbletea-rs program with the `ConsultApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ConsultApp>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
