// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use name_abbrevs::app::{RunOutcome, run};
use name_abbrevs::config::RunConfig;
use name_abbrevs::error::AppError;
use name_abbrevs::trace::TracingSink;
use std::io;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure file logs are flushed properly
    let _guard = logging::setup_logging(&args)?;

    let config = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut stdout = io::stdout();
        RunConfig::resolve(
            args.input.clone(),
            args.surname.clone(),
            args.values.clone(),
            args.output_dir.clone(),
            &mut reader,
            &mut stdout,
        )?
    };
    tracing::debug!(?config, "Resolved run configuration");

    let outcome = run(&config, &TracingSink)?;
    if let RunOutcome::Written {
        name_count,
        unresolved,
        ..
    } = &outcome
        && !unresolved.is_empty()
    {
        tracing::warn!(
            "{} of {name_count} names have no unique abbreviation: {unresolved:?}",
            unresolved.len()
        );
    }
    println!("{}", outcome.user_message());

    Ok(())
}
