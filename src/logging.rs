use crate::cli::Args;
use name_abbrevs::constants::DEFAULT_LOG_DIRECTIVE;
use name_abbrevs::error::AppError;
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn build_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging configuration for the application.
///
/// - Console: the diagnostic trace goes to stderr unless `--quiet` is set,
///   keeping stdout free for prompts and the final message
/// - File: with `--log-file`, the trace is also appended to that file
///   through a non-blocking writer
/// - Filters combine `RUST_LOG` with the `name_abbrevs=debug` directive
///
/// Returns the guard for the file writer, which must be kept alive for the
/// duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args) -> Result<Option<WorkerGuard>, AppError> {
    let console_layer = if args.quiet {
        None
    } else {
        Some(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .with_filter(build_filter()?),
        )
    };

    let (file_layer, guard) = match &args.log_file {
        Some(log_file) => {
            let path = Path::new(log_file);
            let log_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path.file_name().ok_or_else(|| {
                AppError::log_setup_error(format!(
                    "Log file path '{}' has no file name",
                    path.display()
                ))
            })?;

            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    AppError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = tracing_appender::rolling::never(log_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(build_filter()?);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    Ok(guard)
}
