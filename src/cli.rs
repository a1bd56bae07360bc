use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Name abbreviation generator
///
/// Reads a list of names (one per line) and a letter values table, then
/// writes the best unique three-letter abbreviation(s) for every name to
/// `<surname>_<input>_abbrevs.txt`.
///
/// Run without options to be prompted for the names file and surname.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Names file, one name per line. Prompted for if not provided.
    #[arg(short = 'i', long = "input", value_name = "FILE", help_heading = "Input")]
    pub input: Option<PathBuf>,

    /// Surname used in the results file name. Prompted for if not provided.
    #[arg(short = 's', long = "surname", help_heading = "Input")]
    pub surname: Option<String>,

    /// Letter values file with one `LETTER WEIGHT` pair per line.
    /// Defaults to values.txt in the current directory.
    #[arg(long = "values", value_name = "FILE", help_heading = "Input")]
    pub values: Option<PathBuf>,

    /// Directory the results file is written to. Defaults to the current directory.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", help_heading = "Output")]
    pub output_dir: Option<PathBuf>,

    /// Don't print the diagnostic trace to the terminal.
    /// A log file given with --log-file still receives it.
    #[arg(short = 'q', long = "quiet", help_heading = "Debug")]
    pub quiet: bool,

    /// Also write the diagnostic trace to this file.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<PathBuf>,
}
