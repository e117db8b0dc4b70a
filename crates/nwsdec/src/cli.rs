use std::fmt::Display;

use chrono::{DateTime, Utc};
use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program reads one NWS text product and prints its decoded segments: affected areas, VTEC events, headlines, and forecasts.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program reads one NWS text product and prints its decoded segments: affected areas, VTEC events, headlines, and forecasts.

Products may be piped in

    curl -s https://tgftp.nws.noaa.gov/data/raw/ww/wwus72.krah.npw.rah.txt \
        | nwsdec

UGC expiration times and WMO issuance times give only a day of month. They are resolved against the --reference time, which defaults to now. When decoding archived products, set --reference to the time the product was received:

    nwsdec --file npwrah.txt --reference 2006-07-14T12:00:00Z

Segments or lines which cannot be decoded are skipped, and a warning is logged. A product which contains no UGC, or which has an invalid header, is an error.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print NOTHING, not even decoded products
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,

    /// Reference time for relative times (RFC 3339)
    ///
    /// Day-of-month times are placed in the month of the reference
    /// time, or the following month if the day has already passed.
    /// Defaults to the current time.
    #[arg(long)]
    pub reference: Option<DateTime<Utc>>,

    /// Do not synthesize headlines for short-fuse warnings
    ///
    /// Severe thunderstorm, tornado, and flood warnings carry no
    /// conventional headline. By default, one is built from the
    /// warning's "* ... WARNING FOR..." bullet.
    #[arg(long)]
    pub no_short_fuse: bool,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// Exit code for a failed decode
const EXIT_FAILURE: i32 = 1;

/// Fatal error, and the code to exit with
///
/// Usage errors and `--help` come from clap and are printed as clap
/// formats them. Everything else is reported through clap's error
/// formatter so that all messages look alike.
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Report this error on stderr and terminate the process
    pub fn exit(&self) -> ! {
        let printed = match self.error.downcast_ref::<clap::Error>() {
            Some(usage) => usage.print(),
            None => Args::command()
                .error(ErrorKind::Io, format!("{:#}", self.error))
                .print(),
        };
        drop(printed);
        std::process::exit(self.exit_code())
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> CliError {
        CliError {
            error,
            exit_code: EXIT_FAILURE,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        // --help and --version are "errors" too, but successful ones
        let exit_code = err.exit_code();
        CliError {
            error: err.into(),
            exit_code,
        }
    }
}
