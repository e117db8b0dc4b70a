use std::fs::File;
use std::io::{self, Read};

use anyhow::{anyhow, Context};
use chrono::Utc;
use clap::Parser;
use log::{debug, info, LevelFilter};

use nwscode::ProductParserBuilder;

mod app;
mod cli;

use cli::{Args, CliError};

fn main() {
    match nwsdec() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn nwsdec() -> Result<(), CliError> {
    let args = Args::try_parse()?;
    log_setup(&args);

    let parser = ProductParserBuilder::new()
        .with_short_fuse_headlines(!args.no_short_fuse)
        .build();

    let text = read_product(&args)?;
    debug!("read {} bytes of product text", text.len());

    let reference = args.reference.unwrap_or_else(Utc::now);
    info!("relative times are resolved against {}", reference.to_rfc3339());

    app::run(&args, &parser, &reference, &text)?;
    Ok(())
}

// Log to stderr, unless --quiet
//
// `RUST_LOG`, when set, replaces the -v filter.
fn log_setup(args: &Args) {
    if args.quiet {
        return;
    }

    let mut logger = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => logger.parse_filters(&filters),
        Err(_) => {
            let level = verbosity(args.verbose);
            logger
                .filter_module("nwscode", level)
                .filter_module("nwsdec", level)
        }
    };
    logger.init();
}

// Log level for a count of -v flags
fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Read the entire product from --file or standard input
fn read_product(args: &Args) -> Result<String, anyhow::Error> {
    let mut text = String::new();

    if args.input_is_stdin() {
        if stdin_is_terminal() {
            return Err(anyhow!(
                "no product to decode: standard input is a terminal.

Redirect a product into nwsdec, like

    nwsdec < npwrah.txt

or give its path with --file."
            ));
        }

        info!("reading product from standard input");
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("Unable to read product from standard input")?;
    } else {
        info!("reading product from \"{}\"", args.file);
        File::open(&args.file)
            .and_then(|mut file| file.read_to_string(&mut text))
            .with_context(|| format!("Unable to read product from --file \"{}\"", args.file))?;
    }

    Ok(text)
}

#[cfg(not(target_os = "windows"))]
fn stdin_is_terminal() -> bool {
    use std::os::fd::AsRawFd;
    terminal_size::terminal_size_using_fd(io::stdin().as_raw_fd()).is_some()
}

#[cfg(target_os = "windows")]
fn stdin_is_terminal() -> bool {
    use std::os::windows::io::AsRawHandle;
    terminal_size::terminal_size_using_handle(io::stdin().as_raw_handle()).is_some()
}
