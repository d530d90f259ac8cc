//! jscan: Tokenize a JavaScript-like source file and report variable usage.
//!
//! Usage:
//!   jscan [options] <file>
//!
//! Prints one line per token and warning to standard output and writes a
//! JSON summary to `stats.json` (or the path given with `--stats`).

use clap::{CommandFactory, Parser as ClapParser};
use jscan_driver::{Session, TraceSink};
use jscan_options::{parse_options_file, ScanOptions};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(ClapParser, Debug)]
#[command(name = "jscan", about = "jscan - A tokenizer and variable usage checker for JavaScript", version)]
struct Cli {
    /// Source file to scan.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Where to write the JSON report [default: stats.json].
    #[arg(long, value_name = "PATH")]
    stats: Option<String>,

    /// Read options from a JSON file; flags override it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Warn about statements that look like they are missing a semicolon.
    #[arg(long = "check-semicolons")]
    check_semicolons: bool,

    /// Clip token text to at most N characters.
    #[arg(long = "max-token-length", value_name = "N")]
    max_token_length: Option<usize>,

    /// Do not print tokens; warnings are still printed.
    #[arg(short, long)]
    quiet: bool,

    /// Log scanner activity to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(file) = cli.file.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    install_error_hook();
    init_tracing(cli.verbose);

    match run(&cli, file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, file: &Path) -> Result<()> {
    let options = resolve_options(cli)?;
    debug!(?options, "resolved options");

    let session = Session::load(file, options).into_diagnostic()?;

    let stdout = io::stdout().lock();
    let mut sink = TraceSink::new(BufWriter::new(stdout)).with_tokens(session.options().trace);
    let result = session.run(&mut sink);
    sink.finish()
        .into_diagnostic()
        .wrap_err("cannot write to standard output")?;
    result.into_diagnostic()?;
    Ok(())
}

/// Configuration file first, then command-line flags on top.
fn resolve_options(cli: &Cli) -> Result<ScanOptions> {
    let mut options = match &cli.config {
        Some(path) => parse_options_file(path).into_diagnostic()?,
        None => ScanOptions::default(),
    };
    if cli.check_semicolons {
        options.check_semicolons = true;
    }
    if let Some(max) = cli.max_token_length {
        options.max_token_length = Some(max);
    }
    if let Some(stats) = &cli.stats {
        options.stats_path = Some(stats.clone());
    }
    if cli.quiet {
        options.trace = false;
    }
    Ok(options)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if asked for
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("jscan=debug"),
        Err(_) => return,
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn install_error_hook() {
    let terminal = stderr_is_terminal();
    let installed = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(terminal)
                .unicode(terminal)
                .build(),
        )
    }));
    if installed.is_err() {
        debug!("error hook already installed");
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
