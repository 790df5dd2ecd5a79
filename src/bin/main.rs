use clap::Parser;
use lox_scan::lox::{ExitStatus, Lox, RunError};
use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lox-scan", about = "Prints the tokens of a Lox script")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(ExitStatus::Usage.code());
        },
        Err(e) => e.exit(),
    };

    init_logging(log_level(cli.verbose, cli.quiet));

    let status = match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            let _ = writeln!(io::stderr(), "{}", e);
            e.exit_status()
        },
    };
    process::exit(status.code());
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitStatus, RunError> {
    let mut lox = Lox::new(io::stdout(), io::stderr());
    match &cli.script {
        Some(path) => lox.run_file(path),
        None => {
            let stdin = io::stdin();
            lox.run_prompt(stdin.lock())?;
            Ok(ExitStatus::Success)
        },
    }
}
