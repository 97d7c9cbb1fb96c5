mod display;
mod error;
mod parser;
mod schedule;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use display::{print_summary, write_roster_csv};
use error::Result;
use parser::{load_input, read_input, ScheduleInput};
use schedule::{default_catalog, generate_roster, load_catalog, Mass};

/// Generates the monthly minister roster from questionnaire responses.
///
/// Reads a JSON document with `users` and `responses` from stdin (or a
/// file), assigns ministers to the mass catalog and writes the roster as
/// a JSON array to stdout. On failure an error object is written instead
/// and the process exits nonzero.
#[derive(Parser)]
#[command(name = "escala-ministros", version, about)]
struct Cli {
    /// Input JSON file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Custom mass catalog JSON (defaults to the built-in parish masses)
    #[arg(long)]
    missas: Option<PathBuf>,

    /// Also export the roster as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a coverage summary to stderr
    #[arg(long)]
    summary: bool,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            let failure = serde_json::json!({
                "error": true,
                "message": err.to_string(),
                "type": err.kind(),
            });
            let rendered =
                serde_json::to_string_pretty(&failure).unwrap_or_else(|_| failure.to_string());
            println!("{}", rendered);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalog: Vec<Mass> = match &cli.missas {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let input: ScheduleInput = match &cli.input {
        Some(path) => load_input(path)?,
        None => read_input(io::stdin().lock())?,
    };
    info!(
        users = input.users.len(),
        responses = input.responses.len(),
        masses = catalog.len(),
        "input loaded"
    );

    let roster = generate_roster(&catalog, &input.users, &input.responses);
    info!(assignments = roster.len(), "roster generated");

    if cli.summary {
        print_summary(&catalog, &roster);
    }
    if let Some(path) = &cli.csv {
        write_roster_csv(path, &roster)?;
        info!(path = %path.display(), "roster exported as CSV");
    }

    let stdout = io::stdout().lock();
    if cli.compact {
        serde_json::to_writer(stdout, &roster)?;
    } else {
        serde_json::to_writer_pretty(stdout, &roster)?;
    }
    println!();

    Ok(())
}
