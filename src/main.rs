use catan_rolls::log_source::{self, InputFormat};
use catan_rolls::logging::init_logging;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Prints a streak table for every dice sum in a game log
#[derive(Parser, Debug)]
#[command(name = "catan_rolls")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game log to replay (reads stdin when omitted)
    log: Option<PathBuf>,

    /// How the log is stored
    #[arg(short, long, value_enum, default_value = "text")]
    input: InputFormat,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Emit log events as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One row per sum
    Text,
    /// Tracks and blocked counts as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_json);

    let source = log_source::open(args.log.as_deref())?;
    let tracker = log_source::replay(source, args.input)?;

    match args.format {
        OutputFormat::Text => print!("{}", tracker.build_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tracker.to_json())?),
    }
    Ok(())
}
