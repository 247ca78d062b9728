use clap::{ArgAction, Parser, ValueEnum};
use maze_records::{
    MazeParseError, parse_character, parse_country, parse_episode, parse_network, parse_person,
    parse_season, parse_updates, parse_web_channel,
};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Parse raw TVMaze JSON records into normalized records.
#[derive(Debug, Parser)]
#[command(name = "maze-records", version, about)]
struct Cli {
    /// Kind of record contained in the input
    #[arg(value_enum)]
    kind: RecordKind,

    /// JSON input file, either one record or an array of records (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RecordKind {
    Country,
    Network,
    WebChannel,
    Person,
    Character,
    Episode,
    Season,
    Updates,
}

/// Errors that end a CLI run
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to parse record: {0}")]
    Parse(#[from] MazeParseError),

    #[error("Input is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to serialize output: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    #[error("None of the {0} record(s) could be parsed")]
    NothingParsed(usize),
}

/// Initializes stderr logging; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,maze_records={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<Value, CliError> {
    let content = match file {
        None => read_stdin()?,
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => fs::read_to_string(path).map_err(|e| CliError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?,
    };

    serde_json::from_str(&content).map_err(CliError::InvalidJson)
}

fn read_stdin() -> Result<String, CliError> {
    io::read_to_string(io::stdin()).map_err(|e| CliError::ReadFailed {
        path: PathBuf::from("<stdin>"),
        source: e,
    })
}

fn to_json<T: Serialize>(parsed: Result<T, MazeParseError>) -> Result<Value, CliError> {
    serde_json::to_value(parsed?).map_err(CliError::SerializationFailed)
}

/// Parses a single record of the given kind into its normalized JSON form.
fn parse_record(kind: RecordKind, record: &Value) -> Result<Value, CliError> {
    match kind {
        RecordKind::Country => to_json(parse_country(Some(record))),
        RecordKind::Network => to_json(parse_network(record)),
        RecordKind::WebChannel => to_json(parse_web_channel(record)),
        RecordKind::Person => to_json(parse_person(record)),
        RecordKind::Character => to_json(parse_character(record)),
        RecordKind::Episode => to_json(parse_episode(record)),
        RecordKind::Season => to_json(parse_season(record)),
        RecordKind::Updates => to_json(parse_updates(record)),
    }
}

/// Parses every record of an array input, skipping malformed ones.
///
/// A single (non-array) record is parsed as is and its failure is returned.
fn process_records(kind: RecordKind, input: &Value) -> Result<Value, CliError> {
    let Value::Array(records) = input else {
        return parse_record(kind, input);
    };

    let mut parsed = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match parse_record(kind, record) {
            Ok(value) => parsed.push(value),
            Err(CliError::Parse(e)) => warn!(index, error = %e, "Skipping malformed record"),
            Err(e) => return Err(e),
        }
    }
    debug!("Parsed {} of {} record(s)", parsed.len(), records.len());

    if parsed.is_empty() && !records.is_empty() {
        return Err(CliError::NothingParsed(records.len()));
    }

    Ok(Value::Array(parsed))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.file.as_deref())?;
    let output = process_records(cli.kind, &input)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(CliError::SerializationFailed)?;

    println!("{}", rendered);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
