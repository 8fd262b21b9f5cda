use std::env;
use std::io::{self, Write};
use std::process;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ndjson_filter::{fetch_object, filter_records, gunzip, ObjectUri, PredicateSet};

/// Parsed command line: the source object plus the predicate set.
#[derive(Debug, PartialEq)]
struct Args {
    input: String,
    predicates: PredicateSet,
}

/// Startup argument errors. All are fatal; a malformed value never falls
/// back to an unset condition.
#[derive(Debug, Error, PartialEq)]
enum ArgsError {
    #[error("missing required flag --input")]
    MissingInput,
    #[error("flag {0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
    #[error("invalid value {value:?} for --with-id: expected an integer")]
    InvalidId { value: String },
    #[error("invalid value {value:?} for {flag}: expected an RFC3339 timestamp")]
    InvalidTime { flag: &'static str, value: String },
}

#[tokio::main]
async fn main() {
    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv[1..]) {
        Ok(args) => args,
        Err(ArgsError::MissingInput) => {
            print_usage();
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args).await {
        report(err.as_ref());
        process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let uri = ObjectUri::parse(&args.input)?;
    let compressed = fetch_object(&uri).await?;
    let ndjson = gunzip(&compressed)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let stats = filter_records(&ndjson, &args.predicates, &mut output)?;
    output.flush()?;

    info!(
        decoded = stats.decoded,
        matched = stats.matched,
        skipped = stats.skipped,
        "filtering complete"
    );
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Args, ArgsError> {
    let mut input: Option<String> = None;
    let mut predicates = PredicateSet::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                input = Some(value_of(args, i, "--input")?);
            }
            "--with-id" => {
                let value = value_of(args, i, "--with-id")?;
                let id = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidId { value })?;
                predicates.id = Some(id);
            }
            "--from-time" => {
                let value = value_of(args, i, "--from-time")?;
                predicates.from_time = Some(parse_time("--from-time", &value)?);
            }
            "--to-time" => {
                let value = value_of(args, i, "--to-time")?;
                predicates.to_time = Some(parse_time("--to-time", &value)?);
            }
            "--with-word" => {
                predicates.word = Some(value_of(args, i, "--with-word")?);
            }
            other => return Err(ArgsError::UnknownFlag(other.to_string())),
        }
        i += 2;
    }

    let input = input.ok_or(ArgsError::MissingInput)?;
    Ok(Args { input, predicates })
}

fn value_of(args: &[String], i: usize, flag: &'static str) -> Result<String, ArgsError> {
    args.get(i + 1)
        .cloned()
        .ok_or(ArgsError::MissingValue(flag))
}

fn parse_time(flag: &'static str, value: &str) -> Result<DateTime<Utc>, ArgsError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ArgsError::InvalidTime {
            flag,
            value: value.to_string(),
        })
}

fn print_usage() {
    eprintln!("| Name | Required | Description |");
    eprintln!("| ---- | -------- | ----------- |");
    eprintln!("| `--input` | Yes | An S3 URI (`s3://{{bucket}}/{{key}}`) that refers to the source object to be filtered. |");
    eprintln!("| `--with-id` | No | An integer that contains the `id` of a JSON object to be selected. |");
    eprintln!("| `--from-time` | No | An RFC3339 timestamp that represents the earliest `time` of a JSON object to be selected. |");
    eprintln!("| `--to-time` | No | An RFC3339 timestamp that represents the latest `time` of a JSON object to be selected. |");
    eprintln!("| `--with-word` | No | A string containing a word that must be contained in `words` of a JSON object to be selected. |");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  ndjson-filter --input s3://maf-sample-data/1k.ndjson.gz --from-time 2000-01-01T00:00:00Z --to-time 2001-01-01T00:00:00Z");
}

/// Print a fatal error and its cause chain to stderr.
fn report(err: &dyn std::error::Error) {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
