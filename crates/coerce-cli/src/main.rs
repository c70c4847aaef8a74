mod logging;

use clap::{Args, Parser, Subcommand};
use coerce_core::{Normalizer, Value};
use colored::Colorize;
use std::process;

/// Coerce: value normalization CLI
///
/// Normalize a JSON literal (or raw text) the way the library would.
#[derive(Parser)]
#[command(name = "coerce", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Value to normalize, as a JSON literal (e.g. 42, "42", [1,2], {"a":1})
    #[arg(allow_hyphen_values = true)]
    value: String,
    /// Treat VALUE as plain text instead of JSON
    #[arg(long)]
    raw: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize to text
    String(Input),

    /// Normalize to a whole-number integer
    Int(Input),

    /// Check that the value is stringable and echo it
    Stringable(Input),

    /// Normalize to an ordered key-value array
    Array(Input),

    /// Check that the value is iterable and echo it
    Iterable(Input),

    /// Show version information
    Version,
}

#[derive(Clone, Copy)]
enum Operation {
    String,
    Int,
    Stringable,
    Array,
    Iterable,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::String => "string",
            Operation::Int => "int",
            Operation::Stringable => "stringable",
            Operation::Array => "array",
            Operation::Iterable => "iterable",
        }
    }

    fn apply(self, normalizer: &Normalizer, value: Value) -> coerce_core::Result<Value> {
        match self {
            Operation::String => normalizer.normalize_string(value).map(Value::String),
            Operation::Int => normalizer.normalize_int(value).map(Value::Integer),
            Operation::Stringable => normalizer.normalize_stringable(value),
            Operation::Array => normalizer.normalize_array(value).map(Value::Array),
            Operation::Iterable => normalizer.normalize_iterable(value),
        }
    }
}

/// JSON report for `--json`
#[derive(serde::Serialize)]
struct Report {
    operation: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument_type: Option<&'static str>,
}

fn parse_input(input: &Input) -> Result<Value, String> {
    if input.raw {
        return Ok(Value::String(input.value.clone()));
    }
    serde_json::from_str::<serde_json::Value>(&input.value)
        .map(|json| Value::from_json(&json))
        .map_err(|e| {
            format!(
                "'{}' is not a JSON literal ({}); pass --raw to treat it as text",
                input.value, e
            )
        })
}

fn run(operation: Operation, input: &Input) -> i32 {
    let value = match parse_input(input) {
        Ok(value) => value,
        Err(msg) => {
            eprintln!("{} {}", "error:".red().bold(), msg);
            return 2;
        }
    };
    tracing::info!(
        operation = operation.name(),
        kind = value.type_name(),
        "normalizing"
    );

    let normalizer = Normalizer::new();
    let outcome = operation.apply(&normalizer, value);

    if input.json {
        let report = match &outcome {
            Ok(result) => Report {
                operation: operation.name(),
                ok: true,
                result: Some(result.to_json()),
                error: None,
                argument_type: None,
            },
            Err(err) => Report {
                operation: operation.name(),
                ok: false,
                result: None,
                error: Some(err.message().to_string()),
                argument_type: Some(err.argument().type_name()),
            },
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{} failed to encode report: {}", "error:".red().bold(), e);
                return 2;
            }
        }
        return if outcome.is_ok() { 0 } else { 1 };
    }

    match outcome {
        Ok(Value::String(text)) => {
            println!("{}", text);
            0
        }
        Ok(result) => {
            println!("{}", result.to_json());
            0
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::String(input) => run(Operation::String, &input),
        Commands::Int(input) => run(Operation::Int, &input),
        Commands::Stringable(input) => run(Operation::Stringable, &input),
        Commands::Array(input) => run(Operation::Array, &input),
        Commands::Iterable(input) => run(Operation::Iterable, &input),
        Commands::Version => {
            println!("coerce {}", env!("CARGO_PKG_VERSION"));
            0
        }
    };

    process::exit(exit_code);
}
