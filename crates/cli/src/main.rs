use crate::{commands::Commands, error::CliError};
use chrono::{DateTime, Utc};
use clap::Parser;
use model::{Record, Schema, Value};
use predicate_engine::{SqlDialect, SqlTarget};
use store::{Collection, Direction, sort_records, task_schema};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "sift", version = "0.1.0", about = "Predicate query tool for task collections")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            file,
            predicate,
            args,
            sort,
            desc,
            first,
            sql,
        } => {
            let substitutions = parse_args(&args);
            let schema = task_schema();

            if sql {
                let target = SqlTarget::new(SqlDialect::Postgres);
                let query =
                    predicate_engine::compile_for(&predicate, &schema, &substitutions, &target)?;
                output::print_sql(&query);
                return Ok(());
            }

            let filter = predicate_engine::compile(&predicate, &schema, &substitutions)?;
            let collection = load_collection(&file, &schema)?;
            debug!(records = collection.len(), "loaded task file");

            let mut matches = collection.find_all(&filter);
            if let Some(field) = sort {
                let direction = if desc {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };
                sort_records(&mut matches, &field, direction);
            }
            if first {
                matches.truncate(1);
            }
            output::print_records(&matches)?;
        }
        Commands::Ast { predicate, args } => {
            let substitutions = parse_args(&args);
            let ast = sift_syntax::parse_predicate(&predicate, &substitutions)
                .map_err(predicate_engine::EngineError::from)?;
            let json = serde_json::to_string_pretty(&ast).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
        Commands::Check { predicate, args } => {
            let substitutions = parse_args(&args);
            match predicate_engine::compile(&predicate, &task_schema(), &substitutions) {
                Ok(_) => println!("OK: predicate is valid for the task schema"),
                Err(err) => {
                    output::print_diagnostic(&predicate, &err);
                    return Err(CliError::PredicateRejected);
                }
            }
        }
    }

    Ok(())
}

/// Maps `--arg` strings onto substitution values: RFC3339 timestamps become
/// dates, `true`/`false` booleans, parseable numbers numbers, everything
/// else a string.
fn parse_args(args: &[String]) -> Vec<Value> {
    args.iter().map(|arg| parse_arg(arg)).collect()
}

fn parse_arg(arg: &str) -> Value {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(arg) {
        return Value::Timestamp(timestamp.with_timezone(&Utc));
    }
    if arg.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if arg.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if let Ok(number) = arg.parse::<f64>() {
        return Value::Number(number);
    }
    Value::String(arg.to_string())
}

fn load_collection(path: &str, schema: &Schema) -> Result<Collection, CliError> {
    let source = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&source)?;
    let rows = json.as_array().ok_or(CliError::TaskFileShape)?;

    let mut collection = Collection::new();
    for row in rows {
        collection.insert(Record::from_json(row, schema)?);
    }
    Ok(collection)
}
