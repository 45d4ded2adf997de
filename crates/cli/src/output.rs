use crate::error::CliError;
use model::Record;
use predicate_engine::{EngineError, SqlQuery};

pub fn print_records(records: &[&Record]) -> Result<(), CliError> {
    let rows: Vec<serde_json::Value> = records.iter().map(|r| r.to_json()).collect();
    let json = serde_json::to_string_pretty(&rows).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    println!("{} match(es)", records.len());
    Ok(())
}

pub fn print_sql(query: &SqlQuery) {
    println!("WHERE {}", query.where_clause());
    for (index, param) in query.params().iter().enumerate() {
        println!("  param {}: {}", index + 1, param);
    }
}

/// Renders a compile failure with a caret under the failing offset, where
/// the error carries one. Offsets are byte positions, so the caret column
/// is the char count of the preceding text.
pub fn print_diagnostic(predicate: &str, err: &EngineError) {
    eprintln!("error: {err}");
    if let Some(offset) = err.offset() {
        let column = predicate
            .get(..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset);
        eprintln!("  {predicate}");
        eprintln!("  {}^", " ".repeat(column));
    }
}
