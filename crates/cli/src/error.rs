use model::ValueError;
use predicate_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the task file: {0}")]
    TaskFileRead(#[from] std::io::Error),

    #[error("Failed to parse the task file as JSON: {0}")]
    TaskFileParse(#[from] serde_json::Error),

    #[error("Failed to load a task record: {0}")]
    RecordLoad(#[from] ValueError),

    #[error("The task file must contain a JSON array of objects")]
    TaskFileShape,

    #[error("Failed to compile the predicate: {0}")]
    Compile(#[from] EngineError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Predicate rejected")]
    PredicateRejected,
}
