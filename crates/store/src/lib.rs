pub mod collection;

use model::{FieldType, Schema};

pub use collection::{Collection, Direction, sort_records};

/// Schema of the task Item entity: the default entity the CLI and tests
/// query against.
pub fn task_schema() -> Schema {
    Schema::new()
        .with_field("itemId", FieldType::String)
        .with_field("body", FieldType::String)
        .with_field("isDone", FieldType::Boolean)
        .with_field("timestamp", FieldType::Date)
}
