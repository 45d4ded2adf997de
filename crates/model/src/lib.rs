pub mod core;
pub mod error;
pub mod record;
pub mod schema;

pub use crate::core::field_type::FieldType;
pub use crate::core::value::Value;
pub use error::ValueError;
pub use record::Record;
pub use schema::Schema;
