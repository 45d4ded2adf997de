use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("cannot represent {found} value as {expected}")]
    Coercion { expected: String, found: String },

    #[error("field '{field}': cannot represent {found} value as {expected}")]
    FieldCoercion {
        field: String,
        expected: String,
        found: String,
    },

    #[error("expected a JSON object for a record, found {found}")]
    NotAnObject { found: String },
}
