use crate::{ast::literal::Literal, errors::SubstitutionError};
use model::Value;

/// Positional cursor over the caller's substitution values. Each `%@` the
/// parser consumes pulls the next entry, strictly in textual occurrence
/// order. Leftover values are not an error; running out is.
pub struct SubstitutionCursor<'a> {
    values: &'a [Value],
    next: usize,
}

impl<'a> SubstitutionCursor<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values, next: 0 }
    }

    pub fn resolve(&mut self) -> Result<Literal, SubstitutionError> {
        let index = self.next;
        let value = self
            .values
            .get(index)
            .ok_or(SubstitutionError::Exhausted { index })?;
        self.next += 1;

        match value {
            Value::String(s) => Ok(Literal::String(s.clone())),
            Value::Number(n) => Ok(Literal::Number(*n)),
            Value::Boolean(b) => Ok(Literal::Boolean(*b)),
            Value::Timestamp(t) => Ok(Literal::Date(*t)),
            Value::Null => Err(SubstitutionError::Unrepresentable {
                index,
                kind: "null".to_string(),
            }),
        }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}
