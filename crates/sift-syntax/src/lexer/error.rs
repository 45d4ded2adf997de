use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string literal starting at offset {start}")]
    UnterminatedString { start: usize },

    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("single '=' at offset {offset}, did you mean '=='?")]
    SingleEquals { offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. } => *offset,
            LexError::UnterminatedString { start } => *start,
            LexError::InvalidNumber { offset, .. } => *offset,
            LexError::SingleEquals { offset } => *offset,
        }
    }

    /// Format the error with the offending source and a caret under the
    /// failing offset. Offsets are in bytes, so the caret column is the
    /// number of chars preceding the offset.
    pub fn format_error(&self, source: &str) -> String {
        let offset = self.offset();
        let column = source
            .get(..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset);
        format!("{}\n{}\n{}^", self, source, " ".repeat(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_points_at_offset() {
        let err = LexError::UnexpectedChar { ch: '$', offset: 5 };
        let rendered = err.format_error("a == $");
        assert!(rendered.ends_with("a == $\n     ^"));
    }

    #[test]
    fn test_caret_column_accounts_for_multibyte_chars() {
        // '$' sits at byte 10 but char column 9
        let err = LexError::UnexpectedChar {
            ch: '$',
            offset: 10,
        };
        let rendered = err.format_error("a == 'é' $");
        assert!(rendered.ends_with("a == 'é' $\n         ^"));
    }
}
