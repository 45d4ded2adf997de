use crate::lexer::{
    error::LexError,
    token::{Token, TokenKind},
};
use tracing::warn;

pub mod error;
pub mod token;


/// Hand-written scanner over the predicate grammar. One Lexer per input;
/// restarting means constructing a new one.
pub struct Lexer {
    input: Vec<char>,
    // Byte offset of each char, with the total length as a final entry so
    // the end-of-input position maps to a valid offset too.
    byte_offsets: Vec<usize>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let byte_offsets: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            byte_offsets,
            position: 0,
            current_char,
        }
    }

    /// Byte offset of the current scan position in the original input.
    fn offset(&self) -> usize {
        self.byte_offsets[self.position]
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let offset = self.offset();
        let Some(ch) = self.current_char else {
            return Ok(Token::new(TokenKind::Eof, "", offset));
        };

        match ch {
            '(' => Ok(self.single(TokenKind::LeftParen, '(')),
            ')' => Ok(self.single(TokenKind::RightParen, ')')),
            '\'' => self.read_string(),
            '%' => self.read_placeholder(),
            '=' => {
                if self.peek(1) == Some('=') {
                    Ok(self.double(TokenKind::Equal, "=="))
                } else {
                    Err(LexError::SingleEquals { offset })
                }
            }
            '!' => {
                if self.peek(1) == Some('=') {
                    Ok(self.double(TokenKind::NotEqual, "!="))
                } else {
                    Err(LexError::UnexpectedChar { ch, offset })
                }
            }
            // Two-character forms before single-character ones
            '>' => {
                if self.peek(1) == Some('=') {
                    Ok(self.double(TokenKind::GreaterOrEqual, ">="))
                } else {
                    Ok(self.single(TokenKind::GreaterThan, '>'))
                }
            }
            '<' => {
                if self.peek(1) == Some('=') {
                    Ok(self.double(TokenKind::LessOrEqual, "<="))
                } else {
                    Ok(self.single(TokenKind::LessThan, '<'))
                }
            }
            '&' => {
                if self.peek(1) == Some('&') {
                    Ok(self.double(TokenKind::And, "&&"))
                } else {
                    Err(LexError::UnexpectedChar { ch, offset })
                }
            }
            '|' => {
                if self.peek(1) == Some('|') {
                    Ok(self.double(TokenKind::Or, "||"))
                } else {
                    Err(LexError::UnexpectedChar { ch, offset })
                }
            }
            c if c.is_ascii_digit() => self.read_number(),
            '-' | '+' if self.peek(1).is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.read_identifier()),
            _ => Err(LexError::UnexpectedChar { ch, offset }),
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let offset = self.offset();
        self.advance();
        Token::new(kind, ch.to_string(), offset)
    }

    fn double(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let offset = self.offset();
        self.advance();
        self.advance();
        Token::new(kind, lexeme, offset)
    }

    fn read_placeholder(&mut self) -> Result<Token, LexError> {
        let offset = self.offset();
        if self.peek(1) == Some('@') {
            Ok(self.double(TokenKind::Placeholder, "%@"))
        } else {
            Err(LexError::UnexpectedChar { ch: '%', offset })
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.offset();
        self.advance(); // opening quote

        let mut content = String::new();
        while let Some(ch) = self.current_char {
            if ch == '\'' {
                self.advance(); // closing quote
                let lexeme = format!("'{}'", content);
                return Ok(Token::new(TokenKind::String(content), lexeme, start));
            }
            // No escape handling: everything between the quotes passes through.
            content.push(ch);
            self.advance();
        }

        Err(LexError::UnterminatedString { start })
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let offset = self.offset();
        let mut text = String::new();

        if let Some(sign @ ('-' | '+')) = self.current_char {
            text.push(sign);
            self.advance();
        }
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() || ch == '.' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match text.parse::<f64>() {
            Ok(n) => Ok(Token::new(TokenKind::Number(n), text, offset)),
            Err(_) => Err(LexError::InvalidNumber { text, offset }),
        }
    }

    fn read_identifier(&mut self) -> Token {
        let offset = self.offset();
        let mut text = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Keywords and boolean literals are case-insensitive; anything else
        // stays an identifier.
        let kind = match text.to_ascii_lowercase().as_str() {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "true" | "false" => {
                let value = text.eq_ignore_ascii_case("true");
                if text != "true" && text != "false" {
                    warn!(
                        spelling = %text,
                        "capitalized boolean spelling is deprecated, use '{}'",
                        value
                    );
                }
                TokenKind::Boolean(value)
            }
            _ => TokenKind::Identifier(text.clone()),
        };

        Token::new(kind, text, offset)
    }
}
