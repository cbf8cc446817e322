//! Spark-family data types and the parser for column type text.

use crate::error::TypeSyntaxError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The data types understood by the Spark engine family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    String,
    Varchar(u32),
    Char(u32),
    Binary,
    Date,
    Timestamp,
    Array(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
    Struct(Vec<StructField>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub data_type: DataType,
}

impl DataType {
    /// Parses SQL type text, e.g. `DECIMAL(10,2)` or `MAP<STRING, ARRAY<INT>>`.
    ///
    /// Type names are case-insensitive and common synonyms are accepted
    /// (`INTEGER`, `LONG`, `NUMERIC`, ...).
    pub fn parse(input: &str) -> Result<Self, TypeSyntaxError> {
        let mut parser = TypeParser::new(input)?;
        let data_type = parser.parse_type()?;
        parser.expect_end()?;
        Ok(data_type)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::TinyInt => write!(f, "TINYINT"),
            DataType::SmallInt => write!(f, "SMALLINT"),
            DataType::Int => write!(f, "INT"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::Decimal {
                precision: Some(precision),
                scale: Some(scale),
            } => write!(f, "DECIMAL({precision},{scale})"),
            DataType::Decimal {
                precision: Some(precision),
                scale: None,
            } => write!(f, "DECIMAL({precision})"),
            DataType::Decimal { .. } => write!(f, "DECIMAL"),
            DataType::String => write!(f, "STRING"),
            DataType::Varchar(len) => write!(f, "VARCHAR({len})"),
            DataType::Char(len) => write!(f, "CHAR({len})"),
            DataType::Binary => write!(f, "BINARY"),
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Array(element) => write!(f, "ARRAY<{element}>"),
            DataType::Map(key, value) => write!(f, "MAP<{key},{value}>"),
            DataType::Struct(fields) => {
                write!(f, "STRUCT<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", field.name, field.data_type)?;
                }
                write!(f, ">")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Number(u32),
    LParen,
    RParen,
    Lt,
    Gt,
    Comma,
    Colon,
}

struct TypeParser<'a> {
    input: &'a str,
    tokens: Vec<(usize, Token)>,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(input: &'a str) -> Result<Self, TypeSyntaxError> {
        let tokens = tokenize(input)?;
        Ok(Self {
            input,
            tokens,
            pos: 0,
        })
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> TypeSyntaxError {
        TypeSyntaxError {
            input: self.input.to_string(),
            offset,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), TypeSyntaxError> {
        match self.next() {
            Some((_, token)) if token == expected => Ok(()),
            Some((offset, token)) => {
                Err(self.error(offset, format!("expected {expected:?}, found {token:?}")))
            }
            None => Err(self.error(self.input.len(), format!("expected {expected:?}"))),
        }
    }

    fn expect_end(&mut self) -> Result<(), TypeSyntaxError> {
        match self.next() {
            None => Ok(()),
            Some((offset, token)) => {
                Err(self.error(offset, format!("unexpected trailing {token:?}")))
            }
        }
    }

    fn expect_word(&mut self) -> Result<(usize, String), TypeSyntaxError> {
        match self.next() {
            Some((offset, Token::Word(word))) => Ok((offset, word)),
            Some((offset, token)) => Err(self.error(offset, format!("expected name, found {token:?}"))),
            None => Err(self.error(self.input.len(), "expected name")),
        }
    }

    fn expect_number(&mut self) -> Result<u32, TypeSyntaxError> {
        match self.next() {
            Some((_, Token::Number(number))) => Ok(number),
            Some((offset, token)) => {
                Err(self.error(offset, format!("expected number, found {token:?}")))
            }
            None => Err(self.error(self.input.len(), "expected number")),
        }
    }

    fn parse_type(&mut self) -> Result<DataType, TypeSyntaxError> {
        let (offset, word) = self.expect_word()?;
        match word.to_ascii_uppercase().as_str() {
            "BOOLEAN" | "BOOL" => Ok(DataType::Boolean),
            "TINYINT" | "BYTE" => Ok(DataType::TinyInt),
            "SMALLINT" | "SHORT" => Ok(DataType::SmallInt),
            "INT" | "INTEGER" => Ok(DataType::Int),
            "BIGINT" | "LONG" => Ok(DataType::BigInt),
            "FLOAT" | "REAL" => Ok(DataType::Float),
            "DOUBLE" => Ok(DataType::Double),
            "DECIMAL" | "DEC" | "NUMERIC" => self.parse_decimal(),
            "STRING" => Ok(DataType::String),
            "VARCHAR" => Ok(DataType::Varchar(self.parse_length()?)),
            "CHAR" => Ok(DataType::Char(self.parse_length()?)),
            "BINARY" => Ok(DataType::Binary),
            "DATE" => Ok(DataType::Date),
            "TIMESTAMP" => Ok(DataType::Timestamp),
            "ARRAY" => self.parse_array(),
            "MAP" => self.parse_map(),
            "STRUCT" => self.parse_struct(),
            _ => Err(self.error(offset, format!("unknown type name {word:?}"))),
        }
    }

    fn parse_decimal(&mut self) -> Result<DataType, TypeSyntaxError> {
        if self.peek() != Some(&Token::LParen) {
            return Ok(DataType::Decimal {
                precision: None,
                scale: None,
            });
        }
        self.expect(Token::LParen)?;
        let precision = self.expect_number()?;
        let scale = if self.peek() == Some(&Token::Comma) {
            self.expect(Token::Comma)?;
            Some(self.expect_number()?)
        } else {
            None
        };
        self.expect(Token::RParen)?;
        Ok(DataType::Decimal {
            precision: Some(precision),
            scale,
        })
    }

    fn parse_length(&mut self) -> Result<u32, TypeSyntaxError> {
        self.expect(Token::LParen)?;
        let length = self.expect_number()?;
        self.expect(Token::RParen)?;
        Ok(length)
    }

    fn parse_array(&mut self) -> Result<DataType, TypeSyntaxError> {
        self.expect(Token::Lt)?;
        let element = self.parse_type()?;
        self.expect(Token::Gt)?;
        Ok(DataType::Array(Box::new(element)))
    }

    fn parse_map(&mut self) -> Result<DataType, TypeSyntaxError> {
        self.expect(Token::Lt)?;
        let key = self.parse_type()?;
        self.expect(Token::Comma)?;
        let value = self.parse_type()?;
        self.expect(Token::Gt)?;
        Ok(DataType::Map(Box::new(key), Box::new(value)))
    }

    fn parse_struct(&mut self) -> Result<DataType, TypeSyntaxError> {
        self.expect(Token::Lt)?;
        let mut fields = Vec::new();
        loop {
            let (_, name) = self.expect_word()?;
            self.expect(Token::Colon)?;
            let data_type = self.parse_type()?;
            fields.push(StructField { name, data_type });
            match self.next() {
                Some((_, Token::Comma)) => continue,
                Some((_, Token::Gt)) => break,
                Some((offset, token)) => {
                    return Err(self.error(offset, format!("expected ',' or '>', found {token:?}")));
                }
                None => return Err(self.error(self.input.len(), "unterminated STRUCT")),
            }
        }
        Ok(DataType::Struct(fields))
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, TypeSyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '<' => Token::Lt,
            '>' => Token::Gt,
            ',' => Token::Comma,
            ':' => Token::Colon,
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() => {
                let mut number = c.to_digit(10).unwrap_or(0);
                while let Some((_, digit)) = chars.next_if(|(_, c)| c.is_ascii_digit()) {
                    number = number
                        .saturating_mul(10)
                        .saturating_add(digit.to_digit(10).unwrap_or(0));
                }
                Token::Number(number)
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut word = c.to_string();
                while let Some((_, next)) =
                    chars.next_if(|(_, c)| c.is_alphanumeric() || *c == '_')
                {
                    word.push(next);
                }
                Token::Word(word)
            }
            c => {
                return Err(TypeSyntaxError {
                    input: input.to_string(),
                    offset,
                    message: format!("unexpected character {c:?}"),
                });
            }
        };
        tokens.push((offset, token));
    }
    Ok(tokens)
}
