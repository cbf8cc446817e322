use thiserror::Error;

/// A table or column name that cannot be used as a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("invalid character {ch:?} in identifier {name:?}")]
    InvalidChar { name: String, ch: char },

    /// Table names take at most three dot-separated parts:
    /// `catalog.schema.table`.
    #[error("table name {name:?} has too many qualifier parts")]
    TooManyParts { name: String },
}

/// Column type text that does not parse as a SQL data type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed type {input:?} at offset {offset}: {message}")]
pub struct TypeSyntaxError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}
