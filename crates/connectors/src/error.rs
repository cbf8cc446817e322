use crate::executor::ExecutionError;
use sqlgen::error::{IdentifierError, TypeSyntaxError};
use thiserror::Error;

/// All errors surfaced by the schema-change layer.
#[derive(Debug, Error)]
pub enum SchemaChangeError {
    /// A malformed table or column name.
    #[error("invalid identifier: {0}")]
    Identifier(#[from] IdentifierError),

    /// Column type text that does not parse as a data type.
    #[error("invalid type for column {column:?}: {source}")]
    TypeSyntax {
        column: String,
        #[source]
        source: TypeSyntaxError,
    },

    /// The statement executor failed; propagated unchanged.
    #[error("execution failed: {0}")]
    Execution(#[from] ExecutionError),
}
