use async_trait::async_trait;
use sqlgen::ast::Statement;
use thiserror::Error;

/// A failure reported by a statement executor, passed through opaquely.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The engine rejected or failed the statement.
    #[error("engine error: {0}")]
    Engine(String),

    /// Low-level I/O failure while talking to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs structured statements against a live engine connection.
///
/// Implementations own rendering (via `sqlgen::render`), connection
/// management, and any retry policy; statements submitted sequentially from
/// one caller are executed in order.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<(), ExecutionError>;
}
