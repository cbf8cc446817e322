/// Feature flags reported by a target engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineCapabilities {
    /// BEGIN/COMMIT wrapping of DML batches.
    pub transactions: bool,
    /// Schema changes that roll back with the surrounding transaction.
    pub transactional_ddl: bool,
    /// ADD and DROP actions combined in a single ALTER TABLE statement.
    pub combined_alter_actions: bool,
}

/// The class of operations a transaction would wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Ddl,
    Dml,
}
