use crate::{
    capabilities::{EngineCapabilities, TransactionType},
    error::SchemaChangeError,
    executor::StatementExecutor,
};
use indexmap::IndexMap;
use sqlgen::{
    ast::{
        Statement,
        common::{Ident, TableRef},
        create_table::{ColumnDef, TableProperties, TableProperty},
    },
    build::{
        alter_table::{AddColumnsBuilder, DropColumnsBuilder},
        create_table::CreateTableBuilder,
    },
    types::DataType,
};
use std::sync::Arc;
use tracing::debug;

/// Schema-change adapter for the Spark engine family (Spark SQL, Hive,
/// Databricks).
///
/// Turns abstract change descriptions into structured DDL statements and
/// submits them to the executor. The adapter itself holds no connection
/// state; it is safe to share across tasks when the executor is.
pub struct SparkAdapter {
    executor: Arc<dyn StatementExecutor>,
}

impl SparkAdapter {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    /// Applies a set of column additions and drops to a table.
    ///
    /// Additions and drops are always emitted as two independent
    /// statements: type information is required for additions but
    /// forbidden for drops, and combined ADD/DROP action lists are not
    /// supported everywhere in the engine family. Additions are submitted
    /// first. All inputs are validated before the first submit, so a
    /// malformed name or type means nothing reaches the executor.
    ///
    /// The engine family has no transactional DDL; if the executor fails
    /// on the addition statement, the drop statement is never attempted
    /// and the table is left partially altered. Callers recover by
    /// retrying the whole alteration.
    pub async fn alter_table(
        &self,
        table_name: &str,
        added_columns: &IndexMap<String, String>,
        dropped_columns: &[String],
    ) -> Result<(), SchemaChangeError> {
        if added_columns.is_empty() && dropped_columns.is_empty() {
            return Ok(());
        }
        let table = TableRef::parse(table_name)?;

        let mut added = Vec::with_capacity(added_columns.len());
        for (column_name, type_text) in added_columns {
            added.push(parse_column(column_name, type_text)?);
        }
        let mut dropped = Vec::with_capacity(dropped_columns.len());
        for column_name in dropped_columns {
            dropped.push(Ident::new(column_name.as_str())?);
        }

        if !added.is_empty() {
            let mut builder = AddColumnsBuilder::new(table.clone());
            for column in added {
                builder = builder.column_def(column);
            }
            debug!(table = table_name, columns = added_columns.len(), "adding columns");
            self.executor
                .execute(&Statement::AlterTable(builder.build()))
                .await?;
        }

        if !dropped.is_empty() {
            let mut builder = DropColumnsBuilder::new(table);
            for column in dropped {
                builder = builder.column(column);
            }
            debug!(table = table_name, columns = dropped_columns.len(), "dropping columns");
            self.executor
                .execute(&Statement::AlterTable(builder.build()))
                .await?;
        }

        Ok(())
    }

    /// Builds the properties node for a CREATE TABLE statement.
    ///
    /// One sub-property per non-empty input; both empty yields a node with
    /// an empty property list, never an absent node. The format token is
    /// forwarded opaquely and partition column order is preserved.
    pub fn build_table_properties(
        &self,
        storage_format: Option<&str>,
        partitioned_by: Option<&[String]>,
    ) -> Result<TableProperties, SchemaChangeError> {
        let mut properties = TableProperties::default();

        if let Some(format) = storage_format.filter(|f| !f.is_empty()) {
            properties
                .properties
                .push(TableProperty::StorageFormat(format.to_string()));
        }

        if let Some(columns) = partitioned_by.filter(|c| !c.is_empty()) {
            let columns = columns
                .iter()
                .map(|name| Ident::new(name.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            properties
                .properties
                .push(TableProperty::PartitionedBy(columns));
        }

        Ok(properties)
    }

    /// Creates a table from name→type column text plus creation options,
    /// submitting a single CREATE TABLE statement.
    pub async fn create_table(
        &self,
        table_name: &str,
        columns: &IndexMap<String, String>,
        storage_format: Option<&str>,
        partitioned_by: Option<&[String]>,
        if_not_exists: bool,
    ) -> Result<(), SchemaChangeError> {
        let table = TableRef::parse(table_name)?;
        let mut builder = CreateTableBuilder::new(table);
        if if_not_exists {
            builder = builder.if_not_exists();
        }
        for (column_name, type_text) in columns {
            builder = builder.column_def(parse_column(column_name, type_text)?);
        }
        let properties = self.build_table_properties(storage_format, partitioned_by)?;
        let statement = Statement::CreateTable(builder.properties(properties).build());

        debug!(table = table_name, columns = columns.len(), "creating table");
        self.executor.execute(&statement).await?;
        Ok(())
    }

    /// Spark-family engines cannot wrap statements in BEGIN/COMMIT, for
    /// any transaction type. Transaction coordinators must execute
    /// statements from this adapter unwrapped.
    pub fn supports_transactions(&self, _transaction_type: TransactionType) -> bool {
        false
    }

    pub fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities {
            transactions: false,
            transactional_ddl: false,
            combined_alter_actions: false,
        }
    }
}

fn parse_column(column_name: &str, type_text: &str) -> Result<ColumnDef, SchemaChangeError> {
    let name = Ident::new(column_name)?;
    let data_type = DataType::parse(type_text).map_err(|source| SchemaChangeError::TypeSyntax {
        column: column_name.to_string(),
        source,
    })?;
    Ok(ColumnDef {
        name: name.name,
        data_type,
        comment: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ExecutionError;
    use async_trait::async_trait;
    use sqlgen::ast::alter_table::AlterAction;
    use std::sync::Mutex;

    /// Records every submitted statement; optionally fails the nth call.
    #[derive(Default)]
    struct RecordingExecutor {
        calls: Mutex<Vec<Statement>>,
        fail_on: Option<usize>,
    }

    impl RecordingExecutor {
        fn failing_on(call: usize) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: Some(call),
            }
        }

        fn calls(&self) -> Vec<Statement> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StatementExecutor for RecordingExecutor {
        async fn execute(&self, statement: &Statement) -> Result<(), ExecutionError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(statement.clone());
            if self.fail_on == Some(calls.len() - 1) {
                return Err(ExecutionError::Engine("statement rejected".to_string()));
            }
            Ok(())
        }
    }

    fn adapter() -> (Arc<RecordingExecutor>, SparkAdapter) {
        let executor = Arc::new(RecordingExecutor::default());
        (executor.clone(), SparkAdapter::new(executor))
    }

    fn added(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.to_string()))
            .collect()
    }

    fn names(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_alter_table_add_only() {
        let (executor, adapter) = adapter();
        adapter
            .alter_table(
                "analytics.events",
                &added(&[("ds", "DATE"), ("amount", "DECIMAL(10,2)")]),
                &[],
            )
            .await
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        let Statement::AlterTable(alter) = &calls[0] else {
            panic!("expected an ALTER TABLE statement");
        };
        assert_eq!(alter.table.name, "events");
        let AlterAction::AddColumns(columns) = &alter.action else {
            panic!("expected an ADD COLUMNS action");
        };
        let column_names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(column_names, ["ds", "amount"]);
        assert_eq!(
            columns[1].data_type,
            DataType::Decimal {
                precision: Some(10),
                scale: Some(2),
            }
        );
    }

    #[tokio::test]
    async fn test_alter_table_drop_only() {
        let (executor, adapter) = adapter();
        adapter
            .alter_table("events", &IndexMap::new(), &names(&["ds", "payload"]))
            .await
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        let Statement::AlterTable(alter) = &calls[0] else {
            panic!("expected an ALTER TABLE statement");
        };
        let AlterAction::DropColumns(columns) = &alter.action else {
            panic!("expected a DROP COLUMNS action");
        };
        let column_names: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
        assert_eq!(column_names, ["ds", "payload"]);
    }

    #[tokio::test]
    async fn test_alter_table_add_and_drop_are_separate_statements() {
        let (executor, adapter) = adapter();
        adapter
            .alter_table("events", &added(&[("ds", "DATE")]), &names(&["old_ds"]))
            .await
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            &calls[0],
            Statement::AlterTable(a) if matches!(a.action, AlterAction::AddColumns(_))
        ));
        assert!(matches!(
            &calls[1],
            Statement::AlterTable(a) if matches!(a.action, AlterAction::DropColumns(_))
        ));
    }

    #[tokio::test]
    async fn test_alter_table_with_nothing_to_do_is_a_noop() {
        let (executor, adapter) = adapter();
        adapter
            .alter_table("events", &IndexMap::new(), &[])
            .await
            .unwrap();
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_alter_table_malformed_type_submits_nothing() {
        let (executor, adapter) = adapter();
        let err = adapter
            .alter_table(
                "events",
                &added(&[("ds", "DATE"), ("junk", "NOT_A_TYPE(((")]),
                &names(&["old_ds"]),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            &err,
            SchemaChangeError::TypeSyntax { column, .. } if column == "junk"
        ));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_alter_table_malformed_table_name() {
        let (executor, adapter) = adapter();
        let err = adapter
            .alter_table("a.b.c.d", &added(&[("ds", "DATE")]), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, SchemaChangeError::Identifier(_)));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_alter_table_stops_after_executor_failure() {
        let executor = Arc::new(RecordingExecutor::failing_on(0));
        let adapter = SparkAdapter::new(executor.clone());

        let err = adapter
            .alter_table("events", &added(&[("ds", "DATE")]), &names(&["old_ds"]))
            .await
            .unwrap_err();

        assert!(matches!(err, SchemaChangeError::Execution(_)));
        // The drop statement is never attempted after the add fails.
        assert_eq!(executor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_build_table_properties_empty() {
        let (_, adapter) = adapter();
        let properties = adapter.build_table_properties(None, None).unwrap();
        assert!(properties.is_empty());

        let properties = adapter
            .build_table_properties(Some(""), Some(&[]))
            .unwrap();
        assert!(properties.is_empty());
    }

    #[tokio::test]
    async fn test_build_table_properties_format_only() {
        let (_, adapter) = adapter();
        let properties = adapter
            .build_table_properties(Some("PARQUET"), None)
            .unwrap();

        assert_eq!(properties.len(), 1);
        assert!(matches!(
            properties.iter().next(),
            Some(TableProperty::StorageFormat(f)) if f == "PARQUET"
        ));
    }

    #[tokio::test]
    async fn test_build_table_properties_preserves_partition_order() {
        let (_, adapter) = adapter();
        let properties = adapter
            .build_table_properties(Some("PARQUET"), Some(&names(&["year", "month"])))
            .unwrap();

        assert_eq!(properties.len(), 2);
        let partition = properties.iter().nth(1).unwrap();
        let TableProperty::PartitionedBy(columns) = partition else {
            panic!("expected a PARTITIONED BY property");
        };
        let column_names: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
        assert_eq!(column_names, ["year", "month"]);
    }

    #[tokio::test]
    async fn test_build_table_properties_rejects_bad_partition_column() {
        let (_, adapter) = adapter();
        let err = adapter
            .build_table_properties(None, Some(&names(&["year", ""])))
            .unwrap_err();
        assert!(matches!(err, SchemaChangeError::Identifier(_)));
    }

    #[tokio::test]
    async fn test_create_table_submits_single_statement() {
        let (executor, adapter) = adapter();
        adapter
            .create_table(
                "analytics.events",
                &added(&[("id", "BIGINT"), ("name", "STRING")]),
                Some("PARQUET"),
                Some(&names(&["year"])),
                true,
            )
            .await
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        let Statement::CreateTable(create) = &calls[0] else {
            panic!("expected a CREATE TABLE statement");
        };
        assert!(create.if_not_exists);
        assert_eq!(create.columns.len(), 2);
        assert_eq!(create.properties.len(), 2);
    }

    #[test]
    fn test_supports_transactions_is_always_false() {
        let (_, adapter) = adapter();
        assert!(!adapter.supports_transactions(TransactionType::Ddl));
        assert!(!adapter.supports_transactions(TransactionType::Dml));

        let capabilities = adapter.capabilities();
        assert!(!capabilities.transactions);
        assert!(!capabilities.transactional_ddl);
        assert!(!capabilities.combined_alter_actions);
    }
}
