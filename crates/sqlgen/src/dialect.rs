//! Defines the `Dialect` trait for engine-specific SQL syntax.

use crate::types::DataType;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier in the correct quotation marks for the dialect.
    ///
    /// Every engine in the Spark family quotes with backticks.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Renders a `DataType` into the dialect's SQL type text.
    fn render_data_type(&self, data_type: &DataType) -> String;

    /// The clause that declares a table's storage format.
    ///
    /// - Spark SQL / Databricks: `USING PARQUET`
    /// - Hive: `STORED AS PARQUET`
    fn storage_format_clause(&self, format: &str) -> String;

    /// Whether `PARTITIONED BY` precedes the storage format clause.
    ///
    /// Hive declares partitioning before the format; Spark SQL declares it
    /// after. Declaring them in the wrong order is a syntax error on both.
    fn partition_before_format(&self) -> bool;

    /// Returns the name of the dialect (e.g., "Spark", "Hive").
    fn name(&self) -> String;
}

fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

#[derive(Debug, Clone)]
pub struct Spark;

impl Dialect for Spark {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_backtick(ident)
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        data_type.to_string()
    }

    fn storage_format_clause(&self, format: &str) -> String {
        format!("USING {format}")
    }

    fn partition_before_format(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "Spark".into()
    }
}

#[derive(Debug, Clone)]
pub struct Hive;

impl Dialect for Hive {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_backtick(ident)
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        data_type.to_string()
    }

    fn storage_format_clause(&self, format: &str) -> String {
        format!("STORED AS {format}")
    }

    fn partition_before_format(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        "Hive".into()
    }
}

#[derive(Debug, Clone)]
pub struct Databricks;

impl Dialect for Databricks {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_backtick(ident)
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        data_type.to_string()
    }

    fn storage_format_clause(&self, format: &str) -> String {
        format!("USING {format}")
    }

    fn partition_before_format(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "Databricks".into()
    }
}
