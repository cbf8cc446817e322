//! Defines the AST for CREATE TABLE statements and their properties.

use crate::ast::common::{Ident, TableRef};
use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub properties: TableProperties,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub comment: Option<String>,
}

/// Decorations attached to a CREATE TABLE statement.
///
/// Always present on a statement, possibly with an empty property list, so
/// consumers can iterate without a null check. Partition column order is
/// preserved; it determines the physical partition-key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProperties {
    pub properties: Vec<TableProperty>,
}

impl TableProperties {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableProperty> {
        self.properties.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableProperty {
    /// The storage format token, forwarded opaquely (`PARQUET`, `DELTA`, ...).
    StorageFormat(String),
    PartitionedBy(Vec<Ident>),
}
