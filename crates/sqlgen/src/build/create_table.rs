//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::ast::{
    common::{Ident, TableRef},
    create_table::{ColumnDef, CreateTable, TableProperties, TableProperty},
};
use crate::types::DataType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                columns: Vec::new(),
                properties: TableProperties::default(),
                if_not_exists: false,
            },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    pub fn column(self, name: &str, data_type: DataType) -> Self {
        self.column_def(ColumnDef {
            name: name.to_string(),
            data_type,
            comment: None,
        })
    }

    pub fn column_def(mut self, column: ColumnDef) -> Self {
        self.ast.columns.push(column);
        self
    }

    pub fn storage_format(mut self, format: &str) -> Self {
        self.ast
            .properties
            .properties
            .push(TableProperty::StorageFormat(format.to_string()));
        self
    }

    pub fn partitioned_by(mut self, columns: Vec<Ident>) -> Self {
        self.ast
            .properties
            .properties
            .push(TableProperty::PartitionedBy(columns));
        self
    }

    /// Replaces the properties node with one built elsewhere.
    pub fn properties(mut self, properties: TableProperties) -> Self {
        self.ast.properties = properties;
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}
