//! Provides fluent builders for constructing `AlterTable` ASTs.
//!
//! There is one builder per action kind, so a statement mixing ADD and
//! DROP cannot be constructed.

use crate::ast::{
    alter_table::{AlterAction, AlterTable},
    common::{Ident, TableRef},
    create_table::ColumnDef,
};
use crate::types::DataType;

#[derive(Debug, Clone)]
pub struct AddColumnsBuilder {
    table: TableRef,
    columns: Vec<ColumnDef>,
}

impl AddColumnsBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            table,
            columns: Vec::new(),
        }
    }

    pub fn column(self, name: &str, data_type: DataType) -> Self {
        self.column_def(ColumnDef {
            name: name.to_string(),
            data_type,
            comment: None,
        })
    }

    pub fn column_def(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> AlterTable {
        AlterTable {
            table: self.table,
            action: AlterAction::AddColumns(self.columns),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropColumnsBuilder {
    table: TableRef,
    columns: Vec<Ident>,
}

impl DropColumnsBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            table,
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: Ident) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> AlterTable {
        AlterTable {
            table: self.table,
            action: AlterAction::DropColumns(self.columns),
        }
    }
}
