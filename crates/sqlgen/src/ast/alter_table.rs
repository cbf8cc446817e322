//! Defines the AST for ALTER TABLE statements.

use crate::ast::{
    common::{Ident, TableRef},
    create_table::ColumnDef,
};
use serde::{Deserialize, Serialize};

/// An ALTER TABLE statement carrying exactly one action.
///
/// Mixed ADD/DROP action lists are not uniformly supported across the
/// engine family, so a statement never combines the two; callers emit one
/// statement per action kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTable {
    pub table: TableRef,
    pub action: AlterAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterAction {
    AddColumns(Vec<ColumnDef>),
    DropColumns(Vec<Ident>),
}
