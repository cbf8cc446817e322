pub mod alter_table;
pub mod common;
pub mod create_table;

use crate::ast::{alter_table::AlterTable, create_table::CreateTable};
use serde::{Deserialize, Serialize};

/// A complete DDL statement, ready to hand to a statement executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    AlterTable(AlterTable),
    CreateTable(CreateTable),
}
