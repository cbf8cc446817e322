//! Common, reusable AST nodes shared by the DDL statements.

use crate::error::IdentifierError;
use serde::{Deserialize, Serialize};

/// A single unqualified identifier, e.g. a column name.
///
/// Identifiers are rendered quoted, so almost any text is legal; only the
/// quote character itself and control characters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        validate_part(&name)?;
        Ok(Self { name })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// A fully or partially qualified table name: `[catalog.][schema.]table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl TableRef {
    /// Parses a dotted table name into its qualifier parts.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let parts: Vec<&str> = raw.split('.').collect();
        for part in &parts {
            validate_part(part)?;
        }
        match parts.as_slice() {
            [name] => Ok(Self {
                catalog: None,
                schema: None,
                name: (*name).to_string(),
            }),
            [schema, name] => Ok(Self {
                catalog: None,
                schema: Some((*schema).to_string()),
                name: (*name).to_string(),
            }),
            [catalog, schema, name] => Ok(Self {
                catalog: Some((*catalog).to_string()),
                schema: Some((*schema).to_string()),
                name: (*name).to_string(),
            }),
            _ => Err(IdentifierError::TooManyParts {
                name: raw.to_string(),
            }),
        }
    }
}

fn validate_part(part: &str) -> Result<(), IdentifierError> {
    if part.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if let Some(ch) = part.chars().find(|c| *c == '`' || c.is_control()) {
        return Err(IdentifierError::InvalidChar {
            name: part.to_string(),
            ch,
        });
    }
    Ok(())
}
