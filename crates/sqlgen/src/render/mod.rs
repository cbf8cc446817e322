//! Defines the core rendering trait and context for converting AST to SQL.

use crate::dialect::Dialect;

pub mod alter_table;
pub mod common;
pub mod create_table;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and provides access to the dialect for
/// syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }
}

/// Renders a single statement to SQL text with the given dialect.
pub fn render_statement(statement: &impl Render, dialect: &dyn Dialect) -> String {
    let mut renderer = Renderer::new(dialect);
    statement.render(&mut renderer);
    renderer.finish()
}
