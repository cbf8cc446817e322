use crate::{
    ast::{
        Statement,
        common::{Ident, TableRef},
    },
    render::{Render, Renderer},
};

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) {
        if let Some(catalog) = &self.catalog {
            r.sql.push_str(&r.dialect.quote_identifier(catalog));
            r.sql.push('.');
        }
        if let Some(schema) = &self.schema {
            r.sql.push_str(&r.dialect.quote_identifier(schema));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for Statement {
    fn render(&self, r: &mut Renderer) {
        match self {
            Statement::AlterTable(alter_table) => alter_table.render(r),
            Statement::CreateTable(create_table) => create_table.render(r),
        }
    }
}
