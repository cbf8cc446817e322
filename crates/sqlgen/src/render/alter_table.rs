use crate::{
    ast::alter_table::{AlterAction, AlterTable},
    render::{Render, Renderer},
};

impl Render for AlterTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("ALTER TABLE ");
        self.table.render(r);
        r.sql.push(' ');
        match &self.action {
            AlterAction::AddColumns(columns) => {
                r.sql.push_str("ADD COLUMNS (");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    column.render(r);
                }
                r.sql.push(')');
            }
            AlterAction::DropColumns(columns) => {
                r.sql.push_str("DROP COLUMNS (");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    column.render(r);
                }
                r.sql.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            alter_table::{AlterAction, AlterTable},
            common::{Ident, TableRef},
            create_table::ColumnDef,
        },
        dialect::Spark,
        render::render_statement,
        types::DataType,
    };

    #[test]
    fn test_render_add_columns() {
        let ast = AlterTable {
            table: TableRef::parse("analytics.events").unwrap(),
            action: AlterAction::AddColumns(vec![
                ColumnDef {
                    name: "ds".to_string(),
                    data_type: DataType::Date,
                    comment: None,
                },
                ColumnDef {
                    name: "payload".to_string(),
                    data_type: DataType::Map(
                        Box::new(DataType::String),
                        Box::new(DataType::String),
                    ),
                    comment: Some("raw event payload".to_string()),
                },
            ]),
        };

        assert_eq!(
            render_statement(&ast, &Spark),
            "ALTER TABLE `analytics`.`events` ADD COLUMNS (`ds` DATE, \
             `payload` MAP<STRING,STRING> COMMENT 'raw event payload')"
        );
    }

    #[test]
    fn test_render_drop_columns() {
        let ast = AlterTable {
            table: TableRef::parse("events").unwrap(),
            action: AlterAction::DropColumns(vec![
                Ident::new("ds").unwrap(),
                Ident::new("payload").unwrap(),
            ]),
        };

        assert_eq!(
            render_statement(&ast, &Spark),
            "ALTER TABLE `events` DROP COLUMNS (`ds`, `payload`)"
        );
    }
}
