use crate::{
    ast::create_table::{ColumnDef, CreateTable, TableProperties, TableProperty},
    render::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        self.table.render(r);
        r.sql.push_str(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push(',');
            }
            r.sql.push_str("\n\t");
            column.render(r);
        }
        r.sql.push_str("\n)");

        if !self.properties.is_empty() {
            r.sql.push(' ');
            self.properties.render(r);
        }
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
        r.sql.push(' ');
        r.sql.push_str(&r.dialect.render_data_type(&self.data_type));
        if let Some(comment) = &self.comment {
            r.sql.push_str(" COMMENT '");
            r.sql.push_str(&comment.replace('\'', "''"));
            r.sql.push('\'');
        }
    }
}

/// The property node keeps construction order; the clause order on the wire
/// is the dialect's to decide (Hive partitions before the format, Spark
/// after).
impl Render for TableProperties {
    fn render(&self, r: &mut Renderer) {
        let mut format = None;
        let mut partition = None;
        for property in self.iter() {
            match property {
                TableProperty::StorageFormat(name) => format = Some(name),
                TableProperty::PartitionedBy(columns) => partition = Some(columns),
            }
        }

        let mut clauses: Vec<String> = Vec::new();
        let format_clause = format.map(|name| r.dialect.storage_format_clause(name));
        let partition_clause = partition.map(|columns| {
            let quoted: Vec<String> = columns
                .iter()
                .map(|c| r.dialect.quote_identifier(&c.name))
                .collect();
            format!("PARTITIONED BY ({})", quoted.join(", "))
        });

        if r.dialect.partition_before_format() {
            clauses.extend(partition_clause);
            clauses.extend(format_clause);
        } else {
            clauses.extend(format_clause);
            clauses.extend(partition_clause);
        }
        r.sql.push_str(&clauses.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            common::{Ident, TableRef},
            create_table::{ColumnDef, CreateTable, TableProperties, TableProperty},
        },
        dialect::{Hive, Spark},
        render::render_statement,
        types::DataType,
    };

    fn partitioned_table() -> CreateTable {
        CreateTable {
            table: TableRef::parse("analytics.events").unwrap(),
            columns: vec![
                ColumnDef {
                    name: "id".to_string(),
                    data_type: DataType::BigInt,
                    comment: None,
                },
                ColumnDef {
                    name: "name".to_string(),
                    data_type: DataType::Varchar(255),
                    comment: None,
                },
            ],
            properties: TableProperties {
                properties: vec![
                    TableProperty::StorageFormat("PARQUET".to_string()),
                    TableProperty::PartitionedBy(vec![
                        Ident::new("year").unwrap(),
                        Ident::new("month").unwrap(),
                    ]),
                ],
            },
            if_not_exists: true,
        }
    }

    #[test]
    fn test_render_create_table_spark() {
        let expected = "CREATE TABLE IF NOT EXISTS `analytics`.`events` (\n\
                        \t`id` BIGINT,\n\
                        \t`name` VARCHAR(255)\n\
                        ) USING PARQUET PARTITIONED BY (`year`, `month`)";
        assert_eq!(render_statement(&partitioned_table(), &Spark), expected);
    }

    #[test]
    fn test_render_create_table_hive_reorders_clauses() {
        let expected = "CREATE TABLE IF NOT EXISTS `analytics`.`events` (\n\
                        \t`id` BIGINT,\n\
                        \t`name` VARCHAR(255)\n\
                        ) PARTITIONED BY (`year`, `month`) STORED AS PARQUET";
        assert_eq!(render_statement(&partitioned_table(), &Hive), expected);
    }

    #[test]
    fn test_render_create_table_without_properties() {
        let ast = CreateTable {
            table: TableRef::parse("t").unwrap(),
            columns: vec![ColumnDef {
                name: "id".to_string(),
                data_type: DataType::Int,
                comment: None,
            }],
            properties: TableProperties::default(),
            if_not_exists: false,
        };
        assert_eq!(
            render_statement(&ast, &Spark),
            "CREATE TABLE `t` (\n\t`id` INT\n)"
        );
    }
}
