// Schema Result Formatting
// Normalizes flat catalog query rows into a schema/table/column tree

use crate::db::traits::QueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One column of a table or view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub column_name: String,
    pub data_type: String,
}

/// Schema metadata normalized into schema -> table -> columns
///
/// Column order within a table follows row order, which the catalog
/// queries fix to ordinal column position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSchema {
    pub schemas: BTreeMap<String, BTreeMap<String, Vec<SchemaColumn>>>,
}

impl FormattedSchema {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Build a [`FormattedSchema`] from a raw query result.
///
/// Expects `rows` to be an array of objects carrying `table_schema`,
/// `table_name`, `column_name` and `data_type`. A result without rows
/// yields an empty tree; rows missing any of the four fields are skipped.
pub fn format_schema_query_results(query_result: &QueryResult) -> FormattedSchema {
    let mut formatted = FormattedSchema::default();

    let rows = match query_result.get("rows").and_then(|r| r.as_array()) {
        Some(rows) => rows,
        None => return formatted,
    };

    for row in rows {
        let field = |key: &str| row.get(key).and_then(|v| v.as_str());

        let (schema, table, column, data_type) = match (
            field("table_schema"),
            field("table_name"),
            field("column_name"),
            field("data_type"),
        ) {
            (Some(s), Some(t), Some(c), Some(d)) => (s, t, c, d),
            _ => continue,
        };

        formatted
            .schemas
            .entry(schema.to_string())
            .or_default()
            .entry(table.to_string())
            .or_default()
            .push(SchemaColumn {
                column_name: column.to_string(),
                data_type: data_type.to_string(),
            });
    }

    formatted
}
