//! INSERT rendering.

use tracing::trace;

use super::{inline_args, StatementBuilder};
use crate::error::{Result, StmtError};
use crate::value::SqlValue;

impl StatementBuilder {
    /// Renders an INSERT of every property, in registration order.
    ///
    /// Conditions, ordering and paging are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StmtError::NoProperties`] when no property is registered.
    pub fn insert_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        if self.properties.is_empty() {
            return Err(StmtError::NoProperties {
                statement: "INSERT",
                table: self.table.clone(),
            });
        }

        let placeholders = vec!["?"; self.properties.len()];
        let params: Vec<SqlValue> = self
            .properties
            .iter()
            .map(|prop| prop.value().clone())
            .collect();

        let sql = format!(
            "INSERT INTO {}({}) VALUES({})",
            self.table,
            self.columns().join(", "),
            placeholders.join(", ")
        );

        trace!(table = %self.table, %sql, args = %inline_args(&params), "rendered insert");
        Ok((sql, params))
    }
}
