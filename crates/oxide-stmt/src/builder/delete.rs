//! DELETE rendering.

use tracing::{trace, warn};

use super::{inline_args, StatementBuilder};
use crate::error::{Result, StmtError};
use crate::value::SqlValue;

impl StatementBuilder {
    /// Renders a DELETE filtered by the conditions.
    ///
    /// # Errors
    ///
    /// Returns [`StmtError::MissingConditions`] when there are no conditions
    /// and [`StatementBuilder::allow_unfiltered`] was not called.
    pub fn delete_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let mut params = vec![];
        let mut sql = format!("DELETE FROM {}", self.table);

        match self.where_clause(&mut params) {
            Some(conds) => {
                sql.push_str(" WHERE ");
                sql.push_str(&conds);
            }
            None if self.allow_unfiltered => {
                warn!(table = %self.table, "rendering DELETE without conditions");
            }
            None => {
                return Err(StmtError::MissingConditions {
                    statement: "DELETE",
                    table: self.table.clone(),
                });
            }
        }

        trace!(table = %self.table, %sql, args = %inline_args(&params), "rendered delete");
        Ok((sql, params))
    }
}
