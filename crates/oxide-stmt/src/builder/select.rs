//! SELECT rendering.

use tracing::trace;

use super::{inline_args, StatementBuilder};
use crate::value::SqlValue;

impl StatementBuilder {
    /// Renders a SELECT of the property columns.
    ///
    /// With no properties registered the column list is `*`.
    #[must_use]
    pub fn select_sql(&self) -> (String, Vec<SqlValue>) {
        self.select_sql_cols(&self.columns())
    }

    /// Renders a SELECT of caller-chosen columns.
    ///
    /// Table, conditions, ordering and paging are the same as
    /// [`StatementBuilder::select_sql`]; the properties are ignored. An
    /// empty column list selects `*`.
    #[must_use]
    pub fn select_sql_cols(&self, cols: &[&str]) -> (String, Vec<SqlValue>) {
        let cols = if cols.is_empty() {
            String::from("*")
        } else {
            cols.join(", ")
        };
        let mut params = vec![];
        let mut sql = format!("SELECT {cols} FROM {}", self.table);

        if let Some(conds) = self.where_clause(&mut params) {
            sql.push_str(" WHERE ");
            sql.push_str(&conds);
        }

        if !self.orders.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.orders.join(", "));
        }

        if self.limit > 0 {
            sql.push_str(&format!(" LIMIT {},{}", self.offset, self.limit));
        }

        trace!(table = %self.table, %sql, args = %inline_args(&params), "rendered select");
        (sql, params)
    }

    /// Renders `SELECT COUNT(*)` over the rows matched by the conditions.
    ///
    /// Ordering and paging do not apply to a count and are left out.
    #[must_use]
    pub fn count_sql(&self) -> (String, Vec<SqlValue>) {
        let mut params = vec![];
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.table);

        if let Some(conds) = self.where_clause(&mut params) {
            sql.push_str(" WHERE ");
            sql.push_str(&conds);
        }

        trace!(table = %self.table, %sql, args = %inline_args(&params), "rendered count");
        (sql, params)
    }
}
