//! Statement builder.
//!
//! A [`StatementBuilder`] collects the ingredients of one operation on one
//! table and renders SELECT, INSERT, UPDATE or DELETE text together with a
//! positional argument list. Fragments and arguments are concatenated in
//! registration order; nothing is reordered, grouped or deduplicated.
//!
//! # Example
//!
//! ```rust
//! use oxide_stmt::{Condition, SqlValue, StatementBuilder};
//!
//! let builder = StatementBuilder::new("users")
//!     .property("id", 1)
//!     .property("name", "Alice")
//!     .condition(Condition::simple("age >", 18).unwrap())
//!     .order_by_desc("id")
//!     .limit(10);
//!
//! let (sql, params) = builder.select_sql();
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE age > ? ORDER BY id DESC LIMIT 0,10"
//! );
//! assert_eq!(params, vec![SqlValue::Int(18)]);
//! ```

mod delete;
mod insert;
mod select;
mod update;

use tracing::debug;

use crate::condition::Condition;
use crate::error::Result;
use crate::model::Model;
use crate::property::Property;
use crate::value::{SqlValue, ToSqlValue};

/// Accumulates one operation against one table.
#[derive(Debug)]
pub struct StatementBuilder {
    table: String,
    properties: Vec<Property>,
    conditions: Vec<Condition>,
    orders: Vec<String>,
    limit: u64,
    offset: u64,
    allow_unfiltered: bool,
}

impl StatementBuilder {
    /// Creates a builder targeting `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            properties: vec![],
            conditions: vec![],
            orders: vec![],
            limit: 0,
            offset: 0,
            allow_unfiltered: false,
        }
    }

    /// Creates a builder targeting the table of `model`.
    #[must_use]
    pub fn for_model<M: Model + ?Sized>(model: &M) -> Self {
        Self::new(model.table_name())
    }

    /// Adds a column assignment with a fixed value.
    #[must_use]
    pub fn property<T: ToSqlValue>(self, name: impl Into<String>, value: T) -> Self {
        self.with_property(Property::new(name, value))
    }

    /// Adds a column assignment whose value is read from `getter`.
    ///
    /// See [`StatementBuilder::refresh`].
    #[must_use]
    pub fn bind<F, T>(self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: ToSqlValue,
    {
        self.with_property(Property::bound(name, getter))
    }

    /// Adds a prepared property.
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.add_property(prop);
        self
    }

    /// Adds a condition. All conditions are AND-ed.
    #[must_use]
    pub fn condition(mut self, cond: Condition) -> Self {
        self.add_condition(cond);
        self
    }

    /// Shorthand for [`Condition::simple`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StmtError::InvalidConditionValue`] for IN-form templates.
    pub fn filter<T: ToSqlValue>(self, template: impl Into<String>, value: T) -> Result<Self> {
        Ok(self.condition(Condition::simple(template, value)?))
    }

    /// Adds a raw ORDER BY clause, e.g. `"created_at DESC"`.
    #[must_use]
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.add_order(clause);
        self
    }

    /// Adds a descending ORDER BY clause for `column`.
    #[must_use]
    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(format!("{column} DESC"))
    }

    /// Sets the row limit. Zero means no LIMIT clause.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = n;
        self
    }

    /// Sets the row offset, only rendered alongside a limit.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = n;
        self
    }

    /// Lets UPDATE and DELETE render without conditions, touching every row.
    #[must_use]
    pub const fn allow_unfiltered(mut self) -> Self {
        self.allow_unfiltered = true;
        self
    }

    /// Appends a property in place.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Appends a condition in place.
    pub fn add_condition(&mut self, cond: Condition) {
        self.conditions.push(cond);
    }

    /// Appends an ORDER BY clause in place.
    pub fn add_order(&mut self, clause: impl Into<String>) {
        self.orders.push(clause.into());
    }

    /// Re-reads every bound property so rendering reflects current state.
    pub fn refresh(&mut self) {
        let refreshed = self
            .properties
            .iter_mut()
            .map(Property::refresh)
            .filter(|reread| *reread)
            .count();
        debug!(table = %self.table, refreshed, "refreshed bound properties");
    }

    /// Returns the target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the properties in registration order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the conditions in registration order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns the property column names in registration order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.properties.iter().map(Property::name).collect()
    }

    /// Renders the conditions as one AND-joined fragment and appends their
    /// values to `params`. Returns `None` when there are no conditions.
    fn where_clause(&self, params: &mut Vec<SqlValue>) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .conditions
            .iter()
            .map(|cond| {
                params.extend(cond.values());
                cond.sql()
            })
            .collect();
        Some(parts.join(" AND "))
    }
}

/// Formats arguments as SQL literals for trace output.
fn inline_args(params: &[SqlValue]) -> String {
    let literals: Vec<String> = params.iter().map(SqlValue::to_sql_inline).collect();
    format!("[{}]", literals.join(", "))
}
