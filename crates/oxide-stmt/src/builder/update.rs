//! UPDATE rendering.

use tracing::{trace, warn};

use super::{inline_args, StatementBuilder};
use crate::error::{Result, StmtError};
use crate::value::SqlValue;

impl StatementBuilder {
    /// Renders an UPDATE assigning every property, filtered by the conditions.
    ///
    /// Arguments are the property values in registration order followed by
    /// the condition values. That order mirrors the text and must not change.
    ///
    /// # Errors
    ///
    /// Returns [`StmtError::NoProperties`] when no property is registered,
    /// and [`StmtError::MissingConditions`] when there are no conditions and
    /// [`StatementBuilder::allow_unfiltered`] was not called.
    pub fn update_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        if self.properties.is_empty() {
            return Err(StmtError::NoProperties {
                statement: "UPDATE",
                table: self.table.clone(),
            });
        }

        let mut params = vec![];
        let updates: Vec<String> = self
            .properties
            .iter()
            .map(|prop| {
                params.push(prop.value().clone());
                format!("{} = ?", prop.name())
            })
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, updates.join(", "));

        match self.where_clause(&mut params) {
            Some(conds) => {
                sql.push_str(" WHERE ");
                sql.push_str(&conds);
            }
            None if self.allow_unfiltered => {
                warn!(table = %self.table, "rendering UPDATE without conditions");
            }
            None => {
                return Err(StmtError::MissingConditions {
                    statement: "UPDATE",
                    table: self.table.clone(),
                });
            }
        }

        trace!(table = %self.table, %sql, args = %inline_args(&params), "rendered update");
        Ok((sql, params))
    }
}

#[cfg(test)]
mod tests {
    use crate::condition::Condition;
    use crate::error::StmtError;
    use crate::value::SqlValue;
    use crate::StatementBuilder;

    #[test]
    fn test_update_with_condition() {
        let (sql, params) = StatementBuilder::new("t")
            .property("name", "b")
            .condition(Condition::simple("id", 7).unwrap())
            .update_sql()
            .unwrap();

        assert_eq!(sql, "UPDATE t SET name = ? WHERE id = ?");
        assert_eq!(params, vec![SqlValue::Text(String::from("b")), SqlValue::Int(7)]);
    }

    #[test]
    fn test_properties_precede_conditions() {
        // Conditions registered first still bind after the SET values.
        let (sql, params) = StatementBuilder::new("users")
            .condition(Condition::simple_list("id IN", [3]).unwrap())
            .property("email", "x@example.com")
            .property("age", 30)
            .filter("age <", 30).unwrap()
            .update_sql()
            .unwrap();

        assert_eq!(
            sql,
            "UPDATE users SET email = ?, age = ? WHERE id IN (?) AND age < ?"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Text(String::from("x@example.com")),
                SqlValue::Int(30),
                SqlValue::Int(3),
                SqlValue::Int(30),
            ]
        );
    }

    #[test]
    fn test_update_requires_conditions() {
        let err = StatementBuilder::new("t")
            .property("name", "b")
            .update_sql()
            .unwrap_err();
        assert!(matches!(err, StmtError::MissingConditions { statement: "UPDATE", .. }));
    }

    #[test]
    fn test_update_unfiltered_opt_in() {
        let (sql, params) = StatementBuilder::new("t")
            .property("archived", true)
            .allow_unfiltered()
            .update_sql()
            .unwrap();
        assert_eq!(sql, "UPDATE t SET archived = ?");
        assert_eq!(params, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn test_update_requires_properties() {
        let err = StatementBuilder::new("t")
            .filter("id", 1).unwrap()
            .update_sql()
            .unwrap_err();
        assert!(matches!(err, StmtError::NoProperties { statement: "UPDATE", .. }));
    }
}
