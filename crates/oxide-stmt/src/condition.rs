//! Filter conditions.
//!
//! A [`Condition`] renders to a SQL fragment containing `?` markers and to
//! the ordered list of values consumed by those markers. The number of
//! markers in [`Condition::sql`] always equals the length of
//! [`Condition::values`], and both read left to right in the same order.
//!
//! # Example
//!
//! ```rust
//! use oxide_stmt::condition::{Condition, escape_like};
//!
//! let by_name = Condition::simple("name", "Alice").unwrap();
//! assert_eq!(by_name.sql(), "name = ?");
//!
//! let adults = Condition::simple("age >=", 18).unwrap();
//! assert_eq!(adults.sql(), "age >= ?");
//!
//! let ids = Condition::simple_list("id IN", vec![1, 2, 3]).unwrap();
//! assert_eq!(ids.sql(), "id IN (?, ?, ?)");
//!
//! let pattern = format!("%{}%", escape_like("50%_off"));
//! let search = Condition::simple(r"title LIKE ? ESCAPE '\'", pattern).unwrap();
//! assert_eq!(search.values().len(), 1);
//! ```

use std::fmt;

use crate::error::{Result, StmtError};
use crate::value::{SqlValue, ToSqlValue};

/// Value bound to a simple condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    /// One value.
    Single(SqlValue),
    /// An ordered collection, expanded into one marker per element.
    List(Vec<SqlValue>),
}

impl Bound {
    /// Returns the bound values flattened in order.
    #[must_use]
    pub fn values(&self) -> Vec<SqlValue> {
        match self {
            Self::Single(v) => vec![v.clone()],
            Self::List(vs) => vs.clone(),
        }
    }

    /// Number of values carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(vs) => vs.len(),
        }
    }

    /// Returns true for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a simple condition template is turned into SQL.
///
/// The mode is inferred from the shape of the template alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateMode {
    /// No space: a bare column, rendered `<column> = ?`.
    Column,
    /// Contains ` IN`: rendered `<template> (?, ?, ...)`, one marker per value.
    In,
    /// Spaces but no `?`: rendered `<template> ?`.
    Comparator,
    /// Already carries its own `?`: used verbatim.
    Verbatim,
}

impl TemplateMode {
    /// Infers the mode of a template.
    ///
    /// The checks run in a fixed priority order and the order is
    /// load-bearing: a template matching several shapes resolves to the
    /// first one listed. `"id IN (?)"` is therefore an IN form, never
    /// verbatim, and a column name containing a space is never a bare
    /// column. Only the ASCII space separates words; tabs and other
    /// whitespace do not.
    #[must_use]
    pub fn infer(template: &str) -> Self {
        if !template.contains(' ') {
            Self::Column
        } else if template.contains(" IN") {
            Self::In
        } else if !template.contains('?') {
            Self::Comparator
        } else {
            Self::Verbatim
        }
    }
}

/// A caller-supplied template plus its bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCondition {
    template: String,
    mode: TemplateMode,
    bound: Bound,
}

impl SimpleCondition {
    /// Returns the template as supplied.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the inferred rendering mode.
    #[must_use]
    pub const fn mode(&self) -> TemplateMode {
        self.mode
    }

    /// Returns the bound value.
    #[must_use]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }

    fn sql(&self) -> String {
        match self.mode {
            TemplateMode::Column => format!("{} = ?", self.template),
            TemplateMode::In => {
                let placeholders = vec!["?"; self.bound.len()];
                format!("{} ({})", self.template, placeholders.join(", "))
            }
            TemplateMode::Comparator => format!("{} ?", self.template),
            TemplateMode::Verbatim => self.template.clone(),
        }
    }
}

/// Equality on a value extracted from a JSON column.
///
/// The path is interpolated into the text, not parameterized. Only pass
/// trusted literal paths.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonCondition {
    column: String,
    path: String,
    value: SqlValue,
}

impl JsonCondition {
    /// Returns the JSON column.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the JSON path expression.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn sql(&self) -> String {
        format!("JSON_EXTRACT({}, '{}') = ?", self.column, self.path)
    }
}

/// A filter predicate. Builders AND all of their conditions together.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Template-driven condition.
    Simple(SimpleCondition),
    /// `JSON_EXTRACT(column, 'path') = ?`.
    JsonEquals(JsonCondition),
}

impl Condition {
    /// Creates a condition from a template and a single value.
    ///
    /// See [`TemplateMode`] for how the template is interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`StmtError::InvalidConditionValue`] when the template infers
    /// to [`TemplateMode::In`]; IN forms take their values from
    /// [`Condition::simple_list`].
    pub fn simple<T: ToSqlValue>(template: impl Into<String>, value: T) -> Result<Self> {
        let template = template.into();
        let mode = TemplateMode::infer(&template);
        if mode == TemplateMode::In {
            return Err(StmtError::InvalidConditionValue { template });
        }
        Ok(Self::Simple(SimpleCondition {
            template,
            mode,
            bound: Bound::Single(value.to_sql_value()),
        }))
    }

    /// Creates an IN-form condition from a template and a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`StmtError::UnexpectedList`] when the template does not
    /// infer to [`TemplateMode::In`].
    pub fn simple_list<I, T>(template: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        let template = template.into();
        let mode = TemplateMode::infer(&template);
        if mode != TemplateMode::In {
            return Err(StmtError::UnexpectedList { template });
        }
        Ok(Self::Simple(SimpleCondition {
            template,
            mode,
            bound: Bound::List(values.into_iter().map(ToSqlValue::to_sql_value).collect()),
        }))
    }

    /// Creates a condition comparing a value inside a JSON column.
    #[must_use]
    pub fn json_equals<T: ToSqlValue>(
        column: impl Into<String>,
        path: impl Into<String>,
        value: T,
    ) -> Self {
        Self::JsonEquals(JsonCondition {
            column: column.into(),
            path: path.into(),
            value: value.to_sql_value(),
        })
    }

    /// Returns the SQL fragment.
    #[must_use]
    pub fn sql(&self) -> String {
        match self {
            Self::Simple(c) => c.sql(),
            Self::JsonEquals(c) => c.sql(),
        }
    }

    /// Returns the values consumed by the fragment's markers, in order.
    #[must_use]
    pub fn values(&self) -> Vec<SqlValue> {
        match self {
            Self::Simple(c) => c.bound.values(),
            Self::JsonEquals(c) => vec![c.value.clone()],
        }
    }

    /// Counts the `?` characters in the rendered fragment.
    ///
    /// Verbatim templates holding a `?` inside a string literal will
    /// over-count.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.sql().matches('?').count()
    }
}

impl From<SimpleCondition> for Condition {
    fn from(c: SimpleCondition) -> Self {
        Self::Simple(c)
    }
}

impl From<JsonCondition> for Condition {
    fn from(c: JsonCondition) -> Self {
        Self::JsonEquals(c)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}

/// Escapes `%` and `_` so the text matches literally inside a LIKE pattern.
///
/// Wildcards may be added around the result afterwards. The statement
/// must declare the escape character, e.g. `LIKE ? ESCAPE '\'`, on engines
/// that have no default one.
#[must_use]
pub fn escape_like(text: &str) -> String {
    text.replace('%', r"\%").replace('_', r"\_")
}
