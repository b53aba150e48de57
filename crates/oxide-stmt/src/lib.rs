//! # oxide-stmt
//!
//! Assembles parameterized single-table statements for drivers that take
//! `?` placeholders.
//!
//! This crate provides:
//! - [`Condition`]s that render a SQL fragment plus the values its markers
//!   consume, inferring the fragment shape from a template string
//! - [`Property`] column assignments, optionally read from a getter at
//!   render time
//! - A [`StatementBuilder`] rendering SELECT, INSERT, UPDATE and DELETE
//!
//! Values never appear in the text. Every render returns the SQL together
//! with a `Vec<SqlValue>` aligned one-to-one with its `?` markers.
//!
//! ```rust
//! use oxide_stmt::{Condition, SqlValue, StatementBuilder};
//!
//! let builder = StatementBuilder::new("users")
//!     .property("name", "Bob")
//!     .condition(Condition::simple("id", 7).unwrap());
//!
//! let (sql, params) = builder.update_sql().unwrap();
//! assert_eq!(sql, "UPDATE users SET name = ? WHERE id = ?");
//! assert_eq!(params, vec![SqlValue::Text("Bob".into()), SqlValue::Int(7)]);
//! ```
//!
//! Table and column names are passed through verbatim and are never
//! validated. Conditions are always AND-ed.

pub mod builder;
pub mod condition;
pub mod error;
pub mod model;
pub mod property;
pub mod value;

pub use builder::StatementBuilder;
pub use condition::{escape_like, Bound, Condition, JsonCondition, SimpleCondition, TemplateMode};
pub use error::{Result, StmtError};
pub use model::Model;
pub use property::Property;
pub use value::{SqlValue, ToSqlValue};
