//! Error types for statement assembly.

use thiserror::Error;

/// Errors raised while assembling a statement.
///
/// These all describe caller contract violations detected before any text
/// reaches a driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StmtError {
    /// A single value was bound to an IN-form template.
    #[error("IN condition `{template}` needs a list of values")]
    InvalidConditionValue {
        /// The offending template.
        template: String,
    },

    /// A list of values was bound to a template that does not render an IN list.
    #[error("condition `{template}` cannot take a list of values (expected an IN form)")]
    UnexpectedList {
        /// The offending template.
        template: String,
    },

    /// INSERT or UPDATE rendered with no column assignments.
    #[error("{statement} on `{table}` has no properties")]
    NoProperties {
        /// Statement keyword.
        statement: &'static str,
        /// Target table.
        table: String,
    },

    /// UPDATE or DELETE rendered with no conditions and no explicit opt-in.
    #[error("{statement} on `{table}` has no conditions; call allow_unfiltered() to target every row")]
    MissingConditions {
        /// Statement keyword.
        statement: &'static str,
        /// Target table.
        table: String,
    },
}

/// Result type alias for statement assembly.
pub type Result<T> = std::result::Result<T, StmtError>;
