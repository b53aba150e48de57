//! The table-name collaborator.

/// A persisted type that knows which table it lives in.
///
/// # Example
///
/// ```rust
/// use oxide_stmt::{Model, StatementBuilder};
///
/// struct User;
///
/// impl Model for User {
///     fn table_name(&self) -> &str {
///         "users"
///     }
/// }
///
/// let builder = StatementBuilder::for_model(&User);
/// assert_eq!(builder.table(), "users");
/// ```
pub trait Model {
    /// Returns the table name, passed through to the statement text verbatim.
    fn table_name(&self) -> &str;
}

impl Model for str {
    fn table_name(&self) -> &str {
        self
    }
}

impl Model for String {
    fn table_name(&self) -> &str {
        self
    }
}
