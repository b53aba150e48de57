//! Column assignments.

use std::fmt;

use crate::value::{SqlValue, ToSqlValue};

type Getter = Box<dyn Fn() -> SqlValue>;

/// One column assignment: a column name and the value bound to it.
///
/// A property may carry a getter captured at registration. The getter is
/// read once immediately and again on every [`Property::refresh`], so a
/// builder can be declared up front and pick up later changes to the
/// underlying state.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use oxide_stmt::{Property, SqlValue};
///
/// let counter = Rc::new(Cell::new(1_i64));
/// let source = Rc::clone(&counter);
/// let mut prop = Property::bound("hits", move || source.get());
///
/// counter.set(5);
/// assert_eq!(prop.value(), &SqlValue::Int(1));
/// prop.refresh();
/// assert_eq!(prop.value(), &SqlValue::Int(5));
/// ```
pub struct Property {
    name: String,
    value: SqlValue,
    getter: Option<Getter>,
}

impl Property {
    /// Creates a property holding a fixed value.
    #[must_use]
    pub fn new<T: ToSqlValue>(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value: value.to_sql_value(),
            getter: None,
        }
    }

    /// Creates a property whose value is read from `getter`.
    #[must_use]
    pub fn bound<F, T>(name: impl Into<String>, getter: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: ToSqlValue,
    {
        let read: Getter = Box::new(move || getter().to_sql_value());
        Self {
            name: name.into(),
            value: read(),
            getter: Some(read),
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value captured most recently.
    #[must_use]
    pub const fn value(&self) -> &SqlValue {
        &self.value
    }

    /// Returns true when the property reads its value from a getter.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.getter.is_some()
    }

    /// Replaces the stored value.
    pub fn set_value<T: ToSqlValue>(&mut self, value: T) {
        self.value = value.to_sql_value();
    }

    /// Re-reads the getter, if any. Returns whether the value was re-read.
    pub fn refresh(&mut self) -> bool {
        match &self.getter {
            Some(getter) => {
                self.value = getter();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("bound", &self.is_bound())
            .finish()
    }
}
