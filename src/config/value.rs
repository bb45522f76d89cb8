//! Tagged values produced by the configuration parser.

/// A parsed configuration value.
///
/// The set of shapes is closed: a value is either a string or a list, and a
/// list may contain strings or nested lists. Nothing else exists.
///
/// # Examples
///
/// ```
/// use topgen::config::value::Value;
///
/// let v = Value::List(vec![Value::Str("re".to_string())]);
/// assert!(v.as_list().is_some());
/// assert!(v.as_str().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A quoted string.
    Str(String),
    /// A bracketed list of values.
    List(Vec<Value>),
}

impl Value {
    /// Return the string payload, or `None` for a list.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Return the list payload, or `None` for a string.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::Str(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Ordered key-value entries as they appeared in the file.
///
/// Keys need not be unique; [`lookup`] returns the first match, mirroring
/// association-list semantics.
pub type Entries = Vec<(String, Value)>;

/// Find the first entry with the given key.
///
/// # Examples
///
/// ```
/// use topgen::config::value::{Value, lookup};
///
/// let entries = vec![
///     ("name".to_string(), Value::Str("a".to_string())),
///     ("name".to_string(), Value::Str("b".to_string())),
/// ];
/// assert_eq!(lookup(&entries, "name"), Some(&Value::Str("a".to_string())));
/// assert_eq!(lookup(&entries, "other"), None);
/// ```
#[must_use]
pub fn lookup<'a>(entries: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
