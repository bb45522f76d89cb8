//! Configuration loading: parse the config file and project it into a
//! typed [`Config`] record.

pub mod parser;
pub mod render;
pub mod value;

use std::path::Path;

use crate::error::ConfigError;
use value::{Value, lookup};

/// The projected configuration record.
///
/// Built once at startup from the parsed key-value entries, immutable
/// thereafter. `project`, `package`, and `requires` are required;
/// `flags` defaults to empty. Keys the projection does not recognize are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project name.
    pub project: String,
    /// Package name used in generated sections.
    pub package: String,
    /// Required dependencies, in declaration order.
    pub requires: Vec<String>,
    /// Extra flags passed through to generated sections (optional).
    pub flags: Vec<String>,
}

impl Config {
    /// Load and project the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::Io`] if it cannot be read, and a syntax or
    /// projection error otherwise. There is no partial success: any
    /// failure discards the whole parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound { path: file });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: file.clone(),
            source,
        })?;
        Self::parse(&text, &file)
    }

    /// Parse configuration text and project it, reporting errors against
    /// `file` (used for messages only).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] if the text is malformed, and
    /// [`ConfigError::MissingKey`] / [`ConfigError::WrongShape`] if the
    /// projection fails.
    pub fn parse(text: &str, file: &str) -> Result<Self, ConfigError> {
        let entries = parser::parse_entries(text).map_err(|e| ConfigError::Syntax {
            file: file.to_string(),
            line: e.line,
            message: e.message,
        })?;

        Ok(Self {
            project: required_str(&entries, "project", file)?,
            package: required_str(&entries, "package", file)?,
            requires: required_str_list(&entries, "requires", file)?,
            flags: optional_str_list(&entries, "flags", file)?,
        })
    }
}

/// Look up a required scalar key.
fn required_str(
    entries: &[(String, Value)],
    key: &str,
    file: &str,
) -> Result<String, ConfigError> {
    match lookup(entries, key) {
        None => Err(ConfigError::MissingKey {
            file: file.to_string(),
            key: key.to_string(),
        }),
        Some(Value::Str(s)) => Ok(s.clone()),
        Some(Value::List(_)) => Err(ConfigError::WrongShape {
            file: file.to_string(),
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

/// Look up a required list-of-strings key.
fn required_str_list(
    entries: &[(String, Value)],
    key: &str,
    file: &str,
) -> Result<Vec<String>, ConfigError> {
    match lookup(entries, key) {
        None => Err(ConfigError::MissingKey {
            file: file.to_string(),
            key: key.to_string(),
        }),
        Some(value) => str_list(value, key, file),
    }
}

/// Look up an optional list-of-strings key, defaulting to empty.
fn optional_str_list(
    entries: &[(String, Value)],
    key: &str,
    file: &str,
) -> Result<Vec<String>, ConfigError> {
    match lookup(entries, key) {
        None => Ok(Vec::new()),
        Some(value) => str_list(value, key, file),
    }
}

/// Flatten a `List` of `Str` into owned strings; anything else is a
/// shape error, never a coercion.
fn str_list(value: &Value, key: &str, file: &str) -> Result<Vec<String>, ConfigError> {
    let wrong_shape = || ConfigError::WrongShape {
        file: file.to_string(),
        key: key.to_string(),
        expected: "a list of strings",
    };
    let items = value.as_list().ok_or_else(wrong_shape)?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(wrong_shape))
        .collect()
}
