//! Domain-specific error types for the generator.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`ConfigError`], [`SpliceError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! TopgenError
//! ├── Config(ConfigError) — config file lookup, parsing, projection
//! └── Splice(SpliceError) — filesystem failures while rewriting a target
//! ```
//!
//! Every failure is terminal for the operation that produced it: no
//! component retries, recovers partially, or swallows an error.

use thiserror::Error;

/// Top-level error type for the generator.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum TopgenError {
    /// Configuration-related error (lookup, parsing, projection).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Splice-related filesystem error.
    #[error("Splice error: {0}")]
    Splice(#[from] SpliceError),
}

/// Errors that arise from loading and projecting the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Config file not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: String,
    },

    /// The parser rejected the file. Carries the exact line (1-based,
    /// newline-counted) and a cause string.
    #[error("Syntax error in {file} at line {line}: {message}")]
    Syntax {
        /// Path of the file being parsed.
        file: String,
        /// Line on which parsing failed.
        line: usize,
        /// Human-readable cause.
        message: String,
    },

    /// A required key (`project`, `package`, `requires`) is absent.
    #[error("Missing required key \"{key}\" in {file}")]
    MissingKey {
        /// Path of the file being projected.
        file: String,
        /// The absent key.
        key: String,
    },

    /// A key is present but has the wrong shape (e.g., `requires` given
    /// as a string instead of a list of strings).
    #[error("Key \"{key}\" in {file} has the wrong shape: expected {expected}")]
    WrongShape {
        /// Path of the file being projected.
        file: String,
        /// The offending key.
        key: String,
        /// What the projection expected (e.g., `"a string"`).
        expected: &'static str,
    },

    /// An I/O error occurred while reading the config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while splicing a target file.
#[derive(Error, Debug)]
pub enum SpliceError {
    /// An I/O error occurred while reading, writing, or replacing the
    /// target file.
    #[error("IO error splicing {path}: {source}")]
    Io {
        /// Path of the target file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
