//! Config-driven generator for marked sections in build files.
//!
//! `topgen` reads a minimal configuration language describing a project
//! (`project`, `package`, `requires`, `flags`) and injects or refreshes a
//! tagged, machine-owned section inside otherwise user-owned text files,
//! without disturbing anything around it.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — parse the configuration language and project it into
//!   a typed [`config::Config`]
//! - **[`splice`]** — the idempotent section splicer (pure transform plus
//!   atomic file rewrite)
//! - **[`commands`]** — top-level subcommand orchestration (`check`,
//!   `gen`, `splice`)
//! - **[`error`]** — the typed error hierarchy shared by all of the above
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod splice;
