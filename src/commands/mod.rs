//! Top-level subcommand orchestration.

pub mod check;
pub mod generate;
pub mod splice;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::logging::Logger;

/// Load the configuration named by the global options, with stage logging.
///
/// Shared by every subcommand that needs a [`Config`], so the loading
/// boilerplate lives in one place.
///
/// # Errors
///
/// Returns an error if the config file is missing, malformed, or fails
/// projection.
pub fn load_config(global: &GlobalOpts, log: &Logger) -> Result<Config> {
    log.stage("Loading configuration");
    let config = Config::load(&global.config)?;
    log.debug(&format!("project: {}", config.project));
    log.debug(&format!("package: {}", config.package));
    log.info(&format!(
        "loaded {} dependencies, {} flags",
        config.requires.len(),
        config.flags.len()
    ));
    Ok(config)
}
