//! The `check` command: load and validate the configuration.

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or fails
/// validation; the error message names the file, line, and cause.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let config = super::load_config(global, log)?;

    log.info(&format!("project:  {}", config.project));
    log.info(&format!("package:  {}", config.package));
    for dep in &config.requires {
        log.info(&format!("requires: {dep}"));
    }
    for flag in &config.flags {
        log.info(&format!("flag:     {flag}"));
    }
    log.info("configuration OK");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn opts(config: PathBuf) -> GlobalOpts {
        GlobalOpts {
            config,
            dry_run: false,
        }
    }

    #[test]
    fn check_succeeds_on_valid_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("topgen.conf");
        std::fs::write(
            &path,
            "project = \"a\"\npackage = \"b\"\nrequires = [\"x\"]\n",
        )
        .expect("write config");

        assert!(run(&opts(path), &Logger::new()).is_ok());
    }

    #[test]
    fn check_fails_on_missing_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = run(&opts(dir.path().join("absent.conf")), &Logger::new())
            .expect_err("missing config should fail");
        assert!(err.to_string().contains("not found"), "{err}");
    }

    #[test]
    fn check_fails_on_missing_required_key() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("topgen.conf");
        std::fs::write(&path, "project = \"a\"\n").expect("write config");

        let err = run(&opts(path), &Logger::new()).expect_err("should fail validation");
        assert!(err.to_string().contains("package"), "{err}");
    }
}
