//! The `splice` command: direct access to the section splicer for a
//! single target and caller-supplied body.

use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, SpliceOpts};
use crate::logging::Logger;
use crate::splice::{self, MarkerStyle};

/// Run the splice command.
///
/// The body is read from `--body-file` when given, otherwise from stdin.
/// A trailing newline on the body is dropped so the section always ends
/// with exactly one newline before the end marker.
///
/// # Errors
///
/// Returns an error if the body cannot be read or the target cannot be
/// rewritten.
pub fn run(global: &GlobalOpts, opts: &SpliceOpts, log: &Logger) -> Result<()> {
    let body = match &opts.body_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading body file {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading body from stdin")?,
    };
    let body = body.strip_suffix('\n').unwrap_or(&body);

    let style = opts
        .style
        .map_or_else(|| MarkerStyle::for_path(&opts.target), MarkerStyle::from);
    let shown = opts.target.display();

    if global.dry_run {
        let (_, changed) = splice::splice_preview(&opts.target, &opts.tag, body, style)?;
        if changed {
            log.dry_run(&format!("{shown}: would update section \"{}\"", opts.tag));
        } else {
            log.dry_run(&format!("{shown}: up to date"));
        }
        return Ok(());
    }

    splice::splice_file(&opts.target, &opts.tag, body, style)?;
    log.info(&format!("{shown}: section \"{}\" updated", opts.tag));
    Ok(())
}
