//! The `gen` command: splice the rendered dependency section into each
//! target file.

use anyhow::Result;

use crate::cli::{GenOpts, GlobalOpts};
use crate::config::render;
use crate::logging::Logger;
use crate::splice::{self, MarkerStyle};

/// Run the gen command.
///
/// The section body is rendered once from the configuration, then spliced
/// into every target under the chosen tag. Marker style is inferred per
/// target from its extension unless `--style` forces one. In dry-run mode
/// each target is previewed and reported but left untouched.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or any target
/// cannot be read or rewritten. Targets are processed in order; the first
/// failure stops the run.
pub fn run(global: &GlobalOpts, opts: &GenOpts, log: &Logger) -> Result<()> {
    let config = super::load_config(global, log)?;
    let body = render::section_body(&config);

    log.stage("Updating targets");
    for target in &opts.targets {
        let style = opts
            .style
            .map_or_else(|| MarkerStyle::for_path(target), MarkerStyle::from);
        let shown = target.display();

        if global.dry_run {
            let (_, changed) = splice::splice_preview(target, &opts.tag, &body, style)?;
            if changed {
                log.dry_run(&format!("{shown}: would update section \"{}\"", opts.tag));
            } else {
                log.dry_run(&format!("{shown}: up to date"));
            }
        } else {
            splice::splice_file(target, &opts.tag, &body, style)?;
            log.info(&format!("{shown}: section \"{}\" updated", opts.tag));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join("topgen.conf");
        std::fs::write(
            &path,
            "project = \"calc\"\npackage = \"calc-lib\"\nrequires = [\"str\" \"unix\"]\n",
        )
        .expect("write config");
        path
    }

    fn opts_for(targets: Vec<PathBuf>) -> GenOpts {
        GenOpts {
            targets,
            tag: "META".to_string(),
            style: None,
        }
    }

    #[test]
    fn gen_creates_section_in_new_target() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = write_config(dir.path());
        let target = dir.path().join("META");

        let global = GlobalOpts {
            config,
            dry_run: false,
        };
        run(&global, &opts_for(vec![target.clone()]), &Logger::new()).expect("gen should succeed");

        let content = std::fs::read_to_string(&target).expect("read target");
        assert_eq!(
            content,
            "# begin topgen META\nrequires = \"str unix\"\n# end\n"
        );
    }

    #[test]
    fn gen_is_idempotent_across_runs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = write_config(dir.path());
        let target = dir.path().join("META");
        std::fs::write(&target, "# hand-written preamble\n").expect("seed target");

        let global = GlobalOpts {
            config,
            dry_run: false,
        };
        run(&global, &opts_for(vec![target.clone()]), &Logger::new()).expect("first run");
        let first = std::fs::read_to_string(&target).expect("read target");
        run(&global, &opts_for(vec![target.clone()]), &Logger::new()).expect("second run");
        let second = std::fs::read_to_string(&target).expect("read target");
        assert_eq!(first, second);
        assert!(first.starts_with("# hand-written preamble\n"));
    }

    #[test]
    fn gen_dry_run_leaves_targets_untouched() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = write_config(dir.path());
        let target = dir.path().join("META");

        let global = GlobalOpts {
            config,
            dry_run: true,
        };
        run(&global, &opts_for(vec![target.clone()]), &Logger::new()).expect("dry run");
        assert!(!target.exists(), "dry run must not create the target");
    }

    #[test]
    fn gen_uses_block_style_for_ml_targets() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = write_config(dir.path());
        let target = dir.path().join("calc.ml");

        let global = GlobalOpts {
            config,
            dry_run: false,
        };
        run(&global, &opts_for(vec![target.clone()]), &Logger::new()).expect("gen should succeed");

        let content = std::fs::read_to_string(&target).expect("read target");
        assert!(content.starts_with("(* begin topgen META *)\n"), "{content}");
    }
}
