#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for the `gen` command: the full workflow of loading
//! a config and splicing the rendered dependency section into real files,
//! across repeated runs and user edits.

mod common;

use common::{FULL_CONFIG, TestProject};
use topgen::cli::{GenOpts, GlobalOpts};
use topgen::commands;
use topgen::logging::Logger;

fn run_gen(project: &TestProject, targets: &[&str], dry_run: bool) {
    let global = GlobalOpts {
        config: project.root().join("topgen.conf"),
        dry_run,
    };
    let opts = GenOpts {
        targets: targets.iter().map(|t| project.root().join(t)).collect(),
        tag: "META".to_string(),
        style: None,
    };
    commands::generate::run(&global, &opts, &Logger::new()).expect("gen should succeed");
}

// ---------------------------------------------------------------------------
// Section creation and refresh
// ---------------------------------------------------------------------------

#[test]
fn gen_creates_missing_targets() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);

    run_gen(&project, &["META"], false);

    assert_eq!(
        project.read_file("META"),
        "# begin topgen META\nrequires = \"str unix\"\nflags = \"-w\"\n# end\n"
    );
}

#[test]
fn gen_updates_multiple_targets_with_per_target_style() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);
    project.write_file("build.ml", "let () = ()\n");

    run_gen(&project, &["META", "build.ml"], false);

    assert!(project.read_file("META").starts_with("# begin topgen META\n"));
    assert_eq!(
        project.read_file("build.ml"),
        "let () = ()\n\n(* begin topgen META *)\n\
         requires = \"str unix\"\nflags = \"-w\"\n(* end *)\n"
    );
}

#[test]
fn gen_refreshes_section_when_config_changes() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);
    run_gen(&project, &["META"], false);

    // Drop a dependency and re-run: only the section body changes.
    project.write_config(
        "project = \"calc\"\npackage = \"calc-lib\"\nrequires = [\"str\"]\nflags = [\"-w\"]\n",
    );
    run_gen(&project, &["META"], false);

    assert_eq!(
        project.read_file("META"),
        "# begin topgen META\nrequires = \"str\"\nflags = \"-w\"\n# end\n"
    );
}

// ---------------------------------------------------------------------------
// Preservation of user content
// ---------------------------------------------------------------------------

#[test]
fn gen_preserves_user_edits_around_the_section() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);
    project.write_file("META", "name = \"calc\"\nversion = \"1.0\"\n");

    run_gen(&project, &["META"], false);

    // User appends after the generated section, then the config changes.
    let edited = format!("{}# maintainer note\n", project.read_file("META"));
    project.write_file("META", &edited);
    project.write_config(
        "project = \"calc\"\npackage = \"calc-lib\"\nrequires = [\"bytes\"]\n",
    );
    run_gen(&project, &["META"], false);

    assert_eq!(
        project.read_file("META"),
        "name = \"calc\"\nversion = \"1.0\"\n\n\
         # begin topgen META\nrequires = \"bytes\"\n# end\n\
         # maintainer note\n"
    );
}

#[test]
fn gen_is_byte_for_byte_idempotent() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);
    project.write_file("META", "preamble\n");

    run_gen(&project, &["META"], false);
    let first = project.read_file("META");
    run_gen(&project, &["META"], false);
    assert_eq!(project.read_file("META"), first);
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

#[test]
fn gen_dry_run_writes_nothing() {
    let project = TestProject::new();
    project.write_config(FULL_CONFIG);
    project.write_file("META", "untouched\n");

    run_gen(&project, &["META"], true);

    assert_eq!(project.read_file("META"), "untouched\n");
}
