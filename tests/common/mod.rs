// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project so each integration test
// can set up an isolated config file and target files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated project directory backed by a [`tempfile::TempDir`].
pub struct TestProject {
    dir: tempfile::TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Root of the project directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `topgen.conf` with the given text and return its path.
    pub fn write_config(&self, text: &str) -> PathBuf {
        let path = self.root().join("topgen.conf");
        std::fs::write(&path, text).expect("write topgen.conf");
        path
    }

    /// Write an arbitrary file under the project root and return its path.
    pub fn write_file(&self, name: &str, text: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, text).expect("write project file");
        path
    }

    /// Read a file under the project root.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.root().join(name)).expect("read project file")
    }
}

/// A config file with every recognized key populated.
pub const FULL_CONFIG: &str = "\
# generated-project metadata
project  = \"calc\"
package  = \"calc-lib\"
requires = [\"str\" \"unix\"]
flags    = [\"-w\"]
";
