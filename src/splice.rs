//! Idempotent splicing of a machine-owned, tagged section into an
//! otherwise user-owned text file.
//!
//! A section is a run of lines delimited by a start marker carrying a tag
//! (`begin topgen <TAG>`) and a fixed end marker (`end`), each wrapped in
//! the host file's comment syntax. [`splice_text`] is a pure transform;
//! [`splice_file`] applies it to a path with an atomic
//! temp-file-and-rename write so an interrupted run never leaves a
//! truncated target.
//!
//! Everything outside the marked section, including edits the user made
//! after a previous run, is preserved verbatim and in order, with line
//! terminators normalized to `\n`. Running the same splice twice leaves
//! the file byte-for-byte unchanged.

use std::io::Write as _;
use std::path::Path;

use crate::error::SpliceError;

/// Tool name embedded in every marker line.
pub const TOOL: &str = "topgen";

/// Comment style used to wrap the section markers.
///
/// The target file's syntax dictates the choice: `#` line comments for
/// build files and the like, `(* … *)` comments for ML-family sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// `# begin topgen TAG` … `# end`
    Hash,
    /// `(* begin topgen TAG *)` … `(* end *)`
    Block,
}

impl MarkerStyle {
    /// Build the start marker line for `tag`.
    #[must_use]
    pub fn start_marker(self, tag: &str) -> String {
        match self {
            Self::Hash => format!("# begin {TOOL} {tag}"),
            Self::Block => format!("(* begin {TOOL} {tag} *)"),
        }
    }

    /// The fixed end marker line.
    #[must_use]
    pub const fn end_marker(self) -> &'static str {
        match self {
            Self::Hash => "# end",
            Self::Block => "(* end *)",
        }
    }

    /// Infer the style from a target path's extension: ML-family sources
    /// take block comments, everything else hash comments.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ml" | "mli" | "mll" | "mly") => Self::Block,
            _ => Self::Hash,
        }
    }
}

/// Replace (or append) the tagged section in `original`, returning the
/// new content.
///
/// Scans line by line, copying everything verbatim. The first line equal
/// to the start marker begins the section: it and every following line up
/// to and including the end marker are replaced by the fresh section. A
/// later identical start-marker line is ordinary content and is copied
/// as-is (first match only). Reaching end of input while looking for the
/// end marker is treated as having found it.
///
/// If no start marker occurs, the section is appended at the end, after a
/// blank separator line when `original` is non-empty.
#[must_use]
pub fn splice_text(original: &str, tag: &str, body: &str, style: MarkerStyle) -> String {
    let start = style.start_marker(tag);
    let end = style.end_marker();

    let mut out = String::with_capacity(original.len() + body.len());
    let mut replaced = false;
    let mut lines = original.lines();

    while let Some(line) = lines.next() {
        if !replaced && line == start {
            replaced = true;
            push_section(&mut out, &start, body, end);
            // Skip the stale section; EOF counts as the end marker.
            for skipped in lines.by_ref() {
                if skipped == end {
                    break;
                }
            }
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    if !replaced {
        if !out.is_empty() {
            out.push('\n');
        }
        push_section(&mut out, &start, body, end);
    }
    out
}

/// Compute what splicing would write to `path`, without writing.
///
/// Returns the updated content and whether it differs from what the file
/// currently holds (a missing file always differs).
///
/// # Errors
///
/// Returns [`SpliceError::Io`] if the file exists but cannot be read.
pub fn splice_preview(
    path: &Path,
    tag: &str,
    body: &str,
    style: MarkerStyle,
) -> Result<(String, bool), SpliceError> {
    match std::fs::read_to_string(path) {
        Ok(original) => {
            let updated = splice_text(&original, tag, body, style);
            let changed = updated != original;
            Ok((updated, changed))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let mut fresh = String::new();
            push_section(&mut fresh, &style.start_marker(tag), body, style.end_marker());
            Ok((fresh, true))
        }
        Err(source) => Err(SpliceError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Splice the tagged section into the file at `path`.
///
/// A missing file is created containing exactly the section. An existing
/// file is read fully, transformed in memory with [`splice_text`], and
/// replaced by writing a temporary file in the same directory and
/// renaming it over the target. Callers must not splice the same path
/// concurrently; no locking is provided.
///
/// # Errors
///
/// Returns [`SpliceError::Io`] if the file cannot be read (other than not
/// existing), or if the temporary file cannot be written or renamed.
pub fn splice_file(
    path: &Path,
    tag: &str,
    body: &str,
    style: MarkerStyle,
) -> Result<(), SpliceError> {
    let io_err = |source| SpliceError::Io {
        path: path.display().to_string(),
        source,
    };

    let (updated, _) = splice_preview(path, tag, body, style)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(updated.as_bytes()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

fn push_section(out: &mut String, start: &str, body: &str, end: &str) {
    out.push_str(start);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(end);
    out.push('\n');
}
