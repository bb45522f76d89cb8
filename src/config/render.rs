//! Render a [`Config`] back into configuration syntax, and build the
//! generated-section bodies used by `gen`.
//!
//! Rendering exists so that a projected config can be written back out in
//! the same language it was read from; `parse` of a rendered config yields
//! an equal `Config` (round-trip stability).

use super::Config;

/// Render a config as configuration-language text.
///
/// Output is canonical: one entry per line, strings quoted with `"` and
/// `\` escaped, lists inline with comma separators.
///
/// # Examples
///
/// ```
/// use topgen::config::{Config, render};
///
/// let config = Config {
///     project: "calc".to_string(),
///     package: "calc-lib".to_string(),
///     requires: vec!["str".to_string()],
///     flags: vec![],
/// };
/// let text = render::render(&config);
/// assert_eq!(Config::parse(&text, "rendered").unwrap(), config);
/// ```
#[must_use]
pub fn render(config: &Config) -> String {
    format!(
        "project = {}\npackage = {}\nrequires = {}\nflags = {}\n",
        quote(&config.project),
        quote(&config.package),
        list(&config.requires),
        list(&config.flags),
    )
}

/// Render the body of the generated section spliced into target files:
/// a `requires` line with space-joined dependencies, plus a `flags` line
/// when any flags are configured.
#[must_use]
pub fn section_body(config: &Config) -> String {
    let mut body = format!("requires = \"{}\"", config.requires.join(" "));
    if !config.flags.is_empty() {
        body.push_str(&format!("\nflags = \"{}\"", config.flags.join(" ")));
    }
    body
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}
