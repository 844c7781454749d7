//! Utilities for the records output format
//!
//! One record per line, tagged by its first character:
//! - `H` header: `H wayfinder=1 records=1 mode=<mode> key=value...`; labels
//!   and paths are quoted like any other field (`source="new york"`)
//! - `V` vertex: `V "<label>" <weight>`
//! - `E` edge: `E "<from>" "<to>" <weight>`
//! - `P` path step: `P <hop> "<label>"`

use std::path::Path;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Convert an absolute path to a path relative to the current working directory
pub fn path_relative_to_cwd(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        path.strip_prefix(&cwd)
            .ok()
            .map(|p| {
                let s = p.display().to_string();
                if s.is_empty() {
                    ".".to_string()
                } else {
                    s
                }
            })
            .unwrap_or_else(|| path.display().to_string())
    } else {
        path.display().to_string()
    }
}

/// Header line; `fields` are appended in order as `key=value`
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H wayfinder=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Wrap a free-form value (label, path) in quotes, escaping inner quotes
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

pub fn format_vertex_record(label: &str, weight: &str) -> String {
    format!("V {} {}", quote(label), weight)
}

pub fn format_edge_record(from: &str, to: &str, weight: &str) -> String {
    format!("E {} {} {}", quote(from), quote(to), weight)
}

pub fn format_path_record(hop: usize, label: &str) -> String {
    format!("P {} {}", hop, quote(label))
}
