use crate::entry::DirEntry;
use anyhow::{Context, Result};

/// One entry per line; directories end in `/`, symlinks in `@`.
pub fn render_text(entries: &[DirEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_line(entry));
        out.push('\n');
    }
    out
}

pub fn render_line(entry: &DirEntry) -> String {
    let suffix = if entry.is_symlink {
        "@"
    } else if entry.is_directory {
        "/"
    } else {
        ""
    };
    format!("{}{}", entry.name, suffix)
}

pub fn render_json(entries: &[DirEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize entries")
}
