//! A collection of utility functions for directory entries.

use crate::entry::DirEntry;

/// Leading characters that mark an entry as hidden: the Unix dotfile
/// convention plus `$`-prefixed names such as `$RECYCLE.BIN`.
pub const HIDDEN_PREFIXES: [char; 2] = ['.', '$'];

/// True when the entry's name starts with "." or "$".
pub fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(&entry.name)
}

/// True when `name` starts with "." or "$"; the rest of the name is not inspected.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIXES[0]) || name.starts_with(HIDDEN_PREFIXES[1])
}
