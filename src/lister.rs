use crate::config::ListingConfig;
use crate::entry::DirEntry;
use crate::error::{DirViewError, Result};
use crate::scope::FsScope;
use crate::utils::file::is_hidden;
use log::{debug, warn};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

pub struct DirLister {
    scope: FsScope,
    options: ListingConfig,
}

impl DirLister {
    pub fn new(scope: FsScope, options: ListingConfig) -> Self {
        Self { scope, options }
    }

    /// Lists `dir`, dropping hidden entries unless `show_hidden` is set.
    pub fn list(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        if !dir.exists() {
            return Err(DirViewError::NotFound(dir.to_path_buf()));
        }

        if !dir.is_dir() {
            return Err(DirViewError::NotADirectory(dir.to_path_buf()));
        }

        if !self.scope.is_allowed(dir) {
            return Err(DirViewError::OutOfScope(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        let mut hidden = 0usize;

        for item in fs::read_dir(dir)? {
            let entry = match item
                .map_err(anyhow::Error::from)
                .and_then(|e| DirEntry::from_fs(&e))
            {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            if !self.options.show_hidden && is_hidden(&entry) {
                hidden += 1;
                continue;
            }

            entries.push(entry);
        }

        self.sort(&mut entries);

        debug!(
            "Listed {} entries in {:?} ({} hidden skipped)",
            entries.len(),
            dir,
            hidden
        );

        Ok(entries)
    }

    fn sort(&self, entries: &mut [DirEntry]) {
        let directories_first = self.options.directories_first;

        entries.sort_by(|a, b| {
            let by_kind = if directories_first {
                b.is_directory.cmp(&a.is_directory)
            } else {
                Ordering::Equal
            };

            by_kind
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}
