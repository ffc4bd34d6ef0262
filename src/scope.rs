use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedDirectory {
    pub path: PathBuf,
    /// Also allow every directory below `path`
    #[serde(default)]
    pub recursive: bool,
}

/// Set of directories that may be listed.
#[derive(Debug, Clone, Default)]
pub struct FsScope {
    allowed: Vec<AllowedDirectory>,
}

impl FsScope {
    pub fn new(allowed: Vec<AllowedDirectory>) -> Self {
        let mut scope = Self::default();
        for dir in allowed {
            scope.allow_directory(&dir.path, dir.recursive);
        }
        scope
    }

    pub fn allow_directory(&mut self, path: &Path, recursive: bool) {
        info!("Allowing directory {:?} (recursive: {})", path, recursive);
        self.allowed.push(AllowedDirectory {
            path: normalize(path),
            recursive,
        });
    }

    pub fn is_allowed(&self, path: &Path) -> bool {
        let path = normalize(path);

        let allowed = self.allowed.iter().any(|dir| {
            path == dir.path || (dir.recursive && path.starts_with(&dir.path))
        });

        debug!("Scope check for {:?}: {}", path, allowed);
        allowed
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
