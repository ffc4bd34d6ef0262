use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing or watching a directory
#[derive(Error, Debug)]
pub enum DirViewError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Directory is outside the allowed scope: {0:?}")]
    OutOfScope(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DirViewError>;

impl DirViewError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DirViewError::Config(msg.into())
    }
}
