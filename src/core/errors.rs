use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
