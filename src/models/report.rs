use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one sweep pass over a directory tree.
///
/// Both lists are in traversal-encounter order.
#[derive(Debug, Default, Serialize)]
pub struct SweepReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<SweepFailure>,
}

/// A matching file that could not be removed, with the underlying error text.
#[derive(Debug, Serialize)]
pub struct SweepFailure {
    pub path: PathBuf,
    pub error: String,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
