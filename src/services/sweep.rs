use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::errors::{Error, Result};
use crate::models::report::{SweepFailure, SweepReport};

/// Suffix swept when the caller does not override it.
pub const DEFAULT_SUFFIX: &str = ".tsx";

/// Recursively deletes every regular file under `root` whose name ends with
/// `suffix`, collecting per-file outcomes into a [`SweepReport`].
///
/// A deletion failure is recorded and the sweep continues with the remaining
/// files. Symlinks are not followed; only regular files are candidates.
pub fn sweep(root: &Path, suffix: &str) -> Result<SweepReport> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    let mut report = SweepReport::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error under {}: {}", root.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_suffix(entry.file_name(), suffix) {
            continue;
        }

        let path = entry.into_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("deleted {}", path.display());
                report.deleted.push(path);
            }
            Err(err) => {
                tracing::warn!("failed to delete {}: {}", path.display(), err);
                report.failed.push(SweepFailure {
                    path,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

// Exact trailing-substring match on the file name, case-sensitive. Names that
// are not valid UTF-8 never match.
fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.to_str().is_some_and(|n| n.ends_with(suffix))
}
