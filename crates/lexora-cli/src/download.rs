//! Saving downloaded documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Write `payload` as `filename` into `dir`, or the user's download directory.
///
/// Best effort: when no directory is available or the write fails, this logs
/// and returns. Only the final component of `filename` is used.
pub fn save_download(payload: &[u8], filename: &str, dir: Option<&Path>) {
    let target = dir.map(Path::to_path_buf).or_else(dirs::download_dir);
    save_into(payload, filename, target);
}

fn save_into(payload: &[u8], filename: &str, dir: Option<PathBuf>) {
    let Some(dir) = dir else {
        debug!(filename, "no download directory available, skipping save");
        return;
    };
    let Some(name) = Path::new(filename).file_name() else {
        warn!(filename, "download has no usable filename, skipping save");
        return;
    };

    let path = dir.join(name);
    match fs::write(&path, payload) {
        Ok(()) => info!(path = %path.display(), bytes = payload.len(), "saved download"),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to save download"),
    }
}
