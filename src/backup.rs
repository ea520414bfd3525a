// On-disk audit copies of request/response pairs

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::provider::{SearchRequestBody, SearchResponse};

// A single request/response pair as written to the backup directory.
// Written once per call, never read back by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub request: SearchRequestBody,
    pub response: SearchResponse,
}

// Writes the pair to `<dir>/<timestamp>-<suffix>.json` and returns the path.
//
// The file is opened with `create_new` and the random suffix is regenerated
// on a name collision, so concurrent calls never overwrite each other. The
// directory itself must already exist.
pub fn write_backup(
    dir: &Path,
    request: &SearchRequestBody,
    response: &SearchResponse,
) -> Result<PathBuf, ApiError> {
    let record = BackupRecord {
        request: request.clone(),
        response: response.clone(),
    };

    loop {
        let path = dir.join(backup_file_name());
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                serde_json::to_writer_pretty(file, &record).map_err(std::io::Error::from)?;
                debug!(path = %path.display(), "wrote backup");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(ApiError::Backup(e)),
        }
    }
}

// UTC timestamp at millisecond resolution plus a random suffix, e.g.
// `20161214T093012.417-1a2b3c4d.json`.
fn backup_file_name() -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
    format!("{}-{:08x}.json", stamp, rand::random::<u32>())
}
