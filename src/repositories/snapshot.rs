//! On-disk layout of the directory.

use crate::directory::Directory;
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// The versioned document written to disk.
///
/// ```json
/// { "version": 1, "records": [ { "name": "...", "phones": [], "birthday": null } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectorySnapshot {
    pub version: u32,
    pub records: Vec<Record>,
}

/// Just the version tag, read before the rest of the document so that a
/// future layout is reported as a version mismatch rather than corruption.
#[derive(Debug, Deserialize)]
pub(super) struct VersionTag {
    pub version: u32,
}

impl From<&Directory> for DirectorySnapshot {
    fn from(directory: &Directory) -> Self {
        Self {
            version: FORMAT_VERSION,
            records: directory.records().cloned().collect(),
        }
    }
}

impl From<DirectorySnapshot> for Directory {
    fn from(snapshot: DirectorySnapshot) -> Self {
        snapshot.records.into_iter().collect()
    }
}
