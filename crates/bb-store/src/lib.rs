//! Snapshot persistence for the baby tracker.
//!
//! The whole tracker state is one JSON document, rewritten after every
//! mutation and reread on startup. There is no partial update: the
//! in-memory [`Tracker`] is the source of truth for the running session
//! and the snapshot only has to survive process restarts.
//!
//! # Format
//!
//! The document is a versioned envelope:
//!
//! ```json
//! { "version": 1, "tracker": { ... } }
//! ```
//!
//! The version tag exists so a future format change can migrate old
//! snapshots instead of discarding them. Unknown versions load leniently
//! (with a warning) as long as the tracker body still parses.
//!
//! # Durability
//!
//! Writes go to a `.tmp` sibling first, sync, then rename over the
//! target, so a crash mid-write leaves the previous snapshot intact.
//! Concurrent writers are not guarded against: the last writer wins.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bb_core::Tracker;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the filesystem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot could not be serialized or parsed.
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The on-disk envelope around the tracker state.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    tracker: Tracker,
}

/// Handle to the snapshot file location.
///
/// Cheap to construct; nothing is opened until [`load`](Self::load) or
/// [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Points at a snapshot location, existing or not.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the snapshot. `Ok(None)` when the file does not
    /// exist yet.
    pub fn load(&self) -> Result<Option<Tracker>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                version = snapshot.version,
                expected = SNAPSHOT_VERSION,
                "snapshot version differs; loading leniently"
            );
        }
        Ok(Some(snapshot.tracker))
    }

    /// Loads the snapshot, falling back to a fresh tracker with `today`
    /// selected when the file is missing or unparseable. A corrupt file
    /// is reported but never fatal; the caller keeps working from empty
    /// state.
    #[must_use]
    pub fn load_or_default(&self, today: NaiveDate) -> Tracker {
        match self.load() {
            Ok(Some(tracker)) => tracker,
            Ok(None) => Tracker::new(today),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "snapshot unreadable; starting from empty state"
                );
                Tracker::new(today)
            }
        }
    }

    /// Serializes the full tracker state and atomically replaces the
    /// snapshot file, creating parent directories as needed.
    pub fn save(&self, tracker: &Tracker) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            tracker: tracker.clone(),
        };
        let body = serde_json::to_vec_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&body)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), bytes = body.len(), "snapshot written");
        Ok(())
    }
}
