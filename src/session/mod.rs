//! Session persistence.
//!
//! The workspace survives restarts through an externally-owned store: the
//! editor shell decides where state lives (a JSON file natively, browser
//! localStorage under WASM) and this module defines the snapshot wire
//! format and the load/save contract.
//!
//! - [`SessionStore`]: the load/save trait, with [`FileStore`] and
//!   [`MemoryStore`] implementations
//! - [`Snapshot`](self): the serde model of a persisted session, kept
//!   compatible with blobs written by earlier builds of the editor
//!   (camelCase keys: `files`, `currentFileId`, `nextId`,
//!   `sidebarCollapsed`)
//!
//! Loading degrades rather than fails on the UI path: a missing, corrupt,
//! or internally inconsistent snapshot yields the default workspace.

mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::workspace::{Document, FileId, Workspace};

/// Storage key used by browser hosts for the session blob.
pub const SESSION_KEY: &str = "markdown-editor-data";

/// Wire format of a persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    files: Vec<SnapshotFile>,
    current_file_id: FileId,
    next_id: FileId,
    #[serde(default)]
    sidebar_collapsed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFile {
    id: FileId,
    name: String,
    content: String,
}

impl Snapshot {
    fn from_workspace(workspace: &Workspace) -> Self {
        Self {
            files: workspace
                .files
                .iter()
                .map(|f| SnapshotFile {
                    id: f.id,
                    name: f.name.clone(),
                    content: f.content.clone(),
                })
                .collect(),
            current_file_id: workspace.current_id,
            next_id: workspace.next_id,
            sidebar_collapsed: workspace.sidebar_collapsed,
        }
    }

    fn into_workspace(self) -> Workspace {
        let files = self
            .files
            .into_iter()
            .map(|f| Document {
                id: f.id,
                name: f.name,
                content: f.content,
            })
            .collect();
        Workspace::from_parts(
            files,
            self.current_file_id,
            self.next_id,
            self.sidebar_collapsed,
        )
    }
}

impl Workspace {
    /// Serialize to the snapshot JSON format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&Snapshot::from_workspace(self))?)
    }

    /// Parse a snapshot blob. Structural damage (empty file list, unknown
    /// selection, stale id counter) is repaired; malformed JSON is an
    /// error.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(snapshot.into_workspace())
    }

    /// Parse a snapshot blob, falling back to the default workspace when
    /// the blob is absent or malformed.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        json.and_then(|blob| Self::from_json(blob).ok())
            .unwrap_or_default()
    }
}
