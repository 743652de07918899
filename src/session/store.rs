//! Pluggable session stores.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::workspace::Workspace;

/// An externally-owned store for session snapshots.
///
/// The editor core never decides where state lives; hosts hand it a store
/// and call [`load`](SessionStore::load) on startup and
/// [`save`](SessionStore::save) after each mutation.
pub trait SessionStore {
    /// Read the persisted snapshot, if any. `Ok(None)` means the store has
    /// never been written.
    fn load(&self) -> Result<Option<Workspace>>;

    /// Persist the workspace, replacing any previous snapshot.
    fn save(&mut self, workspace: &Workspace) -> Result<()>;

    /// Load the persisted workspace, degrading to the default workspace
    /// when the store is empty or the snapshot is unreadable.
    fn load_or_default(&self) -> Workspace {
        self.load().ok().flatten().unwrap_or_default()
    }
}

// --- Implementation: Local File ---

/// A store backed by a JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<Workspace>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)?;
        Ok(Some(Workspace::from_json(&blob)?))
    }

    fn save(&mut self, workspace: &Workspace) -> Result<()> {
        fs::write(&self.path, workspace.to_json()?)?;
        Ok(())
    }
}

// --- Implementation: In-Memory ---

/// An in-memory store, for tests and for hosts that shuttle the blob
/// elsewhere themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored blob, if any.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Workspace>> {
        match self.blob.as_deref() {
            Some(blob) => Ok(Some(Workspace::from_json(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, workspace: &Workspace) -> Result<()> {
        self.blob = Some(workspace.to_json()?);
        Ok(())
    }
}
