//! The multi-file editing workspace.
//!
//! Central data model of the editor: a set of named documents with one
//! active selection. The surrounding shell drives it through the
//! file-management operations here (create, rename, delete, select, edit,
//! import) and passes the active document's content to [`crate::render`]
//! for the preview pane.
//!
//! A workspace always holds at least one document; removing the last one is
//! refused. Document ids are monotonically increasing and never reused.

use crate::error::{Error, Result};

/// Identifier for a document within a workspace.
pub type FileId = u64;

/// Seed content for a fresh workspace.
const WELCOME: &str = r#"# Welcome

## Features

- Multiple files
- Live preview
- Collapsible sidebar
- Automatic session persistence

### Getting Started

Start typing your **Markdown** content!

```javascript
console.log("Hello, Markdown!");
```

> This is a blockquote"#;

/// One named document. The name is a user-facing label with no uniqueness
/// constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: FileId,
    pub name: String,
    pub content: String,
}

/// A set of documents with one active selection.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub(crate) files: Vec<Document>,
    pub(crate) current_id: FileId,
    pub(crate) next_id: FileId,
    /// UI layout flag, persisted with the session.
    pub sidebar_collapsed: bool,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            files: vec![Document {
                id: 1,
                name: "welcome.md".to_owned(),
                content: WELCOME.to_owned(),
            }],
            current_id: 1,
            next_id: 2,
            sidebar_collapsed: false,
        }
    }
}

impl Workspace {
    /// Create a workspace seeded with the welcome document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a workspace from persisted parts, repairing anything a stale
    /// or hand-edited snapshot may have broken: an empty file list falls
    /// back to the default workspace, an unknown selection moves to the
    /// first file, and the id counter is bumped past every existing id.
    pub(crate) fn from_parts(
        files: Vec<Document>,
        current_id: FileId,
        next_id: FileId,
        sidebar_collapsed: bool,
    ) -> Self {
        if files.is_empty() {
            return Self {
                sidebar_collapsed,
                ..Self::default()
            };
        }
        let current_id = if files.iter().any(|f| f.id == current_id) {
            current_id
        } else {
            files[0].id
        };
        let max_id = files.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            files,
            current_id,
            next_id: next_id.max(max_id + 1),
            sidebar_collapsed,
        }
    }

    /// Documents in creation order.
    pub fn files(&self) -> &[Document] {
        &self.files
    }

    /// Get a document by id.
    pub fn file(&self, id: FileId) -> Option<&Document> {
        self.files.iter().find(|f| f.id == id)
    }

    /// The active document.
    pub fn current(&self) -> &Document {
        self.files
            .iter()
            .find(|f| f.id == self.current_id)
            .unwrap_or(&self.files[0])
    }

    /// Id of the active document.
    pub fn current_id(&self) -> FileId {
        self.current_id
    }

    /// Create a new empty document and make it active. Returns its id.
    pub fn create_file(&mut self) -> FileId {
        let id = self.next_id;
        self.next_id += 1;
        self.files.push(Document {
            id,
            name: format!("untitled{id}.md"),
            content: String::new(),
        });
        self.current_id = id;
        id
    }

    /// Add a document under a caller-supplied name (e.g. an imported file)
    /// and make it active. Returns its id.
    pub fn import(&mut self, name: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = self.next_id;
        self.next_id += 1;
        self.files.push(Document {
            id,
            name: name.into(),
            content: content.into(),
        });
        self.current_id = id;
        id
    }

    /// Remove a document. Refused for the last remaining document; when the
    /// active document is removed, selection moves to the first survivor.
    pub fn remove_file(&mut self, id: FileId) -> Result<()> {
        if self.files.len() == 1 {
            return Err(Error::LastFile);
        }
        let index = self.index_of(id)?;
        self.files.remove(index);
        if self.current_id == id {
            self.current_id = self.files[0].id;
        }
        Ok(())
    }

    /// Rename a document.
    pub fn rename_file(&mut self, id: FileId, name: impl Into<String>) -> Result<()> {
        let index = self.index_of(id)?;
        self.files[index].name = name.into();
        Ok(())
    }

    /// Make the given document active.
    pub fn select(&mut self, id: FileId) -> Result<()> {
        self.index_of(id)?;
        self.current_id = id;
        Ok(())
    }

    /// Replace the active document's content (one edit keystroke's worth of
    /// state in the editor shell).
    pub fn update_content(&mut self, content: impl Into<String>) {
        let id = self.current_id;
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.content = content.into();
        }
    }

    /// The document's name and content, for host-side export (a file
    /// download or the clipboard).
    pub fn export(&self, id: FileId) -> Result<(&str, &str)> {
        let file = self.file(id).ok_or(Error::UnknownFile(id))?;
        Ok((&file.name, &file.content))
    }

    fn index_of(&self, id: FileId) -> Result<usize> {
        self.files
            .iter()
            .position(|f| f.id == id)
            .ok_or(Error::UnknownFile(id))
    }
}
