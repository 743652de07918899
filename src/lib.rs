//! # mdpad
//!
//! The core of a multi-file Markdown editor with a live HTML preview.
//!
//! ## Features
//!
//! - Render Markdown-like text to HTML through an ordered rewrite pipeline
//! - Manage a workspace of named documents (create, rename, delete, select)
//! - Persist the session as a JSON snapshot via pluggable stores
//! - Optional WASM bindings for browser embedding
//!
//! ## Quick Start
//!
//! ```
//! use mdpad::render;
//!
//! let html = render("# Hello\n\nSome **bold** text.");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```
//!
//! ## Working with Workspaces
//!
//! The [`Workspace`] struct is the central data type, holding the file list
//! and the active selection:
//!
//! ```
//! use mdpad::{render, Workspace};
//!
//! let mut workspace = Workspace::new();
//! workspace.import("notes.md", "# Notes");
//! workspace.update_content("# Notes\n\n- first item");
//!
//! // The preview pane shows the active document
//! let html = render(&workspace.current().content);
//! assert!(html.contains("<li>first item</li>"));
//! ```
//!
//! Rendering is total: any input string produces some output string, so the
//! preview never fails mid-keystroke. The output is not sanitized; hosts
//! rendering untrusted input are responsible for sandboxing.

pub mod error;
pub mod preview;
pub mod session;
pub mod workspace;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use preview::render;
pub use session::{FileStore, MemoryStore, SessionStore, SESSION_KEY};
pub use workspace::{Document, FileId, Workspace};
