//! Markdown → HTML preview rendering.
//!
//! This module implements the live-preview half of the editor: a pure
//! transformation from Markdown-like source text to an HTML string. The
//! design is a fixed, ordered chain of pattern rewrites over a single text
//! buffer rather than a parse tree:
//!
//! - [`rules`]: the rewrite rule table (pattern, replacement, scope)
//! - [`pipeline`]: the driver that threads the buffer through the table
//!
//! ## Design Notes
//!
//! Rule order is part of the contract; changing it changes output:
//!
//! - **Headings match longest-prefix-first** so the `#` rule never swallows
//!   `##`/`###` lines
//! - **Strong emphasis runs before emphasis** so `**bold**` is not consumed
//!   as two italic spans
//! - **Fenced code runs before inline code** so a fence is not broken into
//!   spurious inline pieces
//! - **Images run before links** because `[alt](url)` is a strict substring
//!   of the image syntax
//! - **Paragraph wrapping runs last**, over the already-transformed buffer,
//!   so blank lines introduced by earlier replacements also split paragraphs
//!
//! Malformed input never fails: a rule whose pattern does not match leaves
//! the buffer unchanged, and unbalanced markers stay in the output as
//! literal text.

mod pipeline;
mod rules;

pub use pipeline::render;
