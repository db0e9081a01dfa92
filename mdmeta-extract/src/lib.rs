//! # mdmeta-extract - metadata extraction for markdown documents
//!
//! A library of pure, stateless functions that pull metadata and structural
//! information out of loosely-structured markdown text and out of file paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdmeta_extract::{normalize, structure};
//!
//! let doc = "# Release Notes\n\nThe **first** stable release.";
//!
//! assert_eq!(structure::first_heading(doc), "Release Notes");
//! assert_eq!(normalize::word_count(doc), 6);
//! ```
//!
//! ## Design
//!
//! Every pattern-matching function is backed by an explicit compiled rule
//! (a `LazyLock<Regex>` plus an extraction step) so each rule can be tested
//! in isolation. Extraction never fails: a pattern that does not match
//! degrades to an empty string, an empty vector, or `None`. The only
//! structured error in the crate is [`frontmatter::FrontmatterError`], and
//! even a malformed frontmatter block does not stop processing of the rest
//! of the document.
//!
//! Functions that compare against "now" ([`dates::time_ago`]) take an
//! explicit reference instant so they stay deterministic under test.

pub mod dates;
pub mod frontmatter;
pub mod metadata;
pub mod normalize;
pub mod paths;
pub mod structure;
pub mod types;
pub mod utils;
pub mod validate;

pub use crate::{
  metadata::{DocumentMetadata, extract_metadata},
  types::{CodeBlock, Heading, Image, Link, ValidationReport, ValidationStats},
};
