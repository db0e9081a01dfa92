//! Frontmatter splitting and parsing.
//!
//! Frontmatter is a YAML key/value block delimited by `---` lines at the
//! very top of a document. This module is the one place in the crate
//! that surfaces a structured error: a block that is present but not
//! valid YAML yields [`FrontmatterError`]. Even then, the caller can
//! keep processing the body; nothing here halts the document.

use std::sync::LazyLock;

use log::error;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::utils::never_matching_regex;

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?sm)\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?(?:\n|\z)")
    .unwrap_or_else(|e| {
      error!("Failed to compile FRONTMATTER_RE regex: {e}");
      never_matching_regex()
    })
});

/// Error produced when a frontmatter block is present but unusable.
#[derive(Debug, Error)]
pub enum FrontmatterError {
  #[error("invalid YAML in frontmatter: {0}")]
  Parse(#[from] serde_yaml::Error),

  #[error("frontmatter is not a key/value mapping")]
  NotAMapping,
}

/// True when the document opens with a `---` delimiter line.
///
/// This says nothing about whether the block is terminated or parses;
/// the validator uses it to distinguish "no frontmatter" from "broken
/// frontmatter".
#[must_use]
pub fn has_frontmatter_delimiter(text: &str) -> bool {
  text
    .lines()
    .next()
    .is_some_and(|line| line.trim_end() == "---")
}

/// Split a document into its raw frontmatter block and body.
///
/// Returns `None` when the document does not open with a terminated
/// `---` block. The first element is the raw interior of the block, the
/// second the body after the closing delimiter.
#[must_use]
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
  let caps = FRONTMATTER_RE.captures(text)?;
  let raw = caps.get(1)?.as_str();
  let end = caps.get(0)?.end();
  Some((raw, &text[end..]))
}

/// Parse the document's frontmatter into a YAML mapping.
///
/// `Ok(None)` when the document has no frontmatter block at all. An
/// empty block parses to an empty mapping. A block that is valid YAML
/// but not a mapping (e.g. a bare list) is rejected, since frontmatter
/// is a key/value contract.
///
/// # Errors
///
/// [`FrontmatterError`] when the block does not parse as YAML or is not
/// a mapping.
pub fn parse_frontmatter(
  text: &str,
) -> Result<Option<Mapping>, FrontmatterError> {
  let Some((raw, _body)) = split_frontmatter(text) else {
    return Ok(None);
  };

  if raw.trim().is_empty() {
    return Ok(Some(Mapping::new()));
  }

  let value: Value = serde_yaml::from_str(raw)?;
  match value {
    Value::Mapping(mapping) => Ok(Some(mapping)),
    _ => Err(FrontmatterError::NotAMapping),
  }
}

/// Look up a string field in a frontmatter mapping.
#[must_use]
pub fn frontmatter_str<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a str> {
  mapping
    .get(&Value::String(key.to_string()))
    .and_then(Value::as_str)
}
