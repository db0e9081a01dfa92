//! Value records produced by the extraction functions.
//!
//! Every type here is a transient record constructed fresh per call; none
//! of them hold references into the input text. Field names are the JSON
//! contract when a consumer serializes results, so multi-word fields are
//! camelCase on the wire and optional fields are omitted rather than
//! serialized as null or empty.

use serde::Serialize;

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
  /// Heading level, 1-6.
  pub level: u8,

  /// Heading text with the marker and surrounding whitespace removed.
  pub text: String,

  /// Anchor derived from the text: lowercased, non-word characters
  /// stripped, whitespace runs replaced by a single hyphen.
  pub anchor: String,
}

/// A non-image link, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
  pub text: String,
  pub url:  String,
}

/// An image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
  pub alt: String,
  pub src: String,

  /// Present only when a quoted title follows the URL.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}

/// A fenced code block. The fence markers are not part of `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
  /// Language token after the opening fence; "text" when the fence is
  /// bare.
  pub language: String,

  /// Trimmed interior of the block.
  pub content: String,
}

/// Counters reported alongside a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
  pub word_count:    usize,
  pub heading_count: usize,
  pub link_count:    usize,
  pub image_count:   usize,
}

/// Aggregated result of validating a document.
///
/// `is_valid` holds exactly when `errors` is empty; warnings are advisory
/// and never affect it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
  pub is_valid: bool,
  pub errors:   Vec<String>,
  pub warnings: Vec<String>,
  pub stats:    ValidationStats,
}

/// Errors and warnings produced by a single validation rule, before they
/// are folded into a [`ValidationReport`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationIssues {
  pub errors:   Vec<String>,
  pub warnings: Vec<String>,
}

impl ValidationIssues {
  /// True when the rule produced neither errors nor warnings.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.errors.is_empty() && self.warnings.is_empty()
  }

  /// Fold these issues into another set.
  pub fn merge_into(self, other: &mut Self) {
    other.errors.extend(self.errors);
    other.warnings.extend(self.warnings);
  }
}
