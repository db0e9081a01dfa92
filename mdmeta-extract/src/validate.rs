//! Document validation: structural problems reported as data.
//!
//! Each rule returns its findings as [`ValidationIssues`];
//! [`validate_markdown`] folds every rule into a single
//! [`ValidationReport`]. Errors make a document invalid, warnings are
//! advisory. No rule ever returns `Err` - a broken document is a result,
//! not a failure.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
  frontmatter::{has_frontmatter_delimiter, parse_frontmatter, split_frontmatter},
  normalize, structure,
  types::{ValidationIssues, ValidationReport, ValidationStats},
  utils::never_matching_regex,
};

// A table separator row: pipes, hyphens, colons, and whitespace, with at
// least one hyphen.
static TABLE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*\|?[\s:|-]*-[\s:|-]*\|?\s*$").unwrap_or_else(|e| {
    error!("Failed to compile TABLE_SEPARATOR_RE regex: {e}");
    never_matching_regex()
  })
});

/// Count the cells in a table row, ignoring edge pipes.
fn column_count(row: &str) -> usize {
  let mut cells: Vec<&str> = row.split('|').collect();
  if cells.first().is_some_and(|cell| cell.trim().is_empty()) {
    cells.remove(0);
  }
  if cells.last().is_some_and(|cell| cell.trim().is_empty()) {
    cells.pop();
  }
  cells.len()
}

/// Check the frontmatter block, when one is present.
///
/// An opening delimiter without a closing one is an error, as is a block
/// that fails YAML parsing. An empty (but well-formed) block is only a
/// warning.
#[must_use]
pub fn validate_frontmatter(text: &str) -> ValidationIssues {
  let mut issues = ValidationIssues::default();

  if has_frontmatter_delimiter(text) && split_frontmatter(text).is_none() {
    issues
      .errors
      .push("frontmatter block is not terminated by a closing ---".to_string());
    return issues;
  }

  match parse_frontmatter(text) {
    Ok(Some(mapping)) if mapping.is_empty() => {
      issues.warnings.push("frontmatter block is empty".to_string());
    },
    Ok(_) => {},
    Err(err) => issues.errors.push(err.to_string()),
  }

  issues
}

/// Check every non-image link for an empty or suspicious URL.
#[must_use]
pub fn validate_links(text: &str) -> ValidationIssues {
  let mut issues = ValidationIssues::default();

  for link in structure::extract_links(text) {
    if link.url.is_empty() {
      issues
        .errors
        .push(format!("link \"{}\" has an empty URL", link.text));
    } else if link.url.chars().any(char::is_whitespace) {
      issues.warnings.push(format!(
        "link \"{}\" has whitespace in its URL: {}",
        link.text, link.url
      ));
    }

    if link.text.trim().is_empty() {
      issues
        .warnings
        .push(format!("link to {} has no display text", link.url));
    }
  }

  issues
}

/// Check every image for a missing source or alt text.
#[must_use]
pub fn validate_images(text: &str) -> ValidationIssues {
  let mut issues = ValidationIssues::default();

  for image in structure::extract_images(text) {
    if image.src.trim().is_empty() {
      issues
        .errors
        .push(format!("image \"{}\" has an empty source", image.alt));
    }
    if image.alt.trim().is_empty() {
      issues
        .warnings
        .push(format!("image {} has no alt text", image.src));
    }
  }

  issues
}

/// Check table separator rows against their header rows.
///
/// A separator whose column count differs from the header directly above
/// it is an error, reported with the header's 1-based line number.
#[must_use]
pub fn validate_tables(text: &str) -> ValidationIssues {
  let mut issues = ValidationIssues::default();
  let lines: Vec<&str> = text.lines().collect();

  for (idx, line) in lines.iter().enumerate().skip(1) {
    if !line.contains('|') || !TABLE_SEPARATOR_RE.is_match(line) {
      continue;
    }

    let header = lines[idx - 1];
    if !header.contains('|') || TABLE_SEPARATOR_RE.is_match(header) {
      continue;
    }

    let header_columns = column_count(header);
    let separator_columns = column_count(line);
    if header_columns != separator_columns {
      issues.errors.push(format!(
        "table at line {idx}: header has {header_columns} columns but \
         separator has {separator_columns}"
      ));
    }
  }

  issues
}

/// Validate a document end to end and aggregate a report.
///
/// Runs the frontmatter, link, image, and table rules, counts document
/// statistics, and flags an empty document as an error. `is_valid` is
/// true exactly when no rule produced an error.
#[must_use]
pub fn validate_markdown(text: &str) -> ValidationReport {
  let mut issues = ValidationIssues::default();

  if text.trim().is_empty() {
    issues.errors.push("document is empty".to_string());
  }

  validate_frontmatter(text).merge_into(&mut issues);
  validate_links(text).merge_into(&mut issues);
  validate_images(text).merge_into(&mut issues);
  validate_tables(text).merge_into(&mut issues);

  let stats = ValidationStats {
    word_count:    normalize::word_count(text),
    heading_count: structure::all_headings(text, 6).len(),
    link_count:    structure::extract_links(text).len(),
    image_count:   structure::extract_images(text).len(),
  };

  ValidationReport {
    is_valid: issues.errors.is_empty(),
    errors: issues.errors,
    warnings: issues.warnings,
    stats,
  }
}

/// Convenience boolean over [`validate_markdown`].
#[must_use]
pub fn is_valid_markdown(text: &str) -> bool {
  validate_markdown(text).is_valid
}
