use std::fmt::Write;

use jiff::{Timestamp, tz::TimeZone};
use mdmeta_extract::{
  DocumentMetadata, ValidationReport,
  dates::{DateStyle, format_date, most_recent, time_ago},
};

/// Render a document's metadata as a readable text report.
///
/// `now` is the reference instant for the relative "last touched" line,
/// so the report is deterministic under test.
#[must_use]
pub fn render_metadata(metadata: &DocumentMetadata, now: Timestamp) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "Title:        {}", metadata.title);
  let _ = writeln!(out, "Slug:         {}", metadata.slug);
  if !metadata.description.is_empty() {
    let _ = writeln!(out, "Description:  {}", metadata.description);
  }
  if let Some(created) = metadata.created {
    let _ =
      writeln!(out, "Created:      {}", format_date(created, DateStyle::Medium));
  }
  if let Some(updated) = metadata.updated {
    let _ =
      writeln!(out, "Updated:      {}", format_date(updated, DateStyle::Medium));
  }
  if let Some(last) = most_recent(metadata.created, metadata.updated) {
    if let Ok(zoned) = last.at(0, 0, 0, 0).to_zoned(TimeZone::UTC) {
      let _ = writeln!(
        out,
        "Last touched: {}",
        time_ago(zoned.timestamp(), now)
      );
    }
  }
  let _ = writeln!(out, "Words:        {}", metadata.word_count);
  let _ = writeln!(
    out,
    "Reading time: {} min",
    metadata.reading_time_minutes
  );
  let _ = writeln!(
    out,
    "Contents:     {} headings, {} links, {} images, {} code blocks",
    metadata.headings.len(),
    metadata.links.len(),
    metadata.images.len(),
    metadata.code_blocks.len()
  );

  if !metadata.headings.is_empty() {
    let _ = writeln!(out, "\nOutline:");
    for heading in &metadata.headings {
      let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
      let _ = writeln!(out, "  {indent}{} (#{})", heading.text, heading.anchor);
    }
  }

  out
}

/// Render a validation report as a readable text summary.
#[must_use]
pub fn render_validation(report: &ValidationReport) -> String {
  let mut out = String::new();

  let verdict = if report.is_valid { "valid" } else { "INVALID" };
  let _ = writeln!(
    out,
    "Validation:   {verdict} ({} errors, {} warnings)",
    report.errors.len(),
    report.warnings.len()
  );

  for error in &report.errors {
    let _ = writeln!(out, "  error: {error}");
  }
  for warning in &report.warnings {
    let _ = writeln!(out, "  warning: {warning}");
  }

  out
}
