//! One-call metadata aggregation for a whole document.
//!
//! [`extract_metadata`] combines the extraction groups into a single
//! record: frontmatter fields win over sniffed values, which win over
//! values derived from the filename. Like everything else in the crate
//! it never fails; missing sources just leave fields empty or `None`.

use jiff::civil::Date;
use serde::Serialize;

use crate::{
  dates, frontmatter, normalize, paths, structure,
  types::{CodeBlock, Heading, Image, Link},
};

/// Everything a consumer needs to render a document listing or index
/// entry. Optional dates are omitted from JSON output when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
  pub title: String,
  pub slug:  String,

  /// First paragraph of the body, markup stripped.
  pub description: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub created: Option<Date>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated: Option<Date>,

  pub word_count:           usize,
  pub reading_time_minutes: u64,

  pub headings:    Vec<Heading>,
  pub links:       Vec<Link>,
  pub images:      Vec<Image>,
  pub code_blocks: Vec<CodeBlock>,
}

/// Assemble the full metadata record for a document.
///
/// `filename` is optional; when given it contributes the slug and the
/// fallback title and date. Precedence:
///
/// - title: frontmatter `title`, else first heading, else the filename
/// - slug: the filename, else the resolved title
/// - created: frontmatter `date`/`created`, else a labeled date in the
///   text, else a date embedded in the filename
/// - updated: frontmatter `updated`, else a labeled update date
#[must_use]
pub fn extract_metadata(
  text: &str,
  filename: Option<&str>,
) -> DocumentMetadata {
  // A frontmatter block that fails to parse contributes nothing; the
  // validator is where that failure is reported.
  let mapping = frontmatter::parse_frontmatter(text).ok().flatten();
  // Content-derived fields come from the body so frontmatter lines do
  // not leak into headings, counts, or the description.
  let body =
    frontmatter::split_frontmatter(text).map_or(text, |(_, body)| body);
  let fm_str = |key: &str| {
    mapping
      .as_ref()
      .and_then(|m| frontmatter::frontmatter_str(m, key))
  };

  let title = fm_str("title").map_or_else(
    || {
      let heading = structure::first_heading(body);
      if heading.is_empty() {
        filename.map_or_else(String::new, paths::filename_to_title)
      } else {
        heading
      }
    },
    ToString::to_string,
  );

  let slug = filename.map_or_else(
    || paths::filename_to_slug(&title),
    paths::filename_to_slug,
  );

  let created = fm_str("date")
    .or_else(|| fm_str("created"))
    .and_then(dates::parse_date)
    .or_else(|| dates::creation_date(body))
    .or_else(|| filename.and_then(paths::extract_date_from_path));

  let updated = fm_str("updated")
    .and_then(dates::parse_date)
    .or_else(|| dates::update_date(body));

  DocumentMetadata {
    title,
    slug,
    description: structure::first_paragraph(body),
    created,
    updated,
    word_count: normalize::word_count(body),
    reading_time_minutes: normalize::reading_time(
      body,
      normalize::DEFAULT_WORDS_PER_MINUTE,
    ),
    headings: structure::all_headings(body, 6),
    links: structure::extract_links(body),
    images: structure::extract_images(body),
    code_blocks: structure::extract_code_blocks(body),
  }
}
