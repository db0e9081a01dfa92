//! Structural extraction: headings, first paragraph, links, images, and
//! fenced code blocks.
//!
//! Each exported function scans the input with compiled patterns and
//! returns records in document order. Nothing here fails: an input the
//! pattern does not match produces an empty string or an empty vector.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
  normalize,
  types::{CodeBlock, Heading, Image, Link},
  utils::never_matching_regex,
};

// Heading patterns
static FIRST_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap_or_else(|e| {
    error!("Failed to compile FIRST_HEADING_RE regex: {e}");
    never_matching_regex()
  })
});
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").unwrap_or_else(|e| {
    error!("Failed to compile HEADING_RE regex: {e}");
    never_matching_regex()
  })
});
static HEADING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^#{1,6}[ \t].*$").unwrap_or_else(|e| {
    error!("Failed to compile HEADING_LINE_RE regex: {e}");
    never_matching_regex()
  })
});

// Anchor derivation
static ANCHOR_SCRUB_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^\w\s]").unwrap_or_else(|e| {
    error!("Failed to compile ANCHOR_SCRUB_RE regex: {e}");
    never_matching_regex()
  })
});
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\s+").unwrap_or_else(|e| {
    error!("Failed to compile WHITESPACE_RUN_RE regex: {e}");
    never_matching_regex()
  })
});

// Link-like syntax. The optional leading bang is captured so image
// syntax can be told apart from plain links without lookbehind.
static LINK_OR_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").unwrap_or_else(|e| {
    error!("Failed to compile LINK_OR_IMAGE_RE regex: {e}");
    never_matching_regex()
  })
});
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"!\[([^\]]*)\]\(\s*([^)\s]*)(?:\s+"([^"]*)")?\s*\)"#)
    .unwrap_or_else(|e| {
      error!("Failed to compile IMAGE_RE regex: {e}");
      never_matching_regex()
    })
});

// Fenced code blocks: language token on the fence line, interior until
// the closing fence.
static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)```([\w+-]*)[ \t]*\r?\n(.*?)```").unwrap_or_else(|e| {
    error!("Failed to compile CODE_BLOCK_RE regex: {e}");
    never_matching_regex()
  })
});

// Paragraph boundary: a line containing only whitespace.
static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\n[ \t]*\n").unwrap_or_else(|e| {
    error!("Failed to compile BLANK_LINE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Derive the anchor for a heading text.
///
/// Lowercases, strips characters that are neither word characters nor
/// whitespace, then replaces whitespace runs with single hyphens.
#[must_use]
pub fn heading_anchor(text: &str) -> String {
  let lowered = text.to_lowercase();
  let scrubbed = ANCHOR_SCRUB_RE.replace_all(&lowered, "");
  WHITESPACE_RUN_RE
    .replace_all(scrubbed.trim(), "-")
    .trim_matches('-')
    .to_string()
}

/// Text of the first level-1 heading, or an empty string when the
/// document has none.
#[must_use]
pub fn first_heading(text: &str) -> String {
  FIRST_HEADING_RE
    .captures(text)
    .and_then(|caps| caps.get(1))
    .map_or_else(String::new, |m| m.as_str().trim().to_string())
}

/// All headings up to and including `max_level`, in document order.
///
/// A `max_level` outside 1-6 behaves as 6 (no filtering).
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::structure::all_headings;
///
/// let headings = all_headings("# A\n## B\n### C", 2);
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[1].anchor, "b");
/// ```
#[must_use]
pub fn all_headings(text: &str, max_level: u8) -> Vec<Heading> {
  let max_level = if (1..=6).contains(&max_level) {
    max_level
  } else {
    6
  };

  HEADING_RE
    .captures_iter(text)
    .filter_map(|caps| {
      let level = caps.get(1)?.as_str().len() as u8;
      if level > max_level {
        return None;
      }
      let heading_text = caps.get(2)?.as_str().trim().to_string();
      let anchor = heading_anchor(&heading_text);
      Some(Heading {
        level,
        text: heading_text,
        anchor,
      })
    })
    .collect()
}

/// The first non-empty paragraph, with markup removed.
///
/// Heading lines and fenced code blocks are dropped, inline code and
/// emphasis are unwrapped, link and image syntax is replaced by its
/// display text, then the first non-empty blank-line-delimited block is
/// returned trimmed. Empty string when nothing remains.
#[must_use]
pub fn first_paragraph(text: &str) -> String {
  let without_fences = normalize::FENCED_BLOCK_RE.replace_all(text, "");
  let without_headings = HEADING_LINE_RE.replace_all(&without_fences, "");
  let without_code =
    normalize::INLINE_CODE_RE.replace_all(&without_headings, "$1");
  let without_bold =
    normalize::BOLD_ASTERISK_RE.replace_all(&without_code, "$1");
  let without_bold_u =
    normalize::BOLD_UNDERSCORE_RE.replace_all(&without_bold, "$1");
  let without_italic =
    normalize::ITALIC_ASTERISK_RE.replace_all(&without_bold_u, "$1");
  let without_images =
    normalize::IMAGE_SYNTAX_RE.replace_all(&without_italic, "$1");
  let plain = normalize::LINK_SYNTAX_RE.replace_all(&without_images, "$1");

  BLANK_LINE_RE
    .split(&plain)
    .map(str::trim)
    .find(|block| !block.is_empty())
    .map_or_else(String::new, ToString::to_string)
}

/// Every non-image `[text](url)` occurrence, in document order.
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::structure::extract_links;
///
/// let links = extract_links("[Google](https://google.com)");
/// assert_eq!(links[0].url, "https://google.com");
/// ```
#[must_use]
pub fn extract_links(text: &str) -> Vec<Link> {
  LINK_OR_IMAGE_RE
    .captures_iter(text)
    .filter_map(|caps| {
      if !caps.get(1)?.as_str().is_empty() {
        // Image syntax; handled by `extract_images`.
        return None;
      }
      Some(Link {
        text: caps.get(2)?.as_str().to_string(),
        url:  caps.get(3)?.as_str().trim().to_string(),
      })
    })
    .collect()
}

/// Every `![alt](src "optional title")` occurrence, in document order.
///
/// `title` is `None` when no quoted title follows the URL.
#[must_use]
pub fn extract_images(text: &str) -> Vec<Image> {
  IMAGE_RE
    .captures_iter(text)
    .filter_map(|caps| {
      Some(Image {
        alt:   caps.get(1)?.as_str().to_string(),
        src:   caps.get(2)?.as_str().to_string(),
        title: caps.get(3).map(|m| m.as_str().to_string()),
      })
    })
    .collect()
}

/// Every triple-backtick fenced block, in document order.
///
/// The language token after the opening fence is captured; a bare fence
/// yields "text". Content is the trimmed interior.
#[must_use]
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
  CODE_BLOCK_RE
    .captures_iter(text)
    .filter_map(|caps| {
      let language = caps.get(1)?.as_str();
      Some(CodeBlock {
        language: if language.is_empty() {
          "text".to_string()
        } else {
          language.to_string()
        },
        content:  caps.get(2)?.as_str().trim().to_string(),
      })
    })
    .collect()
}
