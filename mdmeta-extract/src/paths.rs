//! Filename and path derivation: slugs, display titles, embedded dates,
//! separator normalization, grouping, and date-ordered sorting.
//!
//! Paths are treated as plain strings; nothing here touches the
//! filesystem. Backslashes are normalized to forward slashes before any
//! splitting, so Windows-style input behaves identically.

use std::sync::LazyLock;

use indexmap::IndexMap;
use jiff::civil::Date;
use log::error;
use regex::{Captures, Regex};

use crate::utils::{capitalize_first, never_matching_regex};

/// Sentinel directory key for paths with no directory component.
pub const ROOT_GROUP: &str = "root";

static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\.[^./\\]+$").unwrap_or_else(|e| {
    error!("Failed to compile EXTENSION_RE regex: {e}");
    never_matching_regex()
  })
});
static DATE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\d{4}-\d{2}-\d{2}[-_]?").unwrap_or_else(|e| {
    error!("Failed to compile DATE_PREFIX_RE regex: {e}");
    never_matching_regex()
  })
});
static SLUG_SCRUB_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^a-z0-9 -]").unwrap_or_else(|e| {
    error!("Failed to compile SLUG_SCRUB_RE regex: {e}");
    never_matching_regex()
  })
});
static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"-{2,}").unwrap_or_else(|e| {
    error!("Failed to compile HYPHEN_RUN_RE regex: {e}");
    never_matching_regex()
  })
});

// Embedded-date patterns, in match priority order. Year-first forms are
// tried before the ambiguous month-first ones.
static DATE_YMD_DASH_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap_or_else(|e| {
    error!("Failed to compile DATE_YMD_DASH_RE regex: {e}");
    never_matching_regex()
  })
});
static DATE_YMD_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{4})_(\d{2})_(\d{2})").unwrap_or_else(|e| {
    error!("Failed to compile DATE_YMD_UNDERSCORE_RE regex: {e}");
    never_matching_regex()
  })
});
static DATE_YMD_COMPACT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\b(\d{4})(\d{2})(\d{2})\b").unwrap_or_else(|e| {
    error!("Failed to compile DATE_YMD_COMPACT_RE regex: {e}");
    never_matching_regex()
  })
});
static DATE_MDY_DASH_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{2})-(\d{2})-(\d{4})").unwrap_or_else(|e| {
    error!("Failed to compile DATE_MDY_DASH_RE regex: {e}");
    never_matching_regex()
  })
});
static DATE_MDY_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{2})_(\d{2})_(\d{4})").unwrap_or_else(|e| {
    error!("Failed to compile DATE_MDY_UNDERSCORE_RE regex: {e}");
    never_matching_regex()
  })
});

/// One embedded-date rule: the pattern plus the constructor that turns
/// its captures into a calendar date. A structural match whose fields do
/// not form a valid date returns `None` and the scan moves on.
struct DateRule {
  pattern: &'static LazyLock<Regex>,
  build:   fn(&Captures) -> Option<Date>,
}

fn date_from_ymd(caps: &Captures) -> Option<Date> {
  let year = caps.get(1)?.as_str().parse::<i16>().ok()?;
  let month = caps.get(2)?.as_str().parse::<i8>().ok()?;
  let day = caps.get(3)?.as_str().parse::<i8>().ok()?;
  Date::new(year, month, day).ok()
}

fn date_from_mdy(caps: &Captures) -> Option<Date> {
  let month = caps.get(1)?.as_str().parse::<i8>().ok()?;
  let day = caps.get(2)?.as_str().parse::<i8>().ok()?;
  let year = caps.get(3)?.as_str().parse::<i16>().ok()?;
  Date::new(year, month, day).ok()
}

static DATE_RULES: &[DateRule] = &[
  DateRule {
    pattern: &DATE_YMD_DASH_RE,
    build:   date_from_ymd,
  },
  DateRule {
    pattern: &DATE_YMD_UNDERSCORE_RE,
    build:   date_from_ymd,
  },
  DateRule {
    pattern: &DATE_YMD_COMPACT_RE,
    build:   date_from_ymd,
  },
  DateRule {
    pattern: &DATE_MDY_DASH_RE,
    build:   date_from_mdy,
  },
  DateRule {
    pattern: &DATE_MDY_UNDERSCORE_RE,
    build:   date_from_mdy,
  },
];

/// Sort direction for [`sort_by_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
  /// Oldest first; dateless paths sort before all dated ones.
  Ascending,
  /// Most recent first; dateless paths sort after all dated ones.
  #[default]
  Descending,
}

/// Derive a URL-safe slug from a filename.
///
/// Strips the final extension, lowercases, maps underscores and spaces
/// to hyphens, drops everything outside `[a-z0-9-]`, collapses hyphen
/// runs, and trims. Re-slugging a slug is a no-op.
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::paths::filename_to_slug;
///
/// assert_eq!(filename_to_slug("My Great Article!.md"), "my-great-article");
/// ```
#[must_use]
pub fn filename_to_slug(filename: &str) -> String {
  let stem = EXTENSION_RE.replace(filename, "");
  let lowered = stem.to_lowercase().replace('_', "-");
  let scrubbed = SLUG_SCRUB_RE.replace_all(&lowered, "");
  let hyphenated = scrubbed.replace(' ', "-");
  HYPHEN_RUN_RE
    .replace_all(&hyphenated, "-")
    .trim_matches('-')
    .to_string()
}

/// Derive a human-readable title from a filename.
///
/// Strips the final extension and a leading `YYYY-MM-DD` prefix (plus an
/// optional `_` or `-` after it), turns hyphens and underscores into
/// spaces, and capitalizes every word.
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::paths::filename_to_title;
///
/// assert_eq!(filename_to_title("2023-12-01_draft-notes.md"), "Draft Notes");
/// ```
#[must_use]
pub fn filename_to_title(filename: &str) -> String {
  let stem = EXTENSION_RE.replace(filename, "");
  let undated = DATE_PREFIX_RE.replace(&stem, "");
  let spaced = undated.replace(['-', '_'], " ");

  spaced
    .split_whitespace()
    .map(capitalize_first)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Extract a calendar date embedded in the filename portion of `path`.
///
/// The extension-stripped filename is scanned against the rule table in
/// fixed priority order (`YYYY-MM-DD`, `YYYY_MM_DD`, `YYYYMMDD`,
/// `MM-DD-YYYY`, `MM_DD_YYYY`); the first rule producing a valid
/// calendar date wins. `None` when no rule matches or every structural
/// match fails calendar validation.
#[must_use]
pub fn extract_date_from_path(path: &str) -> Option<Date> {
  let normalized = normalize_path(path);
  let filename = normalized.rsplit('/').next().unwrap_or(&normalized);
  let stem = EXTENSION_RE.replace(filename, "");

  DATE_RULES.iter().find_map(|rule| {
    rule
      .pattern
      .captures(&stem)
      .and_then(|caps| (rule.build)(&caps))
  })
}

/// Replace every backslash with a forward slash.
#[must_use]
pub fn normalize_path(path: &str) -> String {
  path.replace('\\', "/")
}

/// Everything up to the last path segment, separator-normalized.
///
/// A path with a single segment yields an empty string.
#[must_use]
pub fn directory_of(path: &str) -> String {
  let normalized = normalize_path(path);
  normalized
    .rfind('/')
    .map_or_else(String::new, |idx| normalized[..idx].to_string())
}

/// Express `path` relative to `base`.
///
/// If `path` starts with `base` the remainder is returned with one
/// leading slash stripped. Otherwise `base` is searched for as a path
/// segment anywhere in `path` and everything through it is dropped. When
/// no structural relationship is found the original path is returned
/// unchanged; this fallback is deliberate, not an error.
#[must_use]
pub fn relative_to(path: &str, base: &str) -> String {
  let norm_path = normalize_path(path);
  let norm_base = normalize_path(base);

  if !norm_base.is_empty() && norm_path.starts_with(&norm_base) {
    let rest = &norm_path[norm_base.len()..];
    return rest.strip_prefix('/').unwrap_or(rest).to_string();
  }

  let segments: Vec<&str> = norm_path.split('/').collect();
  if let Some(idx) = segments.iter().position(|seg| *seg == norm_base) {
    return segments[idx + 1..].join("/");
  }

  path.to_string()
}

/// Group paths by their directory, preserving input order.
///
/// Directories are keyed in order of first appearance; a path with no
/// directory component lands under the sentinel [`ROOT_GROUP`] key.
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::paths::group_by_directory;
///
/// let groups =
///   group_by_directory(&["/a/x.md".to_string(), "y.md".to_string()]);
/// assert_eq!(groups["/a"], vec!["/a/x.md"]);
/// assert_eq!(groups["root"], vec!["y.md"]);
/// ```
#[must_use]
pub fn group_by_directory(paths: &[String]) -> IndexMap<String, Vec<String>> {
  let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

  for path in paths {
    let directory = directory_of(path);
    let key = if directory.is_empty() {
      ROOT_GROUP.to_string()
    } else {
      directory
    };
    groups.entry(key).or_default().push(path.clone());
  }

  groups
}

/// Return the paths ordered by their embedded dates.
///
/// The sort is stable, so ties and dateless runs keep their input order.
/// Dateless paths have the lowest priority in the "most recent first"
/// sense: last under [`SortOrder::Descending`], first under
/// [`SortOrder::Ascending`]. The input slice is left untouched.
#[must_use]
pub fn sort_by_date(paths: &[String], order: SortOrder) -> Vec<String> {
  let mut sorted = paths.to_vec();
  match order {
    SortOrder::Ascending => {
      sorted.sort_by_cached_key(|path| extract_date_from_path(path));
    },
    SortOrder::Descending => {
      sorted
        .sort_by_cached_key(|path| std::cmp::Reverse(extract_date_from_path(path)));
    },
  }
  sorted
}

/// Case-insensitive check for a `.md` or `.markdown` extension.
#[must_use]
pub fn is_markdown_file(path: &str) -> bool {
  let normalized = normalize_path(path);
  let filename = normalized.rsplit('/').next().unwrap_or(&normalized);

  filename.rfind('.').is_some_and(|idx| {
    let extension = &filename[idx + 1..];
    extension.eq_ignore_ascii_case("md")
      || extension.eq_ignore_ascii_case("markdown")
  })
}
