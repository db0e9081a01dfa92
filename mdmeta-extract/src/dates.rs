//! Labeled-date sniffing, general-purpose date parsing, formatting, and
//! relative "time ago" rendering.
//!
//! Calendar dates are [`jiff::civil::Date`]; instants are
//! [`jiff::Timestamp`]. [`time_ago`] takes its reference instant as an
//! argument so callers (and tests) control the clock; only the
//! `_from_now` convenience wrapper reads the wall clock.

use std::sync::LazyLock;

use jiff::{
  Timestamp,
  civil::{Date, DateTime},
};
use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

// Label lines are matched case-sensitively; the optional ** pairs accept
// the bolded variants.
static CREATED_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?m)(?:\*\*)?(?:Date|Created(?: (?:At|On|Date|Time))?):(?:\*\*)?[ \t]*(.+)$",
  )
  .unwrap_or_else(|e| {
    error!("Failed to compile CREATED_LABEL_RE regex: {e}");
    never_matching_regex()
  })
});
static UPDATED_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?m)(?:\*\*)?(?:Updated|Modified|Changed|Last Changed):(?:\*\*)?[ \t]*(.+)$",
  )
  .unwrap_or_else(|e| {
    error!("Failed to compile UPDATED_LABEL_RE regex: {e}");
    never_matching_regex()
  })
});

// The general-purpose parser is a rule table of strptime formats tried
// in order. Year-first forms come before the ambiguous US form.
const DATE_FORMATS: &[&str] = &[
  "%Y-%m-%d",
  "%Y/%m/%d",
  "%m/%d/%Y",
  "%B %d, %Y",
  "%b %d, %Y",
  "%d %B %Y",
  "%d %b %Y",
];

// Labeled dates sometimes carry a time of day; the date part is kept and
// the rest discarded.
const DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M",
];

/// Relative-time buckets in priority order: threshold seconds and unit.
const TIME_AGO_BUCKETS: &[(i64, &str)] = &[
  (31_536_000, "year"),
  (2_592_000, "month"),
  (604_800, "week"),
  (86_400, "day"),
  (3_600, "hour"),
  (60, "minute"),
];

/// Rendering styles for [`format_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
  /// Abbreviated month, unpadded day, year: "Dec 7, 2024".
  #[default]
  Medium,
  /// Full month name: "December 7, 2024".
  Long,
  /// ISO 8601: "2024-12-07".
  Iso,
}

/// Parse free-form date text against the format rule table.
///
/// Formats are tried in a fixed order; the first that consumes the
/// trimmed input wins. `None` when nothing matches.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use mdmeta_extract::dates::parse_date;
///
/// assert_eq!(parse_date("December 7, 2024"), Some(date(2024, 12, 7)));
/// assert_eq!(parse_date("not a date"), None);
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<Date> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return None;
  }

  DATE_FORMATS
    .iter()
    .find_map(|format| Date::strptime(format, trimmed).ok())
    .or_else(|| {
      DATETIME_FORMATS.iter().find_map(|format| {
        DateTime::strptime(format, trimmed)
          .ok()
          .map(|datetime| datetime.date())
      })
    })
}

/// Sniff a creation date from labeled lines in free-form text.
///
/// The first line containing one of `Date:`, `Created:`, `Created At:`,
/// `Created On:`, `Created Date:`, or `Created Time:` (plain or bolded,
/// case-sensitive) has its remainder run through [`parse_date`].
#[must_use]
pub fn creation_date(text: &str) -> Option<Date> {
  CREATED_LABEL_RE
    .captures(text)
    .and_then(|caps| caps.get(1))
    .and_then(|m| parse_date(m.as_str()))
}

/// Sniff an update date from labeled lines in free-form text.
///
/// Same mechanism as [`creation_date`], with the labels `Updated:`,
/// `Modified:`, `Changed:`, and `Last Changed:`.
#[must_use]
pub fn update_date(text: &str) -> Option<Date> {
  UPDATED_LABEL_RE
    .captures(text)
    .and_then(|caps| caps.get(1))
    .and_then(|m| parse_date(m.as_str()))
}

/// The chronologically later of two optional dates.
///
/// With both present the later wins; equal dates return `updated`. With
/// one present, that one. With neither, `None`.
#[must_use]
pub fn most_recent(created: Option<Date>, updated: Option<Date>) -> Option<Date> {
  match (created, updated) {
    (Some(c), Some(u)) => Some(if u >= c { u } else { c }),
    (c, u) => c.or(u),
  }
}

/// Render a date in the given style.
#[must_use]
pub fn format_date(date: Date, style: DateStyle) -> String {
  let format = match style {
    DateStyle::Medium => "%b %-d, %Y",
    DateStyle::Long => "%B %-d, %Y",
    DateStyle::Iso => "%Y-%m-%d",
  };
  format!("{}", date.strftime(format))
}

/// Render the elapsed time between `then` and the reference instant
/// `now` as a human-readable "time ago" string.
///
/// The largest bucket whose threshold is met wins: year, month, week,
/// day, hour, minute. Anything below one minute - including a `then` in
/// the future, whose elapsed time is negative - renders as the literal
/// "just now".
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use mdmeta_extract::dates::time_ago;
///
/// let now: Timestamp = "2024-12-07T12:00:00Z".parse().unwrap();
/// let then: Timestamp = "2024-12-07T10:00:00Z".parse().unwrap();
/// assert_eq!(time_ago(then, now), "2 hours ago");
/// ```
#[must_use]
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
  let elapsed = now.as_second() - then.as_second();

  TIME_AGO_BUCKETS
    .iter()
    .find(|(threshold, _)| elapsed >= *threshold)
    .map_or_else(
      || "just now".to_string(),
      |(threshold, unit)| {
        let count = elapsed / threshold;
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} {unit}{plural} ago")
      },
    )
}

/// [`time_ago`] against the current wall clock.
#[must_use]
pub fn time_ago_from_now(then: Timestamp) -> String {
  time_ago(then, Timestamp::now())
}
