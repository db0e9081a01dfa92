use jiff::{Timestamp, civil::date};
use mdmeta_extract::dates::{
  DateStyle, creation_date, format_date, most_recent, parse_date, time_ago,
  update_date,
};

fn ts(input: &str) -> Timestamp {
  input.parse().expect("test timestamp should parse")
}

#[test]
fn test_parse_date_formats() {
  assert_eq!(parse_date("2024-12-07"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("2024/12/07"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("12/07/2024"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("December 7, 2024"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("Dec 7, 2024"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("7 December 2024"), Some(date(2024, 12, 7)));
}

#[test]
fn test_parse_date_with_time_of_day() {
  assert_eq!(parse_date("2024-12-07 10:30"), Some(date(2024, 12, 7)));
  assert_eq!(parse_date("2024-12-07T10:30:00"), Some(date(2024, 12, 7)));
}

#[test]
fn test_parse_date_rejects_garbage() {
  assert_eq!(parse_date("not a date"), None);
  assert_eq!(parse_date(""), None);
  assert_eq!(parse_date("2024-13-40"), None);
}

#[test]
fn test_creation_date_labels() {
  let labels = [
    "Date: 2024-12-07",
    "Created: 2024-12-07",
    "Created At: 2024-12-07",
    "Created On: 2024-12-07",
    "Created Date: 2024-12-07",
    "Created Time: 2024-12-07 09:15",
    "**Date:** 2024-12-07",
  ];
  for line in labels {
    let doc = format!("# Doc\n\n{line}\n\nBody text.");
    assert_eq!(
      creation_date(&doc),
      Some(date(2024, 12, 7)),
      "label line {line:?} should sniff"
    );
  }
}

#[test]
fn test_creation_date_is_case_sensitive() {
  assert_eq!(creation_date("created: 2024-12-07"), None);
}

#[test]
fn test_creation_date_unparseable_remainder() {
  assert_eq!(creation_date("Date: sometime last year"), None);
  assert_eq!(creation_date("No labels in this text at all."), None);
}

#[test]
fn test_update_date_labels() {
  for line in [
    "Updated: Dec 9, 2024",
    "Modified: Dec 9, 2024",
    "Changed: Dec 9, 2024",
    "Last Changed: Dec 9, 2024",
    "**Updated:** Dec 9, 2024",
  ] {
    assert_eq!(
      update_date(line),
      Some(date(2024, 12, 9)),
      "label line {line:?} should sniff"
    );
  }
}

#[test]
fn test_update_date_first_label_wins() {
  let doc = "Updated: 2024-01-01\nModified: 2024-06-01";
  assert_eq!(update_date(doc), Some(date(2024, 1, 1)));
}

#[test]
fn test_most_recent_later_wins() {
  let older = Some(date(2024, 1, 1));
  let newer = Some(date(2024, 6, 1));

  assert_eq!(most_recent(older, newer), newer);
  assert_eq!(most_recent(newer, older), newer);
}

#[test]
fn test_most_recent_single_and_absent() {
  let only = Some(date(2024, 6, 1));
  assert_eq!(most_recent(only, None), only);
  assert_eq!(most_recent(None, only), only);
  assert_eq!(most_recent(None, None), None);
}

#[test]
fn test_most_recent_equal_returns_updated_operand() {
  let d = Some(date(2024, 6, 1));
  assert_eq!(most_recent(d, d), d);
}

#[test]
fn test_format_date_styles() {
  let d = date(2024, 12, 7);
  assert_eq!(format_date(d, DateStyle::Medium), "Dec 7, 2024");
  assert_eq!(format_date(d, DateStyle::Long), "December 7, 2024");
  assert_eq!(format_date(d, DateStyle::Iso), "2024-12-07");
}

#[test]
fn test_time_ago_just_now() {
  let now = ts("2024-12-07T12:00:00Z");
  assert_eq!(time_ago(ts("2024-12-07T11:59:30Z"), now), "just now");
  assert_eq!(time_ago(now, now), "just now");
}

#[test]
fn test_time_ago_buckets() {
  let now = ts("2024-12-07T12:00:00Z");

  assert_eq!(time_ago(ts("2024-12-07T11:58:00Z"), now), "2 minutes ago");
  assert_eq!(time_ago(ts("2024-12-07T11:00:00Z"), now), "1 hour ago");
  assert_eq!(time_ago(ts("2024-12-07T09:00:00Z"), now), "3 hours ago");
  assert_eq!(time_ago(ts("2024-12-04T12:00:00Z"), now), "3 days ago");
  assert_eq!(time_ago(ts("2024-11-29T12:00:00Z"), now), "1 week ago");
  assert_eq!(time_ago(ts("2024-10-07T12:00:00Z"), now), "2 months ago");
  assert_eq!(time_ago(ts("2022-12-07T12:00:00Z"), now), "2 years ago");
}

#[test]
fn test_time_ago_future_is_just_now() {
  let now = ts("2024-12-07T12:00:00Z");
  assert_eq!(time_ago(ts("2025-01-01T00:00:00Z"), now), "just now");
}
