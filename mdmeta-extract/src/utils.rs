//! Small helpers shared across the extraction modules.

use regex::Regex;

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile, so that an
/// extraction function degrades to "no matches" instead of panicking.
/// The pattern asserts something impossible and is guaranteed valid.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "The pattern is statically known to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Capitalize the first letter of a string, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  chars.next().map_or_else(String::new, |c| {
    c.to_uppercase().collect::<String>() + chars.as_str()
  })
}
