//! Markdown-to-plain-text normalization, word counts, and reading time.
//!
//! Stripping is an ordered table of independent rules, each a compiled
//! pattern plus a replacement. Fenced code blocks are dropped before any
//! inline rule runs so no rule can consume another rule's delimiters;
//! this makes a single pass idempotent, which `word_count` and the tests
//! rely on.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

macro_rules! strip_regex {
  ($name:ident, $pattern:literal) => {
    pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| {
      Regex::new($pattern).unwrap_or_else(|e| {
        error!("Failed to compile {} regex: {e}", stringify!($name));
        never_matching_regex()
      })
    });
  };
}

// Block-level rules. Fenced blocks go first and are dropped entirely.
strip_regex!(FENCED_BLOCK_RE, r"(?s)```.*?```");

// Inline emphasis. The double-marker forms must run before the single
// ones so `**bold**` is not half-eaten by the italic rule.
strip_regex!(BOLD_ASTERISK_RE, r"\*\*([^*]+)\*\*");
strip_regex!(BOLD_UNDERSCORE_RE, r"__([^_]+)__");
strip_regex!(ITALIC_ASTERISK_RE, r"\*([^*\n]+)\*");
strip_regex!(ITALIC_UNDERSCORE_RE, r"_([^_\n]+)_");
strip_regex!(STRIKETHROUGH_RE, r"~~([^~]+)~~");

// Inline code. Backtick runs are consumed whole so double-backtick code
// spans strip in one pass.
strip_regex!(INLINE_CODE_RE, r"`+([^`\n]+)`+");

// Link-like syntax. Images must run first; the link rule would otherwise
// leave the leading `!` behind.
strip_regex!(IMAGE_SYNTAX_RE, r"!\[([^\]]*)\]\([^)]*\)");
strip_regex!(LINK_SYNTAX_RE, r"\[([^\]]*)\]\(([^)]*)\)");

// Line prefixes: heading markers, blockquote markers, bulleted and
// numbered list markers. One rule consumes the whole run, so stripping
// cannot uncover a fresh marker for a second application to find
// (`> # T`, `- > x`, and the like strip in a single pass).
strip_regex!(
  LINE_PREFIX_RE,
  r"(?m)^[ \t]*(?:>[ \t]?|#{1,6}[ \t]+|[-*+][ \t]+|\d+\.[ \t]+)+"
);

strip_regex!(BLANK_LINE_RUN_RE, r"\n[ \t]*\n(?:[ \t]*\n)+");

/// One entry in the strip table: what to match and what to put back.
struct StripRule {
  pattern:     &'static LazyLock<Regex>,
  replacement: &'static str,
}

static STRIP_RULES: &[StripRule] = &[
  StripRule {
    pattern:     &FENCED_BLOCK_RE,
    replacement: "",
  },
  StripRule {
    pattern:     &BOLD_ASTERISK_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &BOLD_UNDERSCORE_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &ITALIC_ASTERISK_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &ITALIC_UNDERSCORE_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &STRIKETHROUGH_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &INLINE_CODE_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &IMAGE_SYNTAX_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &LINK_SYNTAX_RE,
    replacement: "$1",
  },
  StripRule {
    pattern:     &LINE_PREFIX_RE,
    replacement: "",
  },
  StripRule {
    pattern:     &BLANK_LINE_RUN_RE,
    replacement: "\n\n",
  },
];

/// Words per minute assumed by [`reading_time`] when the caller passes 0.
pub const DEFAULT_WORDS_PER_MINUTE: u64 = 200;

/// Strip all markdown markup and return plain text.
///
/// Fenced code blocks are removed entirely; link and image syntax is
/// replaced by the display text and alt text; emphasis, inline code,
/// list markers and blockquote markers are unwrapped; blank-line runs
/// collapse to a single blank line. Applying this twice yields the same
/// result as applying it once.
///
/// # Examples
///
/// ```rust
/// use mdmeta_extract::normalize::strip_markdown;
///
/// let text = strip_markdown("# Title\n\nSome **bold** and a [link](https://x.dev).");
/// assert_eq!(text, "Title\n\nSome bold and a link.");
/// ```
#[must_use]
pub fn strip_markdown(text: &str) -> String {
  let mut output = text.to_string();
  for rule in STRIP_RULES {
    if let std::borrow::Cow::Owned(replaced) =
      rule.pattern.replace_all(&output, rule.replacement)
    {
      output = replaced;
    }
  }
  output.trim().to_string()
}

/// Count words in the plain-text rendition of `text`.
///
/// Markup is stripped first, then internal whitespace collapses and
/// non-empty tokens are counted. Empty or whitespace-only input is 0.
#[must_use]
pub fn word_count(text: &str) -> usize {
  strip_markdown(text).split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than 1.
///
/// The estimate is the word count divided by `words_per_minute`, rounded
/// up. A zero `words_per_minute` falls back to
/// [`DEFAULT_WORDS_PER_MINUTE`].
#[must_use]
pub fn reading_time(text: &str, words_per_minute: u64) -> u64 {
  let wpm = if words_per_minute == 0 {
    DEFAULT_WORDS_PER_MINUTE
  } else {
    words_per_minute
  };

  let words = word_count(text) as u64;
  words.div_ceil(wpm).max(1)
}
