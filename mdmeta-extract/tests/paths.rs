use jiff::civil::date;
use mdmeta_extract::paths::{
  SortOrder, directory_of, extract_date_from_path, filename_to_slug,
  filename_to_title, group_by_directory, is_markdown_file, normalize_path,
  relative_to, sort_by_date,
};

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_slug_basic() {
  assert_eq!(filename_to_slug("My Great Article!.md"), "my-great-article");
  assert_eq!(filename_to_slug("snake_case_name.md"), "snake-case-name");
  assert_eq!(filename_to_slug("UPPER.markdown"), "upper");
}

#[test]
fn test_slug_collapses_hyphen_runs() {
  assert_eq!(filename_to_slug("a -- b -- c.md"), "a-b-c");
  assert_eq!(filename_to_slug("--edges--.md"), "edges");
}

#[test]
fn test_slug_is_idempotent() {
  for filename in ["My Great Article!.md", "2023-12-01_post.md", "x__y.md"] {
    let slug = filename_to_slug(filename);
    let again = filename_to_slug(&format!("{slug}.md"));
    assert_eq!(slug, again, "re-slugging {filename} changed the slug");
  }
}

#[test]
fn test_title_basic() {
  assert_eq!(filename_to_title("my-great-article.md"), "My Great Article");
  assert_eq!(filename_to_title("snake_case_name.md"), "Snake Case Name");
}

#[test]
fn test_title_strips_date_prefix() {
  assert_eq!(filename_to_title("2023-12-01_draft-notes.md"), "Draft Notes");
  assert_eq!(filename_to_title("2023-12-01-draft.md"), "Draft");
}

#[test]
fn test_extract_date_dashed() {
  assert_eq!(
    extract_date_from_path("2023-12-01_article.md"),
    Some(date(2023, 12, 1))
  );
}

#[test]
fn test_extract_date_pattern_priority() {
  assert_eq!(
    extract_date_from_path("notes_2024_03_15.md"),
    Some(date(2024, 3, 15))
  );
  assert_eq!(
    extract_date_from_path("/posts/20240315.md"),
    Some(date(2024, 3, 15))
  );
  assert_eq!(
    extract_date_from_path("12-01-2023_notes.md"),
    Some(date(2023, 12, 1))
  );
}

#[test]
fn test_extract_date_invalid_match_falls_through() {
  // The dashed pattern matches structurally but 99 is not a month; the
  // compact pattern later in the table still gets its chance.
  assert_eq!(
    extract_date_from_path("9999-99-99 20231201.md"),
    Some(date(2023, 12, 1))
  );
}

#[test]
fn test_extract_date_none() {
  assert_eq!(extract_date_from_path("no-date-here.md"), None);
  assert_eq!(extract_date_from_path("2023-13-45_bad.md"), None);
}

#[test]
fn test_extract_date_uses_filename_only() {
  assert_eq!(extract_date_from_path("/archive/2020-01-01/readme.md"), None);
}

#[test]
fn test_normalize_path_backslashes() {
  assert_eq!(normalize_path(r"docs\sub\file.md"), "docs/sub/file.md");
  assert_eq!(normalize_path("already/fine.md"), "already/fine.md");
}

#[test]
fn test_directory_of() {
  assert_eq!(directory_of("/content/a/x.md"), "/content/a");
  assert_eq!(directory_of(r"content\a\x.md"), "content/a");
  assert_eq!(directory_of("x.md"), "");
}

#[test]
fn test_relative_to_prefix() {
  assert_eq!(relative_to("/content/posts/a.md", "/content"), "posts/a.md");
  assert_eq!(relative_to("/content/posts/a.md", "/content/"), "posts/a.md");
}

#[test]
fn test_relative_to_segment_search() {
  assert_eq!(relative_to("site/content/posts/a.md", "content"), "posts/a.md");
}

#[test]
fn test_relative_to_unrelated_returns_original() {
  assert_eq!(relative_to(r"C:\docs\a.md", "missing"), r"C:\docs\a.md");
}

#[test]
fn test_group_by_directory_first_seen_order() {
  let paths = strings(&[
    "/content/a/x.md",
    "/content/a/y.md",
    "/content/b/z.md",
  ]);
  let groups = group_by_directory(&paths);

  let keys: Vec<&String> = groups.keys().collect();
  assert_eq!(keys, ["/content/a", "/content/b"]);
  assert_eq!(groups["/content/a"], vec!["/content/a/x.md", "/content/a/y.md"]);
  assert_eq!(groups["/content/b"], vec!["/content/b/z.md"]);
}

#[test]
fn test_group_by_directory_root_sentinel() {
  let groups = group_by_directory(&strings(&["loose.md", "/d/nested.md"]));
  assert_eq!(groups["root"], vec!["loose.md"]);
}

#[test]
fn test_sort_by_date_descending_dateless_last() {
  let paths = strings(&[
    "undated-a.md",
    "2022-05-05_old.md",
    "2024-01-01_new.md",
    "undated-b.md",
  ]);
  let sorted = sort_by_date(&paths, SortOrder::Descending);
  assert_eq!(
    sorted,
    strings(&[
      "2024-01-01_new.md",
      "2022-05-05_old.md",
      "undated-a.md",
      "undated-b.md",
    ])
  );
}

#[test]
fn test_sort_by_date_ascending_dateless_first() {
  let paths = strings(&["2024-01-01_new.md", "undated.md", "2022-05-05_old.md"]);
  let sorted = sort_by_date(&paths, SortOrder::Ascending);
  assert_eq!(
    sorted,
    strings(&["undated.md", "2022-05-05_old.md", "2024-01-01_new.md"])
  );
}

#[test]
fn test_sort_by_date_is_stable_and_pure() {
  let paths = strings(&["b.md", "a.md", "2020-01-01_x.md"]);
  let sorted = sort_by_date(&paths, SortOrder::Descending);

  // Equal (dateless) entries keep their input order and the input is
  // untouched.
  assert_eq!(sorted, strings(&["2020-01-01_x.md", "b.md", "a.md"]));
  assert_eq!(paths, strings(&["b.md", "a.md", "2020-01-01_x.md"]));
}

#[test]
fn test_is_markdown_file() {
  assert!(is_markdown_file("notes.md"));
  assert!(is_markdown_file("NOTES.MD"));
  assert!(is_markdown_file("doc.Markdown"));
  assert!(!is_markdown_file("doc.txt"));
  assert!(!is_markdown_file("no_extension"));
  assert!(!is_markdown_file("archive.md.bak"));
}
