#![allow(clippy::expect_used, reason = "Fine in tests")]

use std::fs;

use mdmeta::{
  config::Config,
  scan::{collect_markdown_files, scan_directory, write_index},
};

fn fixture_tree() -> tempfile::TempDir {
  let dir = tempfile::tempdir().expect("tempdir");
  let posts = dir.path().join("posts");
  fs::create_dir_all(&posts).expect("create posts dir");

  fs::write(
    dir.path().join("index.md"),
    "# Home\n\nWelcome to the test site.\n",
  )
  .expect("write index.md");
  fs::write(
    posts.join("2024-01-01_hello.md"),
    "---\ntitle: Hello World\n---\n\n# Hello\n\nFirst post.\n",
  )
  .expect("write post");
  fs::write(posts.join("notes.txt"), "not markdown").expect("write txt");

  dir
}

#[test]
fn test_collect_markdown_files_filters_extensions() {
  let dir = fixture_tree();
  let files = collect_markdown_files(dir.path());

  assert_eq!(files.len(), 2);
  assert!(files.iter().all(|f| {
    f.extension().is_some_and(|ext| ext == "md")
  }));
}

#[test]
fn test_scan_directory_groups_and_extracts() {
  let dir = fixture_tree();
  let index = scan_directory(&Config::default(), dir.path(), false)
    .expect("scan should succeed");

  assert_eq!(index.file_count, 2);
  assert_eq!(index.directories.len(), 2);

  let posts_key = index
    .directories
    .keys()
    .find(|key| key.ends_with("/posts"))
    .expect("posts group present");
  let entries = &index.directories[posts_key];

  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].metadata.title, "Hello World");
  assert_eq!(entries[0].metadata.slug, "2024-01-01-hello");
  assert!(entries[0].is_valid);
  assert!(
    entries[0].metadata.created.is_some(),
    "date should be derived from the filename"
  );
}

#[test]
fn test_scan_respects_max_heading_level() {
  let dir = tempfile::tempdir().expect("tempdir");
  fs::write(
    dir.path().join("deep.md"),
    "# One\n## Two\n### Three\n#### Four\n",
  )
  .expect("write deep.md");

  let config = Config {
    max_heading_level: 2,
    ..Config::default()
  };
  let index =
    scan_directory(&config, dir.path(), false).expect("scan should succeed");

  let entries = index.directories.values().next().expect("one group");
  assert_eq!(entries[0].metadata.headings.len(), 2);
}

#[test]
fn test_write_index_creates_file() {
  let dir = fixture_tree();
  let index = scan_directory(&Config::default(), dir.path(), false)
    .expect("scan should succeed");

  let out = dir.path().join("out/index.json");
  let json = write_index(&index, Some(&out)).expect("write should succeed");

  assert!(out.exists());
  assert!(json.contains("\"fileCount\": 2"));
  let written = fs::read_to_string(&out).expect("read back");
  assert_eq!(written, json);
}
