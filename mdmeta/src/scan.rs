use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info};
use mdmeta_extract::{
  DocumentMetadata, extract_metadata,
  paths::{self, SortOrder},
  validate,
};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::Config;

/// One indexed document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
  /// Separator-normalized path the document was read from.
  pub path: String,

  /// Whether the document validated without errors.
  pub is_valid: bool,

  pub metadata: DocumentMetadata,
}

/// The JSON index written by `mdmeta scan`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanIndex {
  pub file_count: usize,

  /// Entries grouped by directory, in first-appearance order.
  pub directories: IndexMap<String, Vec<ScanEntry>>,
}

/// Collect all markdown files under the input directory.
#[must_use]
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::with_capacity(100);

  for entry in WalkDir::new(input_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && paths::is_markdown_file(&path.to_string_lossy()) {
      files.push(path.to_owned());
    }
  }

  debug!("Found {} markdown files to index", files.len());
  files
}

/// Extract metadata for every markdown file under `input_dir` and group
/// the results by directory.
///
/// Extraction runs in parallel; the index preserves the (possibly
/// date-sorted) file order within each directory group.
///
/// # Errors
///
/// Returns an error if any file cannot be read.
pub fn scan_directory(
  config: &Config,
  input_dir: &Path,
  sort_by_date: bool,
) -> Result<ScanIndex> {
  let files = collect_markdown_files(input_dir);
  info!("Found {} markdown files", files.len());

  let mut path_strings: Vec<String> = files
    .iter()
    .map(|path| paths::normalize_path(&path.to_string_lossy()))
    .collect();

  if sort_by_date {
    path_strings = paths::sort_by_date(&path_strings, SortOrder::Descending);
  }

  let entries: Result<Vec<ScanEntry>> = path_strings
    .par_iter()
    .map(|path| {
      let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read markdown file: {path}"))?;
      let filename = path.rsplit('/').next().unwrap_or(path);

      let mut metadata = extract_metadata(&content, Some(filename));
      metadata.reading_time_minutes = mdmeta_extract::normalize::reading_time(
        &content,
        config.words_per_minute,
      );
      metadata
        .headings
        .retain(|heading| heading.level <= config.max_heading_level);

      let report = validate::validate_markdown(&content);

      Ok(ScanEntry {
        path: path.clone(),
        is_valid: report.is_valid,
        metadata,
      })
    })
    .collect();

  let mut directories: IndexMap<String, Vec<ScanEntry>> = IndexMap::new();
  for entry in entries? {
    let directory = paths::directory_of(&entry.path);
    let key = if directory.is_empty() {
      paths::ROOT_GROUP.to_string()
    } else {
      directory
    };
    directories.entry(key).or_default().push(entry);
  }

  Ok(ScanIndex {
    file_count: path_strings.len(),
    directories,
  })
}

/// Serialize the index as pretty JSON and write it out.
///
/// # Errors
///
/// Returns an error if the index cannot be serialized or the output
/// file cannot be written.
pub fn write_index(index: &ScanIndex, output: Option<&Path>) -> Result<String> {
  let json = serde_json::to_string_pretty(index)
    .wrap_err("Failed to serialize scan index")?;

  if let Some(path) = output {
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create output directory: {}", parent.display())
        })?;
      }
    }
    fs::write(path, &json)
      .wrap_err_with(|| format!("Failed to write index: {}", path.display()))?;
    info!("Metadata index written to {}", path.display());
  }

  Ok(json)
}
