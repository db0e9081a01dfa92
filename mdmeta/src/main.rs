use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

mod cli;
mod config;
mod report;
mod scan;

use cli::{Cli, Commands};
use config::Config;
use mdmeta_extract::{extract_metadata, validate::validate_markdown};
use serde_json::json;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let config = Config::load(&cli)?;

  match &cli.command {
    Commands::Inspect { file, json } => {
      let content = fs::read_to_string(file).wrap_err_with(|| {
        format!("Failed to read markdown file: {}", file.display())
      })?;
      let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

      let metadata = extract_metadata(&content, filename.as_deref());
      let validation = validate_markdown(&content);

      let output = if *json {
        serde_json::to_string_pretty(&json!({
          "metadata": metadata,
          "validation": validation,
        }))
        .wrap_err("Failed to serialize inspection report")?
      } else {
        format!(
          "{}\n{}",
          report::render_metadata(&metadata, jiff::Timestamp::now()),
          report::render_validation(&validation)
        )
      };

      #[allow(clippy::print_stdout, reason = "The report is the output")]
      {
        println!("{output}");
      }

      Ok(())
    },

    Commands::Scan {
      input_dir,
      output,
      jobs,
      sort,
    } => {
      if let Some(thread_count) = jobs {
        rayon::ThreadPoolBuilder::new()
          .num_threads(*thread_count)
          .build_global()?;
      }

      let index =
        scan::scan_directory(&config, input_dir, sort.as_str() == "date")?;
      let json = scan::write_index(&index, output.as_deref())?;

      if output.is_none() {
        #[allow(clippy::print_stdout, reason = "The index is the output")]
        {
          println!("{json}");
        }
      }

      info!("Indexed {} markdown files", index.file_count);
      Ok(())
    },

    Commands::Validate { files, .. } => {
      let mut failed = 0_usize;

      for file in files {
        let content = fs::read_to_string(file).wrap_err_with(|| {
          format!("Failed to read markdown file: {}", file.display())
        })?;
        let result = validate_markdown(&content);

        let rejected = !result.is_valid
          || (config.strict && !result.warnings.is_empty());
        if rejected {
          failed += 1;
        }

        info!(
          "{}: {} ({} errors, {} warnings)",
          file.display(),
          if rejected { "FAIL" } else { "ok" },
          result.errors.len(),
          result.warnings.len()
        );
        for error in &result.errors {
          log::warn!("{}: {error}", file.display());
        }
        if config.strict {
          for warning in &result.warnings {
            log::warn!("{}: {warning}", file.display());
          }
        }
      }

      if failed > 0 {
        bail!("{failed} of {} documents failed validation", files.len());
      }

      info!("All {} documents validated successfully", files.len());
      Ok(())
    },
  }
}
