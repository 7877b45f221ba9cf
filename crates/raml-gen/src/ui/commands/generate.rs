use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use indexmap::IndexSet;
use itertools::Itertools;

use crate::{
  generator::{
    codegen::{GeneratedFile, Visibility},
    config::CodegenConfig,
    orchestrator::{GenerationStats, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::spec::DescriptionLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub codegen: CodegenConfig,
  pub verbose: bool,
  pub quiet: bool,
}

/// Result of writing the generated files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
  pub written: Vec<PathBuf>,
  /// Files left untouched because they already existed.
  pub kept: Vec<PathBuf>,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      no_validation,
      visibility,
      support_crate,
      verbose,
      quiet,
    } = command;

    let visibility = Visibility::parse(&visibility)
      .ok_or_else(|| anyhow::anyhow!("Invalid visibility '{visibility}': expected public, crate or file"))?;

    let codegen = CodegenConfig::builder()
      .use_validation(!no_validation)
      .visibility(visibility)
      .support_crate(support_crate)
      .build();

    Ok(Self {
      input,
      output,
      codegen,
      verbose,
      quiet,
    })
  }

  /// Writes every file into the output directory, creating it when missing.
  /// Files that must not be overwritten are only written when absent.
  pub async fn write_output(&self, files: &[GeneratedFile]) -> anyhow::Result<WriteSummary> {
    tokio::fs::create_dir_all(&self.output).await?;
    if !is_empty_dir(&self.output).await? {
      tracing::warn!(
        output = %self.output.display(),
        "output directory is not empty; files not generated in this run are left in place"
      );
    }

    let mut summary = WriteSummary::default();
    for file in files {
      let path = self.output.join(&file.file_name);
      if !file.overwrite && tokio::fs::try_exists(&path).await? {
        tracing::debug!(path = %path.display(), "keeping existing file");
        summary.kept.push(path);
        continue;
      }
      tokio::fs::write(&path, &file.code).await?;
      summary.written.push(path);
    }
    Ok(summary)
  }
}

async fn is_empty_dir(path: &Path) -> anyhow::Result<bool> {
  let mut entries = tokio::fs::read_dir(path).await?;
  Ok(entries.next_entry().await?.is_none())
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {}", format_timestamp().with(self.colors.timestamp()), message.with(self.colors.primary()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "           {:<24} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Interfaces generated:", stats.interfaces_generated.to_string());
    self.stat("Methods generated:", stats.methods_generated.to_string());
    self.stat(
      "Response wrappers:",
      format!("{} ({} factories)", stats.wrappers_generated, stats.factories_generated),
    );
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  fn print_interfaces(&self, names: &IndexSet<String>) {
    if !names.is_empty() {
      self.stat("Interfaces:", interface_list(names));
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if self.config.quiet || stats.warnings.is_empty() {
      return;
    }
    eprintln!();
    for warning in &stats.warnings {
      eprintln!("{} {}", "Warning:".with(self.colors.warning()), warning.as_str().with(self.colors.primary()));
    }
  }

  fn print_summary(&self, summary: &WriteSummary) {
    if !self.config.verbose {
      return;
    }
    for path in &summary.written {
      self.stat("Wrote", path.display().to_string());
    }
    for path in &summary.kept {
      self.stat("Kept", path.display().to_string());
    }
  }

  fn log_success(&self, summary: &WriteSummary) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {} files", summary.written.len()).with(self.colors.success())
      );
    }
  }
}

/// Interface names in declaration order, as reported after generation.
fn interface_list(names: &IndexSet<String>) -> String {
  names.iter().join(", ")
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.info(&format!("Loading API description from: {}", config.input.display()));
  let description = DescriptionLoader::open(&config.input).await?.parse()?;

  logger.info("Generating Rust interfaces...");
  let source_path = config.input.display().to_string();
  let output = Orchestrator::new(description, config.codegen.clone()).generate(&source_path)?;
  logger.print_statistics(&output.stats);
  logger.print_interfaces(&output.names);
  logger.print_warnings(&output.stats);

  logger.info(&format!("Writing to: {}", config.output.display()));
  let summary = config.write_output(&output.files).await?;
  logger.print_summary(&summary);

  logger.log_success(&summary);
  Ok(())
}
