use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "raml-gen")]
#[command(author, version, about = "RAML resource tree to Rust service interface generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an API description
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Rust interfaces from an API description
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the normalized resource tree (JSON or YAML, not raw RAML)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where the generated modules will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Do not attach parameter constraints to the generated route table
  #[arg(long, default_value_t = false)]
  pub no_validation: bool,

  /// Visibility level for generated items (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Path of the runtime support crate referenced by generated code
  #[arg(long, value_name = "PATH", default_value = "raml_gen_support")]
  pub support_crate: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every generated interface method with its verb and path
  Resources {
    /// Path to the normalized resource tree (JSON or YAML, not raw RAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

impl Commands {
  /// Verbosity requested by the command, as `(verbose, quiet)`.
  pub fn verbosity(&self) -> (bool, bool) {
    match self {
      Self::Generate(command) => (command.verbose, command.quiet),
      Self::List { .. } => (false, false),
    }
  }
}
