#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod ui;
mod utils;

#[cfg(test)]
mod tests;

/// Default log directive for the requested verbosity.
pub(crate) fn log_directive(verbose: bool, quiet: bool) -> &'static str {
  match (verbose, quiet) {
    (_, true) => "raml_gen=error",
    (true, false) => "raml_gen=debug",
    (false, false) => "raml_gen=info",
  }
}

fn init_tracing(verbose: bool, quiet: bool) {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, quiet))))
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr),
    )
    .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  let (verbose, quiet) = cli.command.verbosity();
  init_tracing(verbose, quiet);

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Resources { input } => ui::commands::list_resources(&input, &colors).await?,
    },
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command)?;
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
