use clap::{CommandFactory, Parser};

use crate::{
  log_directive,
  ui::{Cli, Commands},
};

#[test]
fn test_cli_definition_is_consistent() {
  Cli::command().debug_assert();
}

#[test]
fn test_generate_arguments_parse() {
  let cli = Cli::try_parse_from([
    "raml-gen",
    "generate",
    "-i",
    "api.yaml",
    "-o",
    "src/api",
    "--no-validation",
    "--visibility",
    "crate",
    "-v",
  ])
  .unwrap();

  let Commands::Generate(command) = cli.command else {
    panic!("expected generate");
  };
  assert_eq!(command.input.to_str(), Some("api.yaml"));
  assert_eq!(command.output.to_str(), Some("src/api"));
  assert!(command.no_validation);
  assert_eq!(command.visibility, "crate");
  assert_eq!(command.support_crate, "raml_gen_support");
  assert!(command.verbose);
}

#[test]
fn test_verbose_and_quiet_conflict() {
  let result = Cli::try_parse_from(["raml-gen", "generate", "-i", "a.json", "-o", "out", "-v", "-q"]);
  assert!(result.is_err());
}

#[test]
fn test_log_directive() {
  assert_eq!(log_directive(false, false), "raml_gen=info");
  assert_eq!(log_directive(true, false), "raml_gen=debug");
  assert_eq!(log_directive(false, true), "raml_gen=error");
}
