use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{ast::GeneratedInterface, config::CodegenConfig, orchestrator::Orchestrator},
  ui::{Colors, colors::Role, term_width},
  utils::spec::DescriptionLoader,
};

/// One listed method: interface, method, verb and full resource path.
type ResourceRow = (String, String, String, String);

fn resource_rows(interfaces: &[GeneratedInterface]) -> Vec<ResourceRow> {
  interfaces
    .iter()
    .flat_map(|interface| {
      interface.methods.iter().map(|method| {
        (
          interface.name.to_string(),
          method.name.to_string(),
          method.binding.method.as_str().to_string(),
          method.resource_uri.clone(),
        )
      })
    })
    .collect()
}

pub async fn list_resources(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let description = DescriptionLoader::open(input).await?.parse()?;
  let compiled = Orchestrator::new(description, CodegenConfig::default()).compile()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["INTERFACE", "METHOD", "VERB", "PATH"] {
    header.add_cell(Cell::new(title).fg(colors.cell(Role::Label)));
  }
  table.set_header(header);

  for (interface, method, verb, path) in resource_rows(&compiled.interfaces) {
    let mut row = Row::new();
    row.add_cell(Cell::new(interface).fg(colors.cell(Role::Primary)));
    row.add_cell(
      Cell::new(method)
        .fg(colors.cell(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(verb)
        .fg(colors.cell(Role::Accent))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(colors.cell(Role::Primary)));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
