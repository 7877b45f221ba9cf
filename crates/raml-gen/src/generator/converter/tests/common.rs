use indexmap::IndexSet;
use serde_json::Value;

use crate::generator::{
  ast::GeneratedInterface,
  converter::{GenerationContext, ResourceWalker},
  error::GeneratorResult,
  model::ApiDescription,
};

pub(super) struct Compiled {
  pub(super) names: IndexSet<String>,
  pub(super) interfaces: Vec<GeneratedInterface>,
  pub(super) warnings: Vec<String>,
}

impl Compiled {
  pub(super) fn interface(&self, name: &str) -> &GeneratedInterface {
    self
      .interfaces
      .iter()
      .find(|i| i.name == name)
      .unwrap_or_else(|| panic!("interface {name} not generated"))
  }
}

pub(super) fn description(resources: Value) -> ApiDescription {
  let value = serde_json::json!({ "title": "Test API", "resources": resources });
  serde_json::from_value::<ApiDescription>(value)
    .expect("description should deserialize")
    .normalized()
}

pub(super) fn try_compile_with(resources: Value, use_validation: bool) -> GeneratorResult<Compiled> {
  let description = description(resources);
  let mut ctx = GenerationContext::with_defaults(use_validation);
  let names = ResourceWalker::new(&mut ctx).compile(&description.resources)?;
  let (interfaces, warnings) = ctx.into_parts();
  Ok(Compiled {
    names,
    interfaces,
    warnings,
  })
}

pub(super) fn compile(resources: Value) -> Compiled {
  try_compile_with(resources, true).expect("compilation should succeed")
}
