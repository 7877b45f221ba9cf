use crate::generator::codegen::Visibility;

pub const DEFAULT_SUPPORT_CRATE: &str = "raml_gen_support";
pub const DEFAULT_TYPES_MODULE: &str = "types";

/// Options of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CodegenConfig {
  /// Attach constraint metadata to bound parameters.
  #[builder(default = true)]
  pub use_validation: bool,
  #[builder(default)]
  pub visibility: Visibility,
  /// Path of the runtime crate generated code imports from.
  #[builder(default = DEFAULT_SUPPORT_CRATE.to_string(), into)]
  pub support_crate: String,
  /// Sibling module holding named entity types.
  #[builder(default = DEFAULT_TYPES_MODULE.to_string(), into)]
  pub types_module: String,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}
