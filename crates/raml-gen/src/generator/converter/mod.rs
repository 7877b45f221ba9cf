//! Resource tree to interface compilation.
//!
//! Control flows strictly downward: [`ResourceWalker`] drives
//! [`MethodSynthesizer`], which drives [`ParameterBinder`] and
//! [`ResponseTypeBuilder`]. Every component borrows the one
//! [`GenerationContext`] of the run.

mod media_types;
mod methods;
mod parameters;
mod resources;
mod responses;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

pub use media_types::MediaTypeSet;
pub use methods::{MethodSynthesizer, RequestBody};
pub use parameters::{ParamSink, ParameterBinder, ParameterKind};
pub use resources::{ResourceScope, ResourceWalker};
pub use responses::ResponseTypeBuilder;
pub use type_resolver::{DefaultTypeResolver, TypeResolver};

use super::{
  ast::{Documentation, GeneratedInterface, GeneratedMethod, TypeToken},
  naming::{
    constants::SUPPORT_TYPE_NAMES,
    policy::{DefaultNamingPolicy, NameScope, NamingPolicy},
  },
};

/// State of one compilation run: collaborators, the interfaces produced so
/// far and the non-fatal diagnostics collected on the way.
pub struct GenerationContext<'a> {
  naming: &'a dyn NamingPolicy,
  types: &'a dyn TypeResolver,
  use_validation: bool,
  interface_names: NameScope,
  interfaces: Vec<GeneratedInterface>,
  warnings: Vec<String>,
}

impl<'a> GenerationContext<'a> {
  pub fn new(naming: &'a dyn NamingPolicy, types: &'a dyn TypeResolver, use_validation: bool) -> Self {
    let mut interface_names = NameScope::new();
    for reserved in SUPPORT_TYPE_NAMES {
      interface_names.claim(reserved);
    }
    Self {
      naming,
      types,
      use_validation,
      interface_names,
      interfaces: vec![],
      warnings: vec![],
    }
  }

  /// Context using [`DefaultNamingPolicy`] and [`DefaultTypeResolver`].
  pub fn with_defaults(use_validation: bool) -> GenerationContext<'static> {
    GenerationContext::new(&DefaultNamingPolicy, &DefaultTypeResolver, use_validation)
  }

  pub fn naming(&self) -> &'a dyn NamingPolicy {
    self.naming
  }

  pub fn types(&self) -> &'a dyn TypeResolver {
    self.types
  }

  pub fn use_validation(&self) -> bool {
    self.use_validation
  }

  #[cfg(test)]
  pub fn interfaces(&self) -> &[GeneratedInterface] {
    &self.interfaces
  }

  /// Records a non-fatal diagnostic and logs it.
  pub fn warn(&mut self, message: impl Into<String>) {
    let message = message.into();
    tracing::warn!("{message}");
    self.warnings.push(message);
  }

  pub fn into_parts(self) -> (Vec<GeneratedInterface>, Vec<String>) {
    (self.interfaces, self.warnings)
  }

  fn claim_interface_name(&mut self, base: &str) -> String {
    self.interface_names.claim(base)
  }

  fn push_interface(&mut self, interface: GeneratedInterface) {
    self.interfaces.push(interface);
  }
}

/// An interface under construction. It only reaches the context once every
/// method of its resource subtree has been synthesized.
#[derive(Debug)]
pub struct InterfaceBuilder {
  name: TypeToken,
  path: String,
  docs: Documentation,
  methods: Vec<GeneratedMethod>,
  method_names: NameScope,
  type_names: NameScope,
}

impl InterfaceBuilder {
  pub fn new(name: impl Into<String>, path: impl Into<String>, docs: Documentation) -> Self {
    let name = name.into();
    let mut type_names = NameScope::new();
    type_names.claim(&name);
    Self {
      name: TypeToken::new(name),
      path: path.into(),
      docs,
      methods: vec![],
      method_names: NameScope::new(),
      type_names,
    }
  }

  pub fn methods(&self) -> &[GeneratedMethod] {
    &self.methods
  }

  pub fn claim_method_name(&mut self, base: &str) -> String {
    self.method_names.claim(base)
  }

  pub fn claim_type_name(&mut self, base: &str) -> String {
    self.type_names.claim(base)
  }

  /// Path of `uri` relative to this interface's base path.
  pub fn residual_path(&self, uri: &str) -> String {
    if self.path == "/" {
      return uri.trim_start_matches('/').to_string();
    }
    let prefix = format!("{}/", self.path);
    uri
      .find(&prefix)
      .map(|start| uri[start + prefix.len()..].to_string())
      .unwrap_or_default()
  }

  pub fn push(&mut self, method: GeneratedMethod) {
    self.methods.push(method);
  }

  pub fn finish(self) -> GeneratedInterface {
    GeneratedInterface::builder()
      .name(self.name)
      .path(self.path)
      .docs(self.docs)
      .methods(self.methods)
      .build()
  }
}
