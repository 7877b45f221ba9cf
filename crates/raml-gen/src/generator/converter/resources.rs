use indexmap::{IndexMap, IndexSet};

use super::{GenerationContext, InterfaceBuilder, MethodSynthesizer, RequestBody};
use crate::generator::{ast::Documentation, error::GeneratorResult, model::Resource};

/// A resource together with the chain of resources above it.
#[derive(Debug, Clone)]
pub struct ResourceScope<'r> {
  resource: &'r Resource,
  parent: Option<&'r ResourceScope<'r>>,
  uri: String,
}

impl<'r> ResourceScope<'r> {
  pub fn root(resource: &'r Resource) -> Self {
    Self {
      resource,
      parent: None,
      uri: resource.relative_uri.clone(),
    }
  }

  pub fn child(&'r self, resource: &'r Resource) -> Self {
    let uri = format!(
      "{}/{}",
      self.uri.trim_end_matches('/'),
      resource.relative_uri.trim_start_matches('/')
    );
    Self {
      resource,
      parent: Some(self),
      uri,
    }
  }

  pub fn resource(&self) -> &'r Resource {
    self.resource
  }

  /// Full URI of the resource.
  pub fn uri(&self) -> &str {
    &self.uri
  }

  /// This scope followed by each ancestor, nearest first.
  pub fn ancestry(&self) -> impl Iterator<Item = &ResourceScope<'r>> {
    std::iter::successors(Some(self), |scope| scope.parent)
  }
}

/// Walks the resource tree, producing one interface per top-level resource.
pub struct ResourceWalker<'c, 'a> {
  ctx: &'c mut GenerationContext<'a>,
}

impl<'c, 'a> ResourceWalker<'c, 'a> {
  pub fn new(ctx: &'c mut GenerationContext<'a>) -> Self {
    Self { ctx }
  }

  /// Compiles every top-level resource and returns the interface names in
  /// declaration order. The first error aborts the whole run.
  pub fn compile(&mut self, resources: &IndexMap<String, Resource>) -> GeneratorResult<IndexSet<String>> {
    let mut names = IndexSet::new();

    for resource in resources.values() {
      let base_name = self
        .ctx
        .naming()
        .interface_name(&resource.relative_uri, resource.display_name.as_deref());
      let name = self.ctx.claim_interface_name(&base_name);

      let mut interface = InterfaceBuilder::new(
        name.clone(),
        Self::interface_path(&resource.relative_uri),
        Documentation::from_optional(resource.description.as_ref()),
      );
      self.add_resource(&mut interface, &ResourceScope::root(resource))?;

      tracing::debug!(interface = %name, methods = interface.methods().len(), "compiled interface");
      self.ctx.push_interface(interface.finish());
      names.insert(name);
    }

    Ok(names)
  }

  fn add_resource(&mut self, interface: &mut InterfaceBuilder, scope: &ResourceScope<'_>) -> GeneratorResult<()> {
    let resource = scope.resource();

    for (verb, action) in &resource.actions {
      for body in RequestBody::variants(action) {
        let method = MethodSynthesizer::new(self.ctx).synthesize(interface, scope, *verb, action, body)?;
        interface.push(method);
      }
    }

    for child in resource.resources.values() {
      self.add_resource(interface, &scope.child(child))?;
    }

    Ok(())
  }

  fn interface_path(relative_uri: &str) -> String {
    let trimmed = relative_uri.trim_matches('/');
    if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() }
  }
}
