mod documentation;
mod status_codes;
pub mod tokens;
pub(super) mod types;
pub(super) mod validation_attrs;


pub use documentation::Documentation;
use http::Method;
pub use status_codes::{StatusCodeToken, StatusKeyIssue};
pub use tokens::{ArgumentToken, MethodNameToken, TypeToken};
pub use types::{RustPrimitive, TypeRef};
pub use validation_attrs::ValidationAttribute;

/// How an argument maps onto the HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamBinding {
  /// Request bindings carry the name as declared, not the argument name.
  Path(String),
  Header(String),
  Query(String),
  Form(String),
  /// Catch-all multivalued form map.
  FormFields,
  /// Catch-all multipart container.
  Multipart,
  /// Typed request or response entity.
  Entity,
  /// Response header set by a factory.
  ResponseHeader(String),
  /// Free-form response headers aggregated from wildcard declarations.
  ResponseHeaders,
  /// Explicit status of the generic fallback factory.
  Status,
  /// Raw payload of the generic fallback factory.
  Stream,
}

/// One argument of a generated method or response factory.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct MethodParam {
  pub name: ArgumentToken,
  pub rust_type: TypeRef,
  pub binding: ParamBinding,
  pub default_value: Option<String>,
  #[builder(default)]
  pub validation_attrs: Vec<ValidationAttribute>,
}

/// HTTP binding metadata of a generated method.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct HttpBinding {
  pub method: Method,
  /// Path relative to the owning interface, absent when empty.
  pub path: Option<String>,
  pub consumes: Option<String>,
  #[builder(default)]
  pub produces: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryStatus {
  Fixed(StatusCodeToken),
  /// Supplied by the caller through a `status` argument.
  Dynamic,
}

/// One associated constructor of a response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ResponseFactory {
  pub name: MethodNameToken,
  pub status: FactoryStatus,
  pub content_type: Option<String>,
  #[builder(default)]
  pub params: Vec<MethodParam>,
  #[builder(default)]
  pub docs: Documentation,
}

/// The per-method response type: the declared factories in order and the
/// generic fallback that accepts any status and raw payload.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ResponseWrapperDef {
  pub name: TypeToken,
  #[builder(default)]
  pub factories: Vec<ResponseFactory>,
  pub fallback: ResponseFactory,
}

impl ResponseWrapperDef {
  pub fn all_factories(&self) -> impl Iterator<Item = &ResponseFactory> {
    self.factories.iter().chain(std::iter::once(&self.fallback))
  }

  #[cfg(test)]
  pub fn factory(&self, name: &str) -> Option<&ResponseFactory> {
    self.all_factories().find(|f| f.name == name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodReturn {
  Void(TypeRef),
  Wrapper(ResponseWrapperDef),
}

impl MethodReturn {
  pub fn wrapper(&self) -> Option<&ResponseWrapperDef> {
    match self {
      Self::Wrapper(def) => Some(def),
      Self::Void(_) => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratedMethod {
  pub name: MethodNameToken,
  pub binding: HttpBinding,
  /// Full URI of the resource the action is declared on.
  pub resource_uri: String,
  #[builder(default)]
  pub params: Vec<MethodParam>,
  pub return_type: MethodReturn,
  #[builder(default)]
  pub docs: Documentation,
}

impl GeneratedMethod {
  #[cfg(test)]
  pub fn param(&self, name: &str) -> Option<&MethodParam> {
    self.params.iter().find(|p| p.name == name)
  }
}

/// One interface per top-level resource; methods of descendant resources are
/// added to it.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratedInterface {
  pub name: TypeToken,
  /// Base path, without surrounding slashes; `/` for the root.
  #[builder(into)]
  pub path: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub methods: Vec<GeneratedMethod>,
}

impl GeneratedInterface {
  #[cfg(test)]
  pub fn method(&self, name: &str) -> Option<&GeneratedMethod> {
    self.methods.iter().find(|m| m.name == name)
  }

  pub fn wrappers(&self) -> impl Iterator<Item = &ResponseWrapperDef> {
    self.methods.iter().filter_map(|m| m.return_type.wrapper())
  }
}
