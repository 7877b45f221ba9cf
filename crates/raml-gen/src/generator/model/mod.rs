//! In-memory form of a parsed API description.
//!
//! Every mapping is an [`IndexMap`] so declaration order survives loading and
//! drives the order of everything generated from it.

mod action;
mod mime;
mod parameter;
mod resource;
mod response;
pub mod validation;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionType};
use indexmap::IndexMap;
pub use mime::MimeType;
pub use parameter::{ParamType, Parameter};
pub use resource::Resource;
pub use response::Response;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescription {
  pub title: String,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub base_uri: Option<String>,
  #[serde(default)]
  pub resources: IndexMap<String, Resource>,
}

impl ApiDescription {
  /// Copies mapping keys into the values that carry them and applies the
  /// description language defaults (URI parameters are required unless stated).
  pub fn normalize(&mut self) {
    for (relative_uri, resource) in &mut self.resources {
      resource.normalize(relative_uri);
    }
  }

  #[must_use]
  pub fn normalized(mut self) -> Self {
    self.normalize();
    self
  }
}
