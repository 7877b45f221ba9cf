use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Action, ActionType, Parameter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
  /// Path segment relative to the parent; filled from the mapping key.
  #[serde(default)]
  pub relative_uri: String,
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub uri_parameters: IndexMap<String, Parameter>,
  #[serde(default)]
  pub actions: IndexMap<ActionType, Action>,
  #[serde(default)]
  pub resources: IndexMap<String, Resource>,
}

impl Resource {
  pub(super) fn normalize(&mut self, key: &str) {
    if self.relative_uri.is_empty() {
      self.relative_uri = key.to_string();
    }

    for param in self.uri_parameters.values_mut() {
      param.required.get_or_insert(true);
    }

    for action in self.actions.values_mut() {
      action.normalize();
    }

    for (relative_uri, child) in &mut self.resources {
      child.normalize(relative_uri);
    }
  }

  /// Names of the `{...}` template parameters in the relative URI, in order.
  pub fn template_parameters(&self) -> impl Iterator<Item = &str> {
    self.relative_uri.split('{').skip(1).filter_map(|rest| rest.split_once('}')).map(|(name, _)| name)
  }
}
