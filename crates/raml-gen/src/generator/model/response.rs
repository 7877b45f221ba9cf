use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{MimeType, Parameter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub body: IndexMap<String, MimeType>,
  #[serde(default)]
  pub headers: IndexMap<String, Parameter>,
}

impl Response {
  pub fn has_body(&self) -> bool {
    !self.body.is_empty()
  }

  pub(super) fn normalize(&mut self) {
    for (media_type, mime) in &mut self.body {
      mime.normalize(media_type);
    }
  }
}
