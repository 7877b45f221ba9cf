use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::Parameter;

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MimeType {
  /// The media type string; filled from the enclosing mapping key.
  #[serde(default, rename = "type")]
  pub media_type: String,
  #[serde(default)]
  pub schema: Option<String>,
  /// A form field may be declared with more than one type.
  #[serde(default, deserialize_with = "one_or_many_map")]
  pub form_parameters: IndexMap<String, Vec<Parameter>>,
}

impl MimeType {
  pub fn new(media_type: impl Into<String>) -> Self {
    Self {
      media_type: media_type.into(),
      ..Default::default()
    }
  }

  pub fn is_form_urlencoded(&self) -> bool {
    self.essence().eq_ignore_ascii_case(FORM_URLENCODED)
  }

  pub fn is_multipart_form(&self) -> bool {
    self.essence().eq_ignore_ascii_case(MULTIPART_FORM_DATA)
  }

  pub fn has_multi_type_form_parameter(&self) -> bool {
    self.form_parameters.values().any(|declared| declared.len() > 1)
  }

  fn essence(&self) -> &str {
    self.media_type.split(';').next().unwrap_or_default().trim()
  }

  pub(super) fn normalize(&mut self, key: &str) {
    if self.media_type.is_empty() {
      self.media_type = key.to_string();
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
  One(Parameter),
  Many(Vec<Parameter>),
}

fn one_or_many_map<'de, D>(deserializer: D) -> Result<IndexMap<String, Vec<Parameter>>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = IndexMap::<String, OneOrMany>::deserialize(deserializer)?;
  Ok(
    raw
      .into_iter()
      .map(|(name, declared)| match declared {
        OneOrMany::One(param) => (name, vec![param]),
        OneOrMany::Many(params) => (name, params),
      })
      .collect(),
  )
}
