use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamType {
  #[default]
  String,
  Number,
  Integer,
  Date,
  Boolean,
  File,
}

/// One declared path, header, query or form parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, rename = "type")]
  pub param_type: ParamType,
  #[serde(default)]
  pub required: Option<bool>,
  #[serde(default)]
  pub repeat: bool,
  #[serde(default)]
  pub default: Option<Value>,
  #[serde(default)]
  pub min_length: Option<u64>,
  #[serde(default)]
  pub max_length: Option<u64>,
  #[serde(default)]
  pub minimum: Option<Number>,
  #[serde(default)]
  pub maximum: Option<Number>,
  #[serde(default)]
  pub pattern: Option<String>,
}

impl Parameter {
  pub fn is_required(&self) -> bool {
    self.required.unwrap_or(false)
  }

  /// The default as the literal text a binding carries.
  pub fn default_value(&self) -> Option<String> {
    match self.default.as_ref()? {
      Value::Null => None,
      Value::String(s) => Some(s.clone()),
      other => Some(other.to_string()),
    }
  }

  pub fn has_pattern(&self) -> bool {
    self.pattern.as_deref().is_some_and(|p| !p.trim().is_empty())
  }

  /// Display name and description, joined by ` - ` when both are present.
  pub fn doc_text(&self) -> String {
    let display = self.display_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let description = self.description.as_deref().map(str::trim).filter(|s| !s.is_empty());

    match (display, description) {
      (Some(display), Some(description)) => format!("{display} - {description}"),
      (Some(text), None) | (None, Some(text)) => text.to_string(),
      (None, None) => String::new(),
    }
  }
}
