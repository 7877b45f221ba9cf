use std::{
  fmt::{Debug, Formatter},
  io::Write,
};

use indexmap::IndexMap;

use crate::SupportError;

/// Form fields keyed by name, each carrying every submitted value.
pub type FormFields = IndexMap<String, Vec<String>>;

/// Free-form response headers keyed by header name.
pub type ResponseHeaders = IndexMap<String, Vec<String>>;

/// Deferred writer for a raw response payload.
pub struct StreamingOutput(Box<dyn FnOnce(&mut dyn Write) -> std::io::Result<()> + Send>);

impl StreamingOutput {
  pub fn new<F>(writer: F) -> Self
  where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()> + Send + 'static,
  {
    Self(Box::new(writer))
  }

  pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
    let bytes = bytes.into();
    Self::new(move |out| out.write_all(&bytes))
  }

  pub fn write_to(self, out: &mut dyn Write) -> std::io::Result<()> {
    (self.0)(out)
  }
}

impl Debug for StreamingOutput {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str("StreamingOutput(..)")
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPart {
  pub name: String,
  pub filename: Option<String>,
  pub content_type: Option<String>,
  pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multipart {
  parts: Vec<MultipartPart>,
}

impl Multipart {
  #[must_use]
  pub fn new(parts: Vec<MultipartPart>) -> Self {
    Self { parts }
  }

  #[must_use]
  pub fn parts(&self) -> &[MultipartPart] {
    &self.parts
  }

  pub fn part(&self, name: &str) -> Option<&MultipartPart> {
    self.parts.iter().find(|part| part.name == name)
  }
}

#[derive(Debug, Default)]
pub enum Body {
  #[default]
  Empty,
  Entity(serde_json::Value),
  Stream(StreamingOutput),
  Failed(String),
}

impl Body {
  /// Serializes the body. String entities are written verbatim unless the
  /// content type is JSON.
  pub fn into_bytes(self, content_type: Option<&str>) -> Result<Vec<u8>, SupportError> {
    match self {
      Self::Empty => Ok(vec![]),
      Self::Entity(serde_json::Value::String(text)) if !content_type.is_some_and(is_json) => Ok(text.into_bytes()),
      Self::Entity(value) => serde_json::to_vec(&value).map_err(|e| SupportError::Entity(e.to_string())),
      Self::Stream(output) => {
        let mut buffer = vec![];
        output.write_to(&mut buffer)?;
        Ok(buffer)
      }
      Self::Failed(reason) => Err(SupportError::Entity(reason)),
    }
  }
}

fn is_json(content_type: &str) -> bool {
  let essence = content_type.split(';').next().unwrap_or_default().trim();
  essence.ends_with("/json") || essence.ends_with("+json")
}
