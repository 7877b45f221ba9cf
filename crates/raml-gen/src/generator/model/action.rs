use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{MimeType, Parameter, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ActionType {
  Get,
  Post,
  Put,
  Patch,
  Delete,
  Head,
  Options,
  Trace,
  Connect,
}

impl ActionType {
  /// Verbs that always carry a request body, declared or not.
  pub const fn has_body(self) -> bool {
    matches!(self, Self::Put | Self::Post | Self::Patch)
  }

  pub fn method(self) -> Method {
    match self {
      Self::Get => Method::GET,
      Self::Post => Method::POST,
      Self::Put => Method::PUT,
      Self::Patch => Method::PATCH,
      Self::Delete => Method::DELETE,
      Self::Head => Method::HEAD,
      Self::Options => Method::OPTIONS,
      Self::Trace => Method::TRACE,
      Self::Connect => Method::CONNECT,
    }
  }

  pub fn as_lowercase(self) -> String {
    self.to_string().to_ascii_lowercase()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub body: IndexMap<String, MimeType>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
  #[serde(default)]
  pub headers: IndexMap<String, Parameter>,
  #[serde(default)]
  pub query_parameters: IndexMap<String, Parameter>,
}

impl Action {
  pub fn has_body(&self) -> bool {
    !self.body.is_empty()
  }

  pub(super) fn normalize(&mut self) {
    for (media_type, mime) in &mut self.body {
      mime.normalize(media_type);
    }
    for response in self.responses.values_mut() {
      response.normalize();
    }
  }
}
