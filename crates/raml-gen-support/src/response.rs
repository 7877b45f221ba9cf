use http::{HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;

use crate::{Body, ResponseHeaders, StreamingOutput, SupportError};

/// The transport-level response a [`ResponseWrapper`] owns.
#[derive(Debug, Default)]
pub struct RawResponse {
  pub status: u16,
  pub headers: Vec<(String, String)>,
  pub body: Body,
}

impl RawResponse {
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// Owns exactly one transport response. Generated response types are
/// newtypes over this value and can only be built through their factories.
#[derive(Debug)]
pub struct ResponseWrapper {
  delegate: RawResponse,
}

impl ResponseWrapper {
  #[must_use]
  pub fn new(delegate: RawResponse) -> Self {
    Self { delegate }
  }

  #[must_use]
  pub fn status(&self) -> u16 {
    self.delegate.status
  }

  #[must_use]
  pub fn delegate(&self) -> &RawResponse {
    &self.delegate
  }

  #[must_use]
  pub fn into_delegate(self) -> RawResponse {
    self.delegate
  }

  /// Converts into an `http::Response`, serializing the entity.
  pub fn into_http(self) -> Result<http::Response<Vec<u8>>, SupportError> {
    let RawResponse { status, headers, body } = self.delegate;
    let status = StatusCode::from_u16(status).map_err(|_| SupportError::Status(status))?;

    let mut response = http::Response::new(vec![]);
    *response.status_mut() = status;

    for (name, value) in headers {
      let header_name = HeaderName::try_from(name.as_str()).map_err(|e| SupportError::Header {
        name: name.clone(),
        reason: e.to_string(),
      })?;
      let header_value = HeaderValue::try_from(value.as_str()).map_err(|e| SupportError::Header {
        name: name.clone(),
        reason: e.to_string(),
      })?;
      response.headers_mut().append(header_name, header_value);
    }

    let content_type = response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let bytes = body.into_bytes(content_type)?;
    *response.body_mut() = bytes;
    Ok(response)
  }
}

/// Step-wise builder used by generated response factories.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
  response: RawResponse,
}

impl ResponseBuilder {
  #[must_use]
  pub fn status(status: u16) -> Self {
    Self {
      response: RawResponse {
        status,
        ..Default::default()
      },
    }
  }

  #[must_use]
  pub fn header(mut self, name: &str, value: impl ToString) -> Self {
    self.response.headers.push((name.to_string(), value.to_string()));
    self
  }

  #[must_use]
  pub fn headers(mut self, headers: ResponseHeaders) -> Self {
    for (name, values) in headers {
      for value in values {
        self.response.headers.push((name.clone(), value));
      }
    }
    self
  }

  #[must_use]
  pub fn entity<T: Serialize>(mut self, entity: T) -> Self {
    self.response.body = match serde_json::to_value(entity) {
      Ok(value) => Body::Entity(value),
      Err(e) => Body::Failed(e.to_string()),
    };
    self
  }

  #[must_use]
  pub fn stream(mut self, output: StreamingOutput) -> Self {
    self.response.body = Body::Stream(output);
    self
  }

  #[must_use]
  pub fn build(self) -> ResponseWrapper {
    ResponseWrapper::new(self.response)
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;
  use serde_json::json;

  use super::*;

  #[test]
  fn builds_json_entity_response() -> Result<(), SupportError> {
    let wrapper = ResponseBuilder::status(200)
      .header("Content-Type", "application/json")
      .entity(json!({"id": 7}))
      .build();

    assert_eq!(wrapper.status(), 200);
    assert_eq!(wrapper.delegate().header("content-type"), Some("application/json"));

    let response = wrapper.into_http()?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body().as_slice(), br#"{"id":7}"#);
    Ok(())
  }

  #[test]
  fn text_entity_is_written_verbatim() -> Result<(), SupportError> {
    let response = ResponseBuilder::status(200)
      .header("Content-Type", "text/plain")
      .entity("hello")
      .build()
      .into_http()?;
    assert_eq!(response.body().as_slice(), b"hello");
    Ok(())
  }

  #[test]
  fn free_form_headers_keep_every_value() {
    let mut headers = IndexMap::new();
    headers.insert("X-Trace".to_string(), vec!["a".to_string(), "b".to_string()]);

    let wrapper = ResponseBuilder::status(204).headers(headers).build();
    let raw = wrapper.into_delegate();
    assert_eq!(raw.headers.len(), 2);
    assert_eq!(raw.headers[1], ("X-Trace".to_string(), "b".to_string()));
  }

  #[test]
  fn streaming_output_is_drained() -> Result<(), SupportError> {
    let response = ResponseBuilder::status(202)
      .stream(StreamingOutput::from_bytes(b"raw".to_vec()))
      .build()
      .into_http()?;
    assert_eq!(response.body().as_slice(), b"raw");
    Ok(())
  }

  #[test]
  fn out_of_range_status_is_rejected() {
    let result = ResponseBuilder::status(0).build().into_http();
    assert!(matches!(result, Err(SupportError::Status(0))));
  }

  #[test]
  fn invalid_header_name_is_rejected() {
    let result = ResponseBuilder::status(200).header("bad header", "x").build().into_http();
    assert!(matches!(result, Err(SupportError::Header { .. })));
  }
}
