//! Structural checks run before compilation. Every problem found is collected
//! and reported at once.

use super::{ApiDescription, MimeType, Parameter, Resource};
use crate::generator::error::{GeneratorError, GeneratorResult};

pub fn validate(description: &ApiDescription) -> GeneratorResult<()> {
  let mut errors = vec![];

  for resource in description.resources.values() {
    validate_resource(resource, "", &mut errors);
  }

  if errors.is_empty() {
    Ok(())
  } else {
    Err(GeneratorError::InvalidDescription { errors })
  }
}

fn validate_resource(resource: &Resource, parent_uri: &str, errors: &mut Vec<String>) {
  let uri = format!("{parent_uri}{}", resource.relative_uri);

  if !resource.relative_uri.starts_with('/') {
    errors.push(format!("{uri}: relative URI must start with '/'"));
  }

  if !has_balanced_braces(&resource.relative_uri) {
    errors.push(format!("{uri}: unbalanced braces in relative URI"));
  }

  for name in resource.uri_parameters.keys() {
    if !resource.template_parameters().any(|declared| declared == name) {
      errors.push(format!("{uri}: URI parameter '{name}' not found in relative URI"));
    }
  }

  for param in resource.uri_parameters.iter() {
    validate_parameter(&uri, param, errors);
  }

  for (verb, action) in &resource.actions {
    let location = format!("{uri} {verb}");

    for param in action.headers.iter().chain(&action.query_parameters) {
      validate_parameter(&location, param, errors);
    }

    for mime in action.body.values() {
      validate_body(&location, mime, errors);
    }

    for (status, response) in &action.responses {
      let response_location = format!("{location} {status}");
      for param in &response.headers {
        validate_parameter(&response_location, param, errors);
      }
    }
  }

  for child in resource.resources.values() {
    validate_resource(child, &uri, errors);
  }
}

fn validate_body(location: &str, mime: &MimeType, errors: &mut Vec<String>) {
  let is_form = mime.is_form_urlencoded() || mime.is_multipart_form();

  if !is_form && !mime.form_parameters.is_empty() {
    errors.push(format!(
      "{location}: form parameters are not allowed on media type '{}'",
      mime.media_type
    ));
  }

  for (name, declared) in &mime.form_parameters {
    for param in declared {
      validate_parameter(location, (name, param), errors);
    }
  }
}

fn validate_parameter(location: &str, (name, param): (&String, &Parameter), errors: &mut Vec<String>) {
  if let (Some(min), Some(max)) = (param.min_length, param.max_length)
    && min > max
  {
    errors.push(format!("{location}: parameter '{name}' has minLength {min} > maxLength {max}"));
  }

  if let (Some(min), Some(max)) = (param.minimum.as_ref(), param.maximum.as_ref())
    && let (Some(min_value), Some(max_value)) = (min.as_f64(), max.as_f64())
    && min_value > max_value
  {
    errors.push(format!("{location}: parameter '{name}' has minimum {min} > maximum {max}"));
  }
}

fn has_balanced_braces(uri: &str) -> bool {
  let mut open = false;
  for ch in uri.chars() {
    match ch {
      '{' if open => return false,
      '{' => open = true,
      '}' if !open => return false,
      '}' => open = false,
      _ => {}
    }
  }
  !open
}
