use std::collections::BTreeSet;

use mediatype::MediaType;

use super::{
  constants::{RESPONSE_SUFFIX, ROOT_INTERFACE_NAME, TEMPLATE_SEGMENT_PREFIX},
  identifiers::{ensure_unique, sanitize, to_rust_field_name, to_rust_type_name},
};
use crate::generator::{ast::StatusCodeToken, model::ActionType};

/// Derives identifiers for generated items. Implementations must be
/// deterministic; uniqueness within a scope is enforced by [`NameScope`].
pub trait NamingPolicy {
  /// Name of the interface generated for a top-level resource.
  fn interface_name(&self, relative_uri: &str, display_name: Option<&str>) -> String;

  /// Name of a resource method. `residual_path` is relative to the interface
  /// base path; `media_type` is given only when the action is split per
  /// request media type.
  fn method_name(&self, verb: ActionType, residual_path: &str, media_type: Option<&str>) -> String;

  /// Name of the response wrapper type of a method.
  fn response_type_name(&self, method_name: &str) -> String;

  /// Name of a response factory.
  fn factory_name(&self, status: StatusCodeToken, media_type: Option<&str>) -> String;

  /// Argument identifier for a declared parameter name.
  fn argument_name(&self, declared: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNamingPolicy;

impl DefaultNamingPolicy {
  /// Short qualifier for a media type: `json` for `application/json`,
  /// `api_json` for `application/vnd.api+json`, `text` for `text/plain`.
  pub fn media_type_qualifier(media_type: &str) -> String {
    let Ok(parsed) = MediaType::parse(media_type) else {
      return sanitize(media_type).to_lowercase();
    };

    let subtype = parsed.subty.as_str();
    let mut qualifier = if subtype.eq_ignore_ascii_case("plain") {
      parsed.ty.as_str().to_string()
    } else {
      let trimmed = subtype.strip_prefix("vnd.").unwrap_or(subtype);
      trimmed.strip_prefix("x-").unwrap_or(trimmed).to_string()
    };

    if let Some(suffix) = parsed.suffix {
      qualifier.push('_');
      qualifier.push_str(suffix.as_str());
    }

    sanitize(&qualifier).to_lowercase()
  }

  fn path_words(path: &str) -> Vec<String> {
    path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(param) => format!("{TEMPLATE_SEGMENT_PREFIX}_{}", sanitize(param)),
        None => sanitize(&segment.replace(['{', '}'], "_")),
      })
      .filter(|word| !word.is_empty())
      .collect()
  }
}

impl NamingPolicy for DefaultNamingPolicy {
  fn interface_name(&self, relative_uri: &str, display_name: Option<&str>) -> String {
    if let Some(display) = display_name.filter(|d| !d.trim().is_empty()) {
      return to_rust_type_name(display);
    }

    let literal_segments = relative_uri
      .split('/')
      .filter(|segment| !segment.is_empty() && !segment.starts_with('{'))
      .collect::<Vec<_>>();

    if literal_segments.is_empty() {
      ROOT_INTERFACE_NAME.to_string()
    } else {
      to_rust_type_name(&literal_segments.join("_"))
    }
  }

  fn method_name(&self, verb: ActionType, residual_path: &str, media_type: Option<&str>) -> String {
    let mut words = vec![verb.as_lowercase()];
    words.extend(Self::path_words(residual_path));
    if let Some(media_type) = media_type {
      words.push(Self::media_type_qualifier(media_type));
    }
    to_rust_field_name(&words.join("_"))
  }

  fn response_type_name(&self, method_name: &str) -> String {
    format!("{}{RESPONSE_SUFFIX}", to_rust_type_name(method_name.trim_start_matches("r#")))
  }

  fn factory_name(&self, status: StatusCodeToken, media_type: Option<&str>) -> String {
    let stem = status.factory_stem().to_lowercase();
    match media_type {
      Some(media_type) => to_rust_field_name(&format!("{}_{stem}", Self::media_type_qualifier(media_type))),
      None => to_rust_field_name(&stem),
    }
  }

  fn argument_name(&self, declared: &str) -> String {
    to_rust_field_name(declared)
  }
}

/// Names already taken within one generated scope (an interface, a method's
/// argument list, a wrapper's factories).
#[derive(Debug, Clone, Default)]
pub struct NameScope {
  used: BTreeSet<String>,
}

impl NameScope {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reserves `base`, or `base2`, `base3`, ... when already taken.
  pub fn claim(&mut self, base: &str) -> String {
    let name = ensure_unique(base, &self.used);
    self.used.insert(name.clone());
    name
  }
}
