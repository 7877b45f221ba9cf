use crate::generator::model::ApiDescription;

const DEFAULT_VERSION: &str = "unversioned";

/// Description-level facts stamped into every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub base_uri: Option<String>,
}

impl CodeMetadata {
  pub fn from_description(description: &ApiDescription) -> Self {
    Self {
      title: description.title.clone(),
      version: description
        .version
        .clone()
        .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
      base_uri: description.base_uri.clone(),
    }
  }
}

pub(super) fn with_header(code: &str, metadata: &CodeMetadata, source_path: &str, subject: Option<&str>) -> String {
  let title = match subject {
    Some(subject) => format!("{}: `{subject}` resource", metadata.title),
    None => metadata.title.clone(),
  };
  let base_uri = metadata
    .base_uri
    .as_ref()
    .map(|uri| format!("//! Base URI: {uri}\n"))
    .unwrap_or_default();

  format!(
    r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! {title}
//! Source: {source_path}
//! Version: {version}
{base_uri}//! Generated by `raml-gen`
#![allow(clippy::doc_markdown)]
#![allow(unused_imports)]

{code}",
    version = metadata.version,
  )
}
