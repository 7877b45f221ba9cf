//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget API: `types` resource
//! Source: fixtures/widgets.yaml
//! Version: v2
//! Generated by `raml-gen`
#![allow(clippy::doc_markdown)]
#![allow(unused_imports)]

pub type Widget = serde_json::Value;
pub type WidgetList = serde_json::Value;
