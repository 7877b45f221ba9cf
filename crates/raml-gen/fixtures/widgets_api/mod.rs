//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget API
//! Source: fixtures/widgets.yaml
//! Version: v2
//! Generated by `raml-gen`
#![allow(clippy::doc_markdown)]
#![allow(unused_imports)]

pub mod types;
pub mod widgets;
pub use widgets::Widgets;
