use std::fmt::{Display, Formatter};

/// Type reference with wrapper support (Option, Vec)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRef {
  pub base_type: RustPrimitive,
  pub nullable: bool,
  pub is_array: bool,
}

impl TypeRef {
  pub fn new(base_type: impl Into<RustPrimitive>) -> Self {
    Self {
      base_type: base_type.into(),
      nullable: false,
      is_array: false,
    }
  }

  #[must_use]
  pub fn void() -> Self {
    Self::new(RustPrimitive::Unit)
  }

  #[must_use]
  pub fn with_option(mut self) -> Self {
    self.nullable = true;
    self
  }

  #[must_use]
  pub fn with_vec(mut self) -> Self {
    self.is_array = true;
    self
  }

  pub fn is_void(&self) -> bool {
    self.base_type == RustPrimitive::Unit && !self.is_array && !self.nullable
  }

  /// Get the full Rust type string
  pub fn to_rust_type(&self) -> String {
    let mut result = self.base_type.to_string();

    if self.is_array {
      result = format!("Vec<{result}>");
    }

    if self.nullable {
      result = format!("Option<{result}>");
    }

    result
  }

  /// Name of a type the generated code imports from elsewhere, if any.
  pub fn custom_name(&self) -> Option<&str> {
    match &self.base_type {
      RustPrimitive::Custom(name) => Some(name),
      _ => None,
    }
  }
}

impl From<RustPrimitive> for TypeRef {
  fn from(primitive: RustPrimitive) -> Self {
    TypeRef::new(primitive)
  }
}

impl Display for TypeRef {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.to_rust_type())
  }
}

/// Rust primitives plus the runtime types generated code borrows from the
/// support crate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RustPrimitive {
  I64,
  U16,
  F64,
  Bool,
  #[default]
  String,
  Bytes,
  Value,
  Unit,
  StreamingOutput,
  Multipart,
  FormFields,
  ResponseHeaders,
  Custom(String),
}

impl RustPrimitive {
  /// Types provided by the support crate and imported by every generated module.
  pub const SUPPORT_TYPES: [RustPrimitive; 4] = [
    RustPrimitive::StreamingOutput,
    RustPrimitive::Multipart,
    RustPrimitive::FormFields,
    RustPrimitive::ResponseHeaders,
  ];

  pub fn is_support_type(&self) -> bool {
    Self::SUPPORT_TYPES.contains(self)
  }
}

impl Display for RustPrimitive {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      RustPrimitive::I64 => "i64",
      RustPrimitive::U16 => "u16",
      RustPrimitive::F64 => "f64",
      RustPrimitive::Bool => "bool",
      RustPrimitive::String => "String",
      RustPrimitive::Bytes => "Vec<u8>",
      RustPrimitive::Value => "serde_json::Value",
      RustPrimitive::Unit => "()",
      RustPrimitive::StreamingOutput => "StreamingOutput",
      RustPrimitive::Multipart => "Multipart",
      RustPrimitive::FormFields => "FormFields",
      RustPrimitive::ResponseHeaders => "ResponseHeaders",
      RustPrimitive::Custom(name) => name,
    };
    f.write_str(name)
  }
}

impl From<&str> for RustPrimitive {
  fn from(name: &str) -> Self {
    RustPrimitive::Custom(name.to_string())
  }
}
