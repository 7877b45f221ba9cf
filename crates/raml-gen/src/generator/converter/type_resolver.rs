use mediatype::MediaType;

use super::ParameterKind;
use crate::generator::{
  ast::{RustPrimitive, TypeRef},
  error::{GeneratorError, GeneratorResult},
  model::{MimeType, ParamType, Parameter},
  naming::identifiers::to_rust_type_name,
};

/// Maps declared parameter shapes and media types onto emitted types.
pub trait TypeResolver {
  fn parameter_type(&self, name: &str, parameter: &Parameter, kind: ParameterKind) -> GeneratorResult<TypeRef>;

  /// Type of a request entity; `None` when the verb needs a body but the
  /// action declares none.
  fn request_entity_type(&self, mime: Option<&MimeType>) -> GeneratorResult<TypeRef>;

  fn response_entity_type(&self, mime: &MimeType) -> GeneratorResult<TypeRef>;

  fn void_type(&self) -> TypeRef {
    TypeRef::void()
  }

  fn status_type(&self) -> TypeRef {
    TypeRef::new(RustPrimitive::U16)
  }

  fn streaming_output_type(&self) -> TypeRef {
    TypeRef::new(RustPrimitive::StreamingOutput)
  }

  fn multipart_type(&self) -> TypeRef {
    TypeRef::new(RustPrimitive::Multipart)
  }

  fn form_fields_type(&self) -> TypeRef {
    TypeRef::new(RustPrimitive::FormFields)
  }

  fn response_headers_type(&self) -> TypeRef {
    TypeRef::new(RustPrimitive::ResponseHeaders)
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityShape {
  Json,
  Text,
  Binary,
}

impl DefaultTypeResolver {
  fn primitive(name: &str, parameter: &Parameter, kind: ParameterKind) -> GeneratorResult<RustPrimitive> {
    Ok(match parameter.param_type {
      ParamType::String | ParamType::Date => RustPrimitive::String,
      ParamType::Integer => RustPrimitive::I64,
      ParamType::Number => RustPrimitive::F64,
      ParamType::Boolean => RustPrimitive::Bool,
      ParamType::File if kind == ParameterKind::Form => RustPrimitive::Bytes,
      ParamType::File => {
        return Err(GeneratorError::TypeResolution {
          name: name.to_string(),
          reason: format!("`file` is only allowed for form fields, not {kind} parameters"),
        });
      }
    })
  }

  fn shape(media_type: &str) -> EntityShape {
    let Ok(parsed) = MediaType::parse(media_type) else {
      return EntityShape::Binary;
    };
    let subtype = parsed.subty.as_str();
    let suffix = parsed.suffix.map(|s| s.as_str());

    if subtype.eq_ignore_ascii_case("json") || suffix.is_some_and(|s| s.eq_ignore_ascii_case("json")) {
      EntityShape::Json
    } else if parsed.ty.as_str().eq_ignore_ascii_case("text")
      || subtype.eq_ignore_ascii_case("xml")
      || suffix.is_some_and(|s| s.eq_ignore_ascii_case("xml"))
    {
      EntityShape::Text
    } else {
      EntityShape::Binary
    }
  }

  /// A schema given by name rather than inline.
  fn schema_reference(mime: &MimeType) -> Option<&str> {
    let schema = mime.schema.as_deref()?.trim();
    let mut chars = schema.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    (starts_alpha && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))).then_some(schema)
  }

  fn entity_type(mime: &MimeType, binary: RustPrimitive) -> TypeRef {
    let shape = Self::shape(&mime.media_type);
    if let Some(schema) = Self::schema_reference(mime)
      && shape != EntityShape::Binary
    {
      return TypeRef::new(RustPrimitive::Custom(to_rust_type_name(schema)));
    }

    match shape {
      EntityShape::Json => TypeRef::new(RustPrimitive::Value),
      EntityShape::Text => TypeRef::new(RustPrimitive::String),
      EntityShape::Binary => TypeRef::new(binary),
    }
  }
}

impl TypeResolver for DefaultTypeResolver {
  fn parameter_type(&self, name: &str, parameter: &Parameter, kind: ParameterKind) -> GeneratorResult<TypeRef> {
    let mut type_ref = TypeRef::new(Self::primitive(name, parameter, kind)?);
    if parameter.repeat {
      type_ref = type_ref.with_vec();
    }
    if !parameter.is_required() && parameter.default_value().is_none() {
      type_ref = type_ref.with_option();
    }
    Ok(type_ref)
  }

  fn request_entity_type(&self, mime: Option<&MimeType>) -> GeneratorResult<TypeRef> {
    Ok(match mime {
      Some(mime) => Self::entity_type(mime, RustPrimitive::Bytes),
      None => TypeRef::new(RustPrimitive::Bytes),
    })
  }

  fn response_entity_type(&self, mime: &MimeType) -> GeneratorResult<TypeRef> {
    Ok(Self::entity_type(mime, RustPrimitive::StreamingOutput))
  }
}
