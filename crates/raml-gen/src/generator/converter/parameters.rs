use serde_json::Number;
use strum::Display;

use super::GenerationContext;
use crate::generator::{
  ast::{ArgumentToken, Documentation, MethodParam, ParamBinding, TypeRef, ValidationAttribute},
  error::GeneratorResult,
  model::{ActionType, MimeType, Parameter},
  naming::{
    constants::{GENERIC_PAYLOAD_ARGUMENT_NAME, REQUEST_BODY_DESCRIPTION},
    policy::NameScope,
  },
};

/// Where a declared parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterKind {
  Path,
  Header,
  Query,
  Form,
}

impl ParameterKind {
  fn binding(self, declared: &str) -> ParamBinding {
    let declared = declared.to_string();
    match self {
      Self::Path => ParamBinding::Path(declared),
      Self::Header => ParamBinding::Header(declared),
      Self::Query => ParamBinding::Query(declared),
      Self::Form => ParamBinding::Form(declared),
    }
  }
}

/// Argument list under construction, with its documentation entries.
#[derive(Debug, Clone, Default)]
pub struct ParamSink {
  params: Vec<MethodParam>,
  docs: Documentation,
  names: NameScope,
}

impl ParamSink {
  pub fn new(docs: Documentation) -> Self {
    Self {
      docs,
      ..Default::default()
    }
  }

  /// Sink whose argument names must avoid `reserved`.
  pub fn with_reserved(docs: Documentation, reserved: &[&str]) -> Self {
    let mut sink = Self::new(docs);
    for name in reserved {
      sink.names.claim(name);
    }
    sink
  }

  /// Appends `param`, renaming it when its argument name is already taken.
  pub fn push(&mut self, mut param: MethodParam, doc: impl Into<String>) {
    let name = self.names.claim(param.name.as_str());
    self.docs.add_param(name.clone(), doc);
    param.name = ArgumentToken::new(name);
    self.params.push(param);
  }

  pub fn into_parts(self) -> (Vec<MethodParam>, Documentation) {
    (self.params, self.docs)
  }
}

/// Turns declared parameters and request bodies into method arguments.
pub struct ParameterBinder<'c, 'a> {
  ctx: &'c mut GenerationContext<'a>,
}

impl<'c, 'a> ParameterBinder<'c, 'a> {
  pub fn new(ctx: &'c mut GenerationContext<'a>) -> Self {
    Self { ctx }
  }

  pub fn bind(
    &mut self,
    name: &str,
    parameter: &Parameter,
    kind: ParameterKind,
    sink: &mut ParamSink,
  ) -> GeneratorResult<()> {
    let argument = self.ctx.naming().argument_name(name);
    let rust_type = self.ctx.types().parameter_type(name, parameter, kind)?;
    let validation_attrs = if self.ctx.use_validation() {
      self.validation_attrs(name, parameter)
    } else {
      vec![]
    };

    let param = MethodParam::builder()
      .name(ArgumentToken::new(argument))
      .rust_type(rust_type)
      .binding(kind.binding(name))
      .maybe_default_value(parameter.default_value())
      .validation_attrs(validation_attrs)
      .build();
    sink.push(param, parameter.doc_text());
    Ok(())
  }

  /// Adds the request body arguments. Nothing is added when the verb takes
  /// no body and no media type is given.
  pub fn add_body_parameters(
    &mut self,
    verb: ActionType,
    mime: Option<&MimeType>,
    sink: &mut ParamSink,
  ) -> GeneratorResult<()> {
    if !verb.has_body() && mime.is_none() {
      return Ok(());
    }

    match mime {
      Some(mime) if mime.is_form_urlencoded() => {
        if mime.has_multi_type_form_parameter() {
          let form_fields = self.ctx.types().form_fields_type();
          Self::push_catch_all(mime, form_fields, ParamBinding::FormFields, sink);
          return Ok(());
        }
        for (field, declared) in &mime.form_parameters {
          if let Some(parameter) = declared.first() {
            self.bind(field, parameter, ParameterKind::Form, sink)?;
          }
        }
      }
      Some(mime) if mime.is_multipart_form() => {
        let multipart = self.ctx.types().multipart_type();
        Self::push_catch_all(mime, multipart, ParamBinding::Multipart, sink);
      }
      _ => {
        let rust_type = self.ctx.types().request_entity_type(mime)?;
        sink.push(Self::entity_param(rust_type, ParamBinding::Entity), REQUEST_BODY_DESCRIPTION);
      }
    }
    Ok(())
  }

  fn push_catch_all(mime: &MimeType, rust_type: TypeRef, binding: ParamBinding, sink: &mut ParamSink) {
    let docs = mime
      .form_parameters
      .iter()
      .flat_map(|(field, declared)| declared.iter().map(move |p| format!("{field}: {}", p.doc_text())))
      .map(|line| line.trim_end().to_string())
      .collect::<Vec<_>>();
    let doc = if docs.is_empty() {
      REQUEST_BODY_DESCRIPTION.to_string()
    } else {
      docs.join("\n")
    };
    sink.push(Self::entity_param(rust_type, binding), doc);
  }

  fn entity_param(rust_type: TypeRef, binding: ParamBinding) -> MethodParam {
    MethodParam::builder()
      .name(ArgumentToken::new(GENERIC_PAYLOAD_ARGUMENT_NAME))
      .rust_type(rust_type)
      .binding(binding)
      .build()
  }

  fn validation_attrs(&mut self, name: &str, parameter: &Parameter) -> Vec<ValidationAttribute> {
    let mut attrs = vec![];

    if parameter.min_length.is_some() || parameter.max_length.is_some() {
      attrs.push(ValidationAttribute::Length {
        min: parameter.min_length,
        max: parameter.max_length,
      });
    }

    if let Some(minimum) = &parameter.minimum
      && let Some(bound) = self.integer_bound(name, "minimum", minimum)
    {
      attrs.push(ValidationAttribute::Min(bound));
    }

    if let Some(maximum) = &parameter.maximum
      && let Some(bound) = self.integer_bound(name, "maximum", maximum)
    {
      attrs.push(ValidationAttribute::Max(bound));
    }

    if parameter.is_required() {
      attrs.push(ValidationAttribute::NotNull);
    }

    if parameter.has_pattern() {
      self
        .ctx
        .warn(format!("pattern constraint on `{name}` is not supported and was skipped"));
    }

    attrs
  }

  /// Exact integer value of a numeric bound; anything else is reported and
  /// skipped.
  #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
  fn integer_bound(&mut self, name: &str, which: &str, bound: &Number) -> Option<i64> {
    let exact = bound.as_i64().or_else(|| {
      let value = bound.as_f64()?;
      let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
      (value.fract() == 0.0 && in_range).then_some(value as i64)
    });

    if exact.is_none() {
      self.ctx.warn(format!(
        "{which} of `{name}` ({bound}) is not an integer in range; constraint skipped"
      ));
    }
    exact
  }
}
