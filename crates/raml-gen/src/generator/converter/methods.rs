use super::{
  GenerationContext, InterfaceBuilder, MediaTypeSet, ParamSink, ParameterBinder, ParameterKind, ResourceScope,
  ResponseTypeBuilder,
};
use crate::generator::{
  ast::{Documentation, GeneratedMethod, HttpBinding, MethodNameToken, MethodReturn},
  error::GeneratorResult,
  model::{Action, ActionType, MimeType, Parameter},
};

/// Which request body, if any, a generated method consumes.
#[derive(Debug, Clone, Copy)]
pub enum RequestBody<'m> {
  Absent,
  /// The action's only body media type.
  Sole(&'m MimeType),
  /// One of several body media types; the method name carries it.
  Split(&'m MimeType),
}

impl<'m> RequestBody<'m> {
  /// One entry per method the action expands into.
  pub fn variants(action: &'m Action) -> Vec<Self> {
    if !action.has_body() {
      return vec![Self::Absent];
    }
    if action.body.len() == 1 {
      action.body.values().map(Self::Sole).collect()
    } else {
      action.body.values().map(Self::Split).collect()
    }
  }

  pub fn mime(self) -> Option<&'m MimeType> {
    match self {
      Self::Absent => None,
      Self::Sole(mime) | Self::Split(mime) => Some(mime),
    }
  }

  fn name_qualifier(self) -> Option<&'m str> {
    match self {
      Self::Split(mime) => Some(&mime.media_type),
      _ => None,
    }
  }
}

/// Produces one generated method for an action and request body.
pub struct MethodSynthesizer<'c, 'a> {
  ctx: &'c mut GenerationContext<'a>,
}

impl<'c, 'a> MethodSynthesizer<'c, 'a> {
  pub fn new(ctx: &'c mut GenerationContext<'a>) -> Self {
    Self { ctx }
  }

  pub fn synthesize(
    &mut self,
    interface: &mut InterfaceBuilder,
    scope: &ResourceScope<'_>,
    verb: ActionType,
    action: &Action,
    body: RequestBody<'_>,
  ) -> GeneratorResult<GeneratedMethod> {
    let residual_path = interface.residual_path(scope.uri());
    let base_name = self.ctx.naming().method_name(verb, &residual_path, body.name_qualifier());
    let name = interface.claim_method_name(&base_name);

    let mut sink = ParamSink::new(Documentation::from_optional(action.description.as_ref()));
    self.bind_parameters(scope, verb, action, body, &mut sink)?;

    let media_types = MediaTypeSet::unique_response_media_types(action);
    let has_status_only_response = action.responses.values().any(|response| !response.has_body());
    let return_type = if media_types.is_empty() && !has_status_only_response {
      MethodReturn::Void(self.ctx.types().void_type())
    } else {
      let wrapper = ResponseTypeBuilder::new(self.ctx).build_response_type(interface, &name, action)?;
      MethodReturn::Wrapper(wrapper)
    };

    let binding = HttpBinding::builder()
      .method(verb.method())
      .maybe_path((!residual_path.is_empty()).then_some(residual_path))
      .maybe_consumes(body.mime().map(|mime| mime.media_type.clone()))
      .produces(media_types.media_types())
      .build();

    let (params, docs) = sink.into_parts();
    tracing::debug!(method = %name, verb = %verb, uri = scope.uri(), "synthesized method");

    Ok(
      GeneratedMethod::builder()
        .name(MethodNameToken::new(name))
        .binding(binding)
        .resource_uri(scope.uri().to_string())
        .params(params)
        .return_type(return_type)
        .docs(docs)
        .build(),
    )
  }

  /// Path parameters of the resource and then of each ancestor, followed by
  /// headers, query parameters and the body.
  fn bind_parameters(
    &mut self,
    scope: &ResourceScope<'_>,
    verb: ActionType,
    action: &Action,
    body: RequestBody<'_>,
    sink: &mut ParamSink,
  ) -> GeneratorResult<()> {
    let mut binder = ParameterBinder::new(self.ctx);

    for resource in scope.ancestry().map(|ancestor| ancestor.resource()) {
      for (name, parameter) in &resource.uri_parameters {
        binder.bind(name, parameter, ParameterKind::Path, sink)?;
      }

      let undeclared = resource
        .template_parameters()
        .filter(|name| !resource.uri_parameters.contains_key(*name));
      for name in undeclared {
        let parameter = Parameter {
          required: Some(true),
          ..Default::default()
        };
        binder.bind(name, &parameter, ParameterKind::Path, sink)?;
      }
    }

    for (name, parameter) in &action.headers {
      binder.bind(name, parameter, ParameterKind::Header, sink)?;
    }

    for (name, parameter) in &action.query_parameters {
      binder.bind(name, parameter, ParameterKind::Query, sink)?;
    }

    binder.add_body_parameters(verb, body.mime(), sink)
  }
}
