use super::{GenerationContext, InterfaceBuilder, ParamSink, ParameterKind};
use crate::generator::{
  ast::{
    ArgumentToken, Documentation, FactoryStatus, MethodNameToken, MethodParam, ParamBinding, ResponseFactory,
    ResponseWrapperDef, StatusCodeToken, TypeRef, TypeToken,
  },
  error::GeneratorResult,
  model::{Action, Response},
  naming::{
    constants::{
      FACTORY_BUILDER_LOCAL, GENERIC_PAYLOAD_ARGUMENT_NAME, GENERIC_RESPONSE_METHOD_NAME,
      MULTIPLE_RESPONSE_HEADERS_ARGUMENT_NAME, RESPONSE_BODY_DESCRIPTION, RESPONSE_HEADER_WILDCARD_SYMBOL,
      STATUS_ARGUMENT_NAME, STATUS_DESCRIPTION, STREAM_BODY_DESCRIPTION,
    },
    policy::NameScope,
  },
};

/// Builds the per-method response wrapper: one factory per declared
/// (status, media type) pair, then the generic fallback.
pub struct ResponseTypeBuilder<'c, 'a> {
  ctx: &'c mut GenerationContext<'a>,
}

impl<'c, 'a> ResponseTypeBuilder<'c, 'a> {
  pub fn new(ctx: &'c mut GenerationContext<'a>) -> Self {
    Self { ctx }
  }

  pub fn build_response_type(
    &mut self,
    interface: &mut InterfaceBuilder,
    method_name: &str,
    action: &Action,
  ) -> GeneratorResult<ResponseWrapperDef> {
    let naming = self.ctx.naming();
    let type_name = interface.claim_type_name(&naming.response_type_name(method_name));
    let mut factory_names = NameScope::new();
    let mut factories = vec![];

    for (status_key, response) in &action.responses {
      let (status, issue) = StatusCodeToken::parse_lenient(status_key);
      if let Some(issue) = issue {
        self.ctx.warn(format!(
          "response status `{status_key}` of `{method_name}` {issue}; treated as {status}"
        ));
      }

      if !response.has_body() {
        let name = factory_names.claim(&naming.factory_name(status, None));
        let sink = self.header_params(response)?;
        factories.push(Self::factory(name, FactoryStatus::Fixed(status), None, sink));
        continue;
      }

      for mime in response.body.values() {
        let name = factory_names.claim(&naming.factory_name(status, Some(&mime.media_type)));
        let mut sink = self.header_params(response)?;
        let entity_type = self.ctx.types().response_entity_type(mime)?;
        sink.push(
          Self::param(GENERIC_PAYLOAD_ARGUMENT_NAME, entity_type, ParamBinding::Entity),
          RESPONSE_BODY_DESCRIPTION,
        );
        factories.push(Self::factory(
          name,
          FactoryStatus::Fixed(status),
          Some(mime.media_type.clone()),
          sink,
        ));
      }
    }

    let fallback = self.fallback(&mut factory_names);

    Ok(
      ResponseWrapperDef::builder()
        .name(TypeToken::new(type_name))
        .factories(factories)
        .fallback(fallback)
        .build(),
    )
  }

  /// One argument per declared header. Headers whose name holds the wildcard
  /// marker collapse into a single free-form header map.
  fn header_params(&mut self, response: &Response) -> GeneratorResult<ParamSink> {
    let mut sink = ParamSink::with_reserved(
      Documentation::from_optional(response.description.as_ref()),
      &[FACTORY_BUILDER_LOCAL],
    );
    let mut wildcard_docs = vec![];
    let mut has_wildcard = false;

    for (name, header) in &response.headers {
      if name.contains(RESPONSE_HEADER_WILDCARD_SYMBOL) {
        has_wildcard = true;
        let doc = header.doc_text();
        if !doc.is_empty() {
          wildcard_docs.push(doc);
        }
        continue;
      }

      let argument = self.ctx.naming().argument_name(name);
      let rust_type = self.ctx.types().parameter_type(name, header, ParameterKind::Header)?;
      sink.push(
        Self::param(&argument, rust_type, ParamBinding::ResponseHeader(name.clone())),
        header.doc_text(),
      );
    }

    if has_wildcard {
      let headers_type = self.ctx.types().response_headers_type();
      sink.push(
        Self::param(MULTIPLE_RESPONSE_HEADERS_ARGUMENT_NAME, headers_type, ParamBinding::ResponseHeaders),
        wildcard_docs.join("\n"),
      );
    }

    Ok(sink)
  }

  fn fallback(&self, factory_names: &mut NameScope) -> ResponseFactory {
    let types = self.ctx.types();
    let mut sink = ParamSink::with_reserved(
      Documentation::from_lines(["Response with an arbitrary status and raw payload."]),
      &[FACTORY_BUILDER_LOCAL],
    );
    sink.push(
      Self::param(STATUS_ARGUMENT_NAME, types.status_type(), ParamBinding::Status),
      STATUS_DESCRIPTION,
    );
    sink.push(
      Self::param(GENERIC_PAYLOAD_ARGUMENT_NAME, types.streaming_output_type(), ParamBinding::Stream),
      STREAM_BODY_DESCRIPTION,
    );
    let name = factory_names.claim(GENERIC_RESPONSE_METHOD_NAME);
    Self::factory(name, FactoryStatus::Dynamic, None, sink)
  }

  fn param(name: &str, rust_type: TypeRef, binding: ParamBinding) -> MethodParam {
    MethodParam::builder()
      .name(ArgumentToken::new(name))
      .rust_type(rust_type)
      .binding(binding)
      .build()
  }

  fn factory(name: String, status: FactoryStatus, content_type: Option<String>, sink: ParamSink) -> ResponseFactory {
    let (params, docs) = sink.into_parts();
    ResponseFactory::builder()
      .name(MethodNameToken::new(name))
      .status(status)
      .maybe_content_type(content_type)
      .params(params)
      .docs(docs)
      .build()
  }
}
