use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{ident, interfaces::argument};
use crate::generator::{
  ast::{
    FactoryStatus, GeneratedInterface, GeneratedMethod, MethodParam, ParamBinding, ResponseFactory,
    ResponseWrapperDef, RustPrimitive, TypeRef,
  },
  error::{GeneratorError, GeneratorResult},
};

/// A newtype over the runtime wrapper. The inner value is private, so the
/// factories are the only way to build one.
pub(super) fn generate_wrapper(
  interface: &GeneratedInterface,
  method: &GeneratedMethod,
  wrapper: &ResponseWrapperDef,
  vis: &TokenStream,
) -> GeneratorResult<TokenStream> {
  let name = ident(wrapper.name.as_str())?;
  let doc = format!(" Response of [`{}::{}`].", interface.name, method.name);
  let factories = wrapper
    .all_factories()
    .map(|factory| generate_factory(factory, vis))
    .collect::<GeneratorResult<Vec<_>>>()?;

  Ok(quote! {
    #[doc = #doc]
    #[derive(Debug)]
    #vis struct #name(ResponseWrapper);

    impl #name {
      #(#factories)*

      #vis fn into_inner(self) -> ResponseWrapper {
        self.0
      }
    }

    impl From<#name> for ResponseWrapper {
      fn from(response: #name) -> Self {
        response.0
      }
    }
  })
}

fn generate_factory(factory: &ResponseFactory, vis: &TokenStream) -> GeneratorResult<TokenStream> {
  let name = ident(factory.name.as_str())?;
  let docs = &factory.docs;
  let args = factory.params.iter().map(argument).collect::<GeneratorResult<Vec<_>>>()?;

  let status = match factory.status {
    FactoryStatus::Fixed(code) => {
      let code = Literal::u16_unsuffixed(code.code());
      quote! { #code }
    }
    FactoryStatus::Dynamic => {
      let status = factory
        .params
        .iter()
        .find(|p| p.binding == ParamBinding::Status)
        .ok_or_else(|| GeneratorError::Emit {
          artifact: factory.name.to_string(),
          reason: "dynamic status without a status argument".to_string(),
        })?;
      let status = ident(status.name.as_str())?;
      quote! { #status }
    }
  };

  let content_type = factory.content_type.as_ref().map(|content_type| {
    quote! { let builder = builder.header("Content-Type", #content_type); }
  });
  let steps = factory
    .params
    .iter()
    .map(builder_step)
    .collect::<GeneratorResult<Vec<_>>>()?;

  Ok(quote! {
    #docs
    #vis fn #name(#(#args),*) -> Self {
      let builder = ResponseBuilder::status(#status);
      #content_type
      #(#steps)*
      Self(builder.build())
    }
  })
}

/// The builder call a factory argument contributes.
fn builder_step(param: &MethodParam) -> GeneratorResult<TokenStream> {
  let arg = ident(param.name.as_str())?;
  let rust_type = &param.rust_type;

  Ok(match &param.binding {
    ParamBinding::ResponseHeader(header) => match (rust_type.nullable, rust_type.is_array) {
      (true, true) => quote! {
        let builder = #arg.into_iter().flatten().fold(builder, |builder, value| builder.header(#header, value));
      },
      (true, false) | (false, true) => quote! {
        let builder = #arg.into_iter().fold(builder, |builder, value| builder.header(#header, value));
      },
      (false, false) => quote! { let builder = builder.header(#header, #arg); },
    },
    ParamBinding::ResponseHeaders => quote! { let builder = builder.headers(#arg); },
    ParamBinding::Stream => quote! { let builder = builder.stream(#arg); },
    ParamBinding::Entity if *rust_type == TypeRef::new(RustPrimitive::StreamingOutput) => {
      quote! { let builder = builder.stream(#arg); }
    }
    ParamBinding::Entity => quote! { let builder = builder.entity(#arg); },
    _ => quote! {},
  })
}
