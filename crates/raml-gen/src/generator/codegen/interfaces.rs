use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;

use super::{ident, types::type_tokens};
use crate::generator::{
  ast::{Documentation, GeneratedInterface, GeneratedMethod, MethodParam, MethodReturn},
  error::GeneratorResult,
};

pub(super) fn generate_trait(interface: &GeneratedInterface, vis: &TokenStream) -> GeneratorResult<TokenStream> {
  let name = ident(interface.name.as_str())?;
  let docs = &interface.docs;
  let methods = interface
    .methods
    .iter()
    .map(generate_method)
    .collect::<GeneratorResult<Vec<_>>>()?;

  Ok(quote! {
    #docs
    #[allow(async_fn_in_trait)]
    #vis trait #name {
      #(#methods)*
    }
  })
}

fn generate_method(method: &GeneratedMethod) -> GeneratorResult<TokenStream> {
  let name = ident(method.name.as_str())?;
  let docs = method_docs(method);
  let args = method.params.iter().map(argument).collect::<GeneratorResult<Vec<_>>>()?;

  let return_type = match &method.return_type {
    MethodReturn::Void(void) if void.is_void() => quote! {},
    MethodReturn::Void(other) => {
      let other = type_tokens(other)?;
      quote! { -> #other }
    }
    MethodReturn::Wrapper(wrapper) => {
      let wrapper = ident(wrapper.name.as_str())?;
      quote! { -> #wrapper }
    }
  };

  Ok(quote! {
    #docs
    async fn #name(&self, #(#args),*) #return_type;
  })
}

pub(super) fn argument(param: &MethodParam) -> GeneratorResult<TokenStream> {
  let name = ident(param.name.as_str())?;
  let rust_type = type_tokens(&param.rust_type)?;
  Ok(quote! { #name: #rust_type })
}

/// Method docs followed by a summary of the HTTP binding.
fn method_docs(method: &GeneratedMethod) -> Documentation {
  let mut docs = method.docs.clone();
  if !docs.lines().is_empty() {
    docs.push("");
  }
  docs.push(format!("`{} {}`", method.binding.method, method.resource_uri));

  if let Some(consumes) = &method.binding.consumes {
    docs.push("");
    docs.push(format!("Consumes `{consumes}`."));
  }
  if !method.binding.produces.is_empty() {
    let produces = method
      .binding
      .produces
      .iter()
      .map(|media_type| format!("`{media_type}`"))
      .join(", ");
    docs.push("");
    docs.push(format!("Produces {produces}."));
  }
  docs
}
