use proc_macro2::TokenStream;
use quote::ToTokens;

use crate::generator::{
  ast::TypeRef,
  error::{GeneratorError, GeneratorResult},
};

pub(super) fn type_tokens(type_ref: &TypeRef) -> GeneratorResult<TokenStream> {
  let rendered = type_ref.to_rust_type();
  syn::parse_str::<syn::Type>(&rendered)
    .map(ToTokens::into_token_stream)
    .map_err(|e| GeneratorError::Emit {
      artifact: rendered,
      reason: e.to_string(),
    })
}
