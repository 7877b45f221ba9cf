use std::fmt::{Display, Formatter};

use itertools::Itertools;
use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};

/// A constraint attached to a bound parameter. Rendered as a
/// `raml_gen_support::Constraint` in the generated route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationAttribute {
  Length { min: Option<u64>, max: Option<u64> },
  Min(i64),
  Max(i64),
  NotNull,
}

impl Display for ValidationAttribute {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Length { min, max } => {
        let parts = [min.map(|m| format!("min = {m}")), max.map(|m| format!("max = {m}"))];
        write!(f, "length({})", parts.into_iter().flatten().join(", "))
      }
      Self::Min(bound) => write!(f, "min({bound})"),
      Self::Max(bound) => write!(f, "max({bound})"),
      Self::NotNull => write!(f, "not_null"),
    }
  }
}

fn option_tokens(value: Option<u64>) -> TokenStream {
  match value {
    Some(v) => {
      let lit = Literal::u64_unsuffixed(v);
      quote! { Some(#lit) }
    }
    None => quote! { None },
  }
}

fn signed_tokens(value: i64) -> TokenStream {
  let lit = Literal::u64_unsuffixed(value.unsigned_abs());
  if value < 0 { quote! { -#lit } } else { quote! { #lit } }
}

impl ToTokens for ValidationAttribute {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let attr = match self {
      Self::Length { min, max } => {
        let min = option_tokens(*min);
        let max = option_tokens(*max);
        quote! { Constraint::Length { min: #min, max: #max } }
      }
      Self::Min(bound) => {
        let bound = signed_tokens(*bound);
        quote! { Constraint::Min(#bound) }
      }
      Self::Max(bound) => {
        let bound = signed_tokens(*bound);
        quote! { Constraint::Max(#bound) }
      }
      Self::NotNull => quote! { Constraint::NotNull },
    };
    tokens.extend(attr);
  }
}
