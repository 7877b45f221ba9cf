use std::fmt::{Display, Formatter};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::Ident;

fn to_ident(name: &str) -> Ident {
  match name.strip_prefix("r#") {
    Some(raw) => Ident::new_raw(raw, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

macro_rules! ident_token {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct $name(String);

    impl $name {
      pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl PartialEq<str> for $name {
      fn eq(&self, other: &str) -> bool {
        self.0 == other
      }
    }

    impl PartialEq<&str> for $name {
      fn eq(&self, other: &&str) -> bool {
        self.0 == *other
      }
    }

    impl ToTokens for $name {
      fn to_tokens(&self, tokens: &mut TokenStream) {
        to_ident(&self.0).to_tokens(tokens);
      }
    }
  };
}

ident_token!(
  /// PascalCase name of a generated trait or struct.
  TypeToken
);
ident_token!(
  /// snake_case name of a generated function.
  MethodNameToken
);
ident_token!(
  /// snake_case name of a generated argument.
  ArgumentToken
);
