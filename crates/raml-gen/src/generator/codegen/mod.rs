//! Rendering of compiled interfaces into Rust source.

mod header;
mod interfaces;
mod mod_file;
mod responses;
mod routes;
mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

pub use header::CodeMetadata;
pub use mod_file::ModFileGenerator;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::{
  ast::{GeneratedInterface, RustPrimitive},
  config::CodegenConfig,
  error::{GeneratorError, GeneratorResult},
  naming::{identifiers::to_rust_field_name, policy::NameScope},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

/// One rendered source file, named relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub code: String,
  /// Whether an existing file of that name is replaced.
  pub overwrite: bool,
}

/// An interface together with the module it is rendered into.
#[derive(Debug, Clone)]
pub struct InterfaceModule<'a> {
  pub interface: &'a GeneratedInterface,
  pub module: String,
}

/// Base module name of an interface, e.g. `user_accounts` for `UserAccounts`.
fn module_name(interface: &GeneratedInterface) -> String {
  let name = to_rust_field_name(interface.name.as_str());
  match name.strip_prefix("r#") {
    Some(keyword) => format!("{keyword}_"),
    None => name,
  }
}

/// Assigns each interface a distinct module name that also avoids `mod` and
/// the configured types module.
pub fn assign_modules<'a>(interfaces: &'a [GeneratedInterface], config: &CodegenConfig) -> Vec<InterfaceModule<'a>> {
  let mut modules = NameScope::new();
  modules.claim(mod_file::MOD_FILE_STEM);
  modules.claim(&config.types_module);

  interfaces
    .iter()
    .map(|interface| InterfaceModule {
      interface,
      module: modules.claim(&module_name(interface)),
    })
    .collect()
}

/// Renders one interface module: the trait, its response wrappers and the
/// route table.
pub fn render_interface(
  module: &InterfaceModule<'_>,
  config: &CodegenConfig,
  metadata: &CodeMetadata,
  source_path: &str,
) -> GeneratorResult<GeneratedFile> {
  let interface = module.interface;
  let artifact = format!("{}.rs", module.module);
  let vis = config.visibility.to_tokens();

  let uses = module_uses(interface, config, &artifact)?;
  let trait_tokens = interfaces::generate_trait(interface, &vis)?;
  let wrapper_tokens = interface
    .methods
    .iter()
    .filter_map(|method| method.return_type.wrapper().map(|wrapper| (method, wrapper)))
    .map(|(method, wrapper)| responses::generate_wrapper(interface, method, wrapper, &vis))
    .collect::<GeneratorResult<Vec<_>>>()?;
  let routes_tokens = routes::generate_routes(interface, &vis)?;

  let code = quote! {
    #uses

    #trait_tokens

    #(#wrapper_tokens)*

    #routes_tokens
  };

  let code = generate_source(&code, &artifact)?;
  Ok(GeneratedFile {
    code: header::with_header(&code, metadata, source_path, Some(interface.name.as_str())),
    file_name: artifact,
    overwrite: true,
  })
}

/// Parses and pretty-prints generated tokens.
pub(crate) fn generate_source(code: &TokenStream, artifact: &str) -> GeneratorResult<String> {
  let syntax_tree = syn::parse2::<syn::File>(code.clone()).map_err(|e| GeneratorError::Emit {
    artifact: artifact.to_string(),
    reason: e.to_string(),
  })?;
  Ok(prettyplease::unparse(&syntax_tree))
}

/// Identifier for a generated name; fails instead of panicking on names that
/// are not valid Rust identifiers.
pub(crate) fn ident(name: &str) -> GeneratorResult<Ident> {
  syn::parse_str::<Ident>(name).map_err(|e| GeneratorError::Naming {
    input: name.to_string(),
    reason: e.to_string(),
  })
}

fn module_uses(
  interface: &GeneratedInterface,
  config: &CodegenConfig,
  artifact: &str,
) -> GeneratorResult<TokenStream> {
  let mut support = BTreeSet::from(["Route"]);
  let mut has_custom = false;

  let method_params = interface.methods.iter().flat_map(|m| m.params.iter());
  let factory_params = interface
    .wrappers()
    .flat_map(|w| w.all_factories())
    .flat_map(|f| f.params.iter());

  for param in method_params.clone().chain(factory_params) {
    match &param.rust_type.base_type {
      RustPrimitive::Custom(_) => has_custom = true,
      primitive if primitive.is_support_type() => {
        support.insert(support_name(primitive));
      }
      _ => {}
    }
  }

  if method_params.clone().next().is_some() {
    support.extend(["ParamLocation", "RouteParam"]);
  }
  if method_params.clone().any(|p| !p.validation_attrs.is_empty()) {
    support.insert("Constraint");
  }
  if interface.wrappers().next().is_some() {
    support.extend(["ResponseBuilder", "ResponseWrapper"]);
  }

  let support_path = syn::parse_str::<syn::Path>(&config.support_crate).map_err(|e| GeneratorError::Emit {
    artifact: artifact.to_string(),
    reason: format!("invalid support crate path `{}`: {e}", config.support_crate),
  })?;
  let support_idents = support.into_iter().map(ident).collect::<GeneratorResult<Vec<_>>>()?;

  let types_use = if has_custom {
    let types_module = ident(&config.types_module)?;
    quote! { use super::#types_module::*; }
  } else {
    quote! {}
  };

  Ok(quote! {
    use #support_path::{#(#support_idents),*};
    #types_use
  })
}

fn support_name(primitive: &RustPrimitive) -> &'static str {
  match primitive {
    RustPrimitive::StreamingOutput => "StreamingOutput",
    RustPrimitive::Multipart => "Multipart",
    RustPrimitive::FormFields => "FormFields",
    _ => "ResponseHeaders",
  }
}
