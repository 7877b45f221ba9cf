use std::collections::BTreeSet;

use quote::quote;

use super::{CodeMetadata, GeneratedFile, InterfaceModule, Visibility, generate_source, header::with_header, ident};
use crate::generator::{config::CodegenConfig, error::GeneratorResult};

pub const MOD_FILE_STEM: &str = "mod";
pub const MOD_FILE_NAME: &str = "mod.rs";

/// Renders `mod.rs` and, when named entity types are referenced, a
/// placeholder types module that is only written if absent.
pub struct ModFileGenerator<'a> {
  metadata: &'a CodeMetadata,
  config: &'a CodegenConfig,
}

impl<'a> ModFileGenerator<'a> {
  pub fn new(metadata: &'a CodeMetadata, config: &'a CodegenConfig) -> Self {
    Self { metadata, config }
  }

  pub fn generate(&self, modules: &[InterfaceModule<'_>], source_path: &str) -> GeneratorResult<Vec<GeneratedFile>> {
    let vis = self.config.visibility.to_tokens();
    let custom_types = Self::custom_types(modules);

    let modules = modules
      .iter()
      .map(|InterfaceModule { interface, module }| {
        let module = ident(module)?;
        let name = ident(interface.name.as_str())?;
        Ok(quote! {
          #vis mod #module;
          #vis use #module::#name;
        })
      })
      .collect::<GeneratorResult<Vec<_>>>()?;

    let types_module = if custom_types.is_empty() {
      None
    } else {
      let types_module = ident(&self.config.types_module)?;
      Some(quote! { #vis mod #types_module; })
    };

    let code = quote! {
      #types_module
      #(#modules)*
    };
    let code = generate_source(&code, MOD_FILE_NAME)?;

    let mut files = vec![GeneratedFile {
      file_name: MOD_FILE_NAME.to_string(),
      code: with_header(&code, self.metadata, source_path, None),
      overwrite: true,
    }];

    if !custom_types.is_empty() {
      files.push(self.types_stub(&custom_types, source_path)?);
    }

    Ok(files)
  }

  fn custom_types(modules: &[InterfaceModule<'_>]) -> BTreeSet<String> {
    let interfaces = modules.iter().map(|m| m.interface);
    let method_params = interfaces.clone().flat_map(|i| i.methods.iter()).flat_map(|m| m.params.iter());
    let factory_params = interfaces
      .flat_map(|i| i.wrappers())
      .flat_map(|w| w.all_factories())
      .flat_map(|f| f.params.iter());

    method_params
      .chain(factory_params)
      .filter_map(|p| p.rust_type.custom_name())
      .map(ToString::to_string)
      .collect()
  }

  /// Placeholder aliases for named entity types, meant to be replaced by hand.
  fn types_stub(&self, custom_types: &BTreeSet<String>, source_path: &str) -> GeneratorResult<GeneratedFile> {
    let vis = match self.config.visibility {
      Visibility::File => Visibility::Crate.to_tokens(),
      other => other.to_tokens(),
    };
    let aliases = custom_types
      .iter()
      .map(|name| {
        let name = ident(name)?;
        Ok(quote! { #vis type #name = serde_json::Value; })
      })
      .collect::<GeneratorResult<Vec<_>>>()?;

    let file_name = format!("{}.rs", self.config.types_module);
    let code = generate_source(&quote! { #(#aliases)* }, &file_name)?;
    Ok(GeneratedFile {
      code: with_header(&code, self.metadata, source_path, Some(&self.config.types_module)),
      file_name,
      overwrite: false,
    })
  }
}
