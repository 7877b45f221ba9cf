use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::{
  ast::{GeneratedInterface, GeneratedMethod, MethodParam, ParamBinding},
  error::GeneratorResult,
};

/// A `ROUTES` table carrying the HTTP binding of every method.
pub(super) fn generate_routes(interface: &GeneratedInterface, vis: &TokenStream) -> GeneratorResult<TokenStream> {
  let doc = format!(" HTTP bindings of the [`{}`] methods, in declaration order.", interface.name);
  let routes = interface
    .methods
    .iter()
    .map(|method| route(interface, method))
    .collect::<Vec<_>>();

  Ok(quote! {
    #[doc = #doc]
    #vis const ROUTES: &[Route] = &[#(#routes),*];
  })
}

fn route(interface: &GeneratedInterface, method: &GeneratedMethod) -> TokenStream {
  let verb = method.binding.method.as_str();
  let path = &method.resource_uri;
  let base_path = &interface.path;
  let residual_path = optional_str(method.binding.path.as_deref());
  let handler = method.name.as_str();
  let consumes = optional_str(method.binding.consumes.as_deref());
  let produces = &method.binding.produces;
  let params = method.params.iter().map(route_param);

  quote! {
    Route {
      method: #verb,
      path: #path,
      base_path: #base_path,
      residual_path: #residual_path,
      handler: #handler,
      consumes: #consumes,
      produces: &[#(#produces),*],
      params: &[#(#params),*],
    }
  }
}

fn route_param(param: &MethodParam) -> TokenStream {
  let argument = param.name.as_str().trim_start_matches("r#");
  let (name, location) = match &param.binding {
    ParamBinding::Path(name) => (name.as_str(), quote! { ParamLocation::Path }),
    ParamBinding::Header(name) => (name.as_str(), quote! { ParamLocation::Header }),
    ParamBinding::Query(name) => (name.as_str(), quote! { ParamLocation::Query }),
    ParamBinding::Form(name) => (name.as_str(), quote! { ParamLocation::Form }),
    _ => (argument, quote! { ParamLocation::Body }),
  };
  let default_value = optional_str(param.default_value.as_deref());
  let constraints = &param.validation_attrs;

  quote! {
    RouteParam {
      name: #name,
      argument: #argument,
      location: #location,
      default_value: #default_value,
      constraints: &[#(#constraints),*],
    }
  }
}

fn optional_str(value: Option<&str>) -> TokenStream {
  match value {
    Some(value) => quote! { Some(#value) },
    None => quote! { None },
  }
}
