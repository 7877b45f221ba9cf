mod mod_file;

use serde_json::Value;

use crate::generator::{
  ast::GeneratedInterface,
  codegen::{CodeMetadata, GeneratedFile, assign_modules, render_interface},
  config::CodegenConfig,
  converter::{GenerationContext, ResourceWalker},
  model::ApiDescription,
};

pub(super) fn compile(resources: Value) -> (ApiDescription, Vec<GeneratedInterface>) {
  compile_with(resources, true)
}

fn compile_with(resources: Value, use_validation: bool) -> (ApiDescription, Vec<GeneratedInterface>) {
  let description = serde_json::from_value::<ApiDescription>(serde_json::json!({
    "title": "Widget API",
    "version": "v2",
    "resources": resources
  }))
  .expect("description should deserialize")
  .normalized();

  let mut ctx = GenerationContext::with_defaults(use_validation);
  ResourceWalker::new(&mut ctx)
    .compile(&description.resources)
    .expect("compilation should succeed");
  let (interfaces, _) = ctx.into_parts();
  (description, interfaces)
}

pub(super) fn render(resources: Value, config: &CodegenConfig) -> Vec<GeneratedFile> {
  let (description, interfaces) = compile_with(resources, config.use_validation);
  let metadata = CodeMetadata::from_description(&description);
  assign_modules(&interfaces, config)
    .iter()
    .map(|module| render_interface(module, config, &metadata, "widgets.raml.json").expect("renders"))
    .collect()
}

pub(super) fn widgets() -> Value {
  serde_json::json!({
    "/widgets": {
      "description": "Widget catalogue.",
      "actions": {
        "get": {
          "queryParameters": { "limit": { "type": "integer", "minimum": 1, "maximum": 100, "default": 10 } },
          "responses": { "200": { "body": { "application/json": { "schema": "WidgetList" } } } }
        },
        "post": {
          "body": { "application/json": { "schema": "Widget" } },
          "responses": {
            "201": { "headers": { "Location": { "required": true } } },
            "400": { "headers": { "X-Error-{?}": { "description": "error details" } } }
          }
        }
      },
      "resources": {
        "/{id}": {
          "uriParameters": { "id": { "type": "integer", "description": "widget id" } },
          "actions": {
            "delete": {},
            "get": {
              "responses": {
                "200": {
                  "headers": { "Etag": {} },
                  "body": { "application/json": {}, "image/png": {} }
                }
              }
            }
          }
        }
      }
    }
  })
}
