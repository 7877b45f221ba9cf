use serde_json::json;

use super::common::{compile, description, try_compile_with};
use crate::generator::{
  ast::{MethodReturn, ParamBinding},
  converter::{GenerationContext, ResourceWalker},
  error::GeneratorError,
};

fn widgets() -> serde_json::Value {
  json!({
    "/widgets": {
      "description": "Widget catalogue",
      "actions": {
        "get": { "responses": { "200": { "body": { "application/json": {} } } } }
      },
      "resources": {
        "/{id}": {
          "uriParameters": { "id": { "type": "integer" } },
          "actions": {
            "get": { "responses": { "200": { "body": { "application/json": {} } } } }
          }
        }
      }
    }
  })
}

#[test]
fn test_one_interface_per_top_level_resource() {
  let compiled = compile(json!({
    "/widgets": { "actions": { "get": {} } },
    "/gadgets": { "resources": { "/{id}": { "actions": { "get": {} } } } },
    "/": { "actions": { "get": {} } }
  }));

  assert_eq!(compiled.interfaces.len(), 3);
  assert_eq!(compiled.names.iter().collect::<Vec<_>>(), ["Widgets", "Gadgets", "Root"]);
}

#[test]
fn test_widgets_example() {
  let compiled = compile(widgets());
  let widgets = compiled.interface("Widgets");
  assert_eq!(widgets.path, "widgets");
  assert_eq!(widgets.docs.lines(), ["Widget catalogue"]);

  let get = widgets.method("get").expect("get on the base resource");
  let wrapper = get.return_type.wrapper().expect("get returns a wrapper");
  assert_eq!(wrapper.name, "GetResponse");
  assert_eq!(get.binding.path, None);

  let get_by_id = widgets.method("get_by_id").expect("get on the child resource");
  assert_eq!(get_by_id.binding.path.as_deref(), Some("{id}"));
  assert_eq!(get_by_id.resource_uri, "/widgets/{id}");
  assert_eq!(get_by_id.binding.produces, ["application/json"]);

  let wrapper = get_by_id.return_type.wrapper().expect("get_by_id returns a wrapper");
  assert_eq!(wrapper.name, "GetByIdResponse");
  let names = wrapper.all_factories().map(|f| f.name.to_string()).collect::<Vec<_>>();
  assert_eq!(names, ["json_ok", "respond"]);

  let json_ok = wrapper.factory("json_ok").expect("json_ok factory");
  assert_eq!(json_ok.params.len(), 1);
  assert_eq!(json_ok.params[0].name, "entity");

  let id = get_by_id.param("id").expect("id argument");
  assert_eq!(id.binding, ParamBinding::Path("id".to_string()));
  assert_eq!(id.rust_type.to_rust_type(), "i64");
}

#[test]
fn test_path_parameters_own_resource_first_then_ancestors() {
  let compiled = compile(json!({
    "/tenants/{tenant}": {
      "uriParameters": { "tenant": {} },
      "resources": {
        "/users/{user}": {
          "uriParameters": { "user": {} },
          "resources": {
            "/keys/{key}": {
              "uriParameters": { "key": {} },
              "actions": { "delete": {} }
            }
          }
        }
      }
    }
  }));

  let method = &compiled.interface("Tenants").methods[0];
  assert_eq!(method.name, "delete_users_by_user_keys_by_key");
  let names = method.params.iter().map(|p| p.name.to_string()).collect::<Vec<_>>();
  assert_eq!(names, ["key", "user", "tenant"]);
}

#[test]
fn test_undeclared_template_parameters_are_bound() {
  let compiled = compile(json!({
    "/files/{name}": { "actions": { "get": {} } }
  }));
  let method = &compiled.interface("Files").methods[0];
  let name = method.param("name").expect("synthesized path argument");
  assert_eq!(name.binding, ParamBinding::Path("name".to_string()));
  assert_eq!(name.rust_type.to_rust_type(), "String");
}

#[test]
fn test_root_resource_children() {
  let compiled = compile(json!({
    "/": {
      "actions": { "get": {} },
      "resources": { "/status": { "actions": { "get": {} } } }
    }
  }));
  let root = compiled.interface("Root");
  assert_eq!(root.path, "/");
  let names = root.methods.iter().map(|m| m.name.to_string()).collect::<Vec<_>>();
  assert_eq!(names, ["get", "get_status"]);
  assert_eq!(root.methods[1].binding.path.as_deref(), Some("status"));
}

#[test]
fn test_colliding_names_are_made_unique() {
  let compiled = compile(json!({
    "/widgets": { "displayName": "Store", "actions": { "get": {} } },
    "/gadgets": { "displayName": "Store", "actions": { "get": {} } }
  }));
  assert_eq!(compiled.names.iter().collect::<Vec<_>>(), ["Store", "Store2"]);
}

#[test]
fn test_support_type_names_are_reserved_for_interfaces() {
  let compiled = compile(json!({
    "/route": { "actions": { "get": {} } },
    "/uploads": { "displayName": "Multipart", "actions": { "get": {} } }
  }));
  assert_eq!(compiled.names.iter().collect::<Vec<_>>(), ["Route2", "Multipart2"]);
}

#[test]
fn test_methods_without_responses_return_void() {
  let compiled = compile(json!({ "/widgets": { "actions": { "delete": {} } } }));
  let delete = &compiled.interface("Widgets").methods[0];
  assert!(matches!(&delete.return_type, MethodReturn::Void(t) if t.is_void()));
}

#[test]
fn test_compilation_is_deterministic() {
  let first = compile(widgets());
  let second = compile(widgets());
  assert_eq!(first.names, second.names);
  assert_eq!(first.interfaces, second.interfaces);
}

#[test]
fn test_descendant_failure_aborts_compilation() {
  let result = try_compile_with(
    json!({
      "/widgets": {
        "resources": {
          "/{id}": {
            "actions": { "get": { "queryParameters": { "upload": { "type": "file" } } } }
          }
        }
      }
    }),
    true,
  );
  assert!(matches!(result, Err(GeneratorError::TypeResolution { ref name, .. }) if name == "upload"));
}

#[test]
fn test_failed_interface_is_not_recorded() {
  let description = description(json!({
    "/widgets": { "actions": { "get": {} } },
    "/gadgets": { "actions": { "get": { "headers": { "X-Blob": { "type": "file" } } } } }
  }));
  let mut ctx = GenerationContext::with_defaults(true);
  let result = ResourceWalker::new(&mut ctx).compile(&description.resources);

  assert!(result.is_err());
  assert_eq!(ctx.interfaces().len(), 1);
  assert_eq!(ctx.interfaces()[0].name, "Widgets");
}
