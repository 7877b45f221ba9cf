use serde_json::json;

use super::common::{compile, try_compile_with};
use crate::generator::ast::{ParamBinding, ValidationAttribute};

fn query_action(parameters: serde_json::Value) -> serde_json::Value {
  json!({ "/widgets": { "actions": { "get": { "queryParameters": parameters } } } })
}

#[test]
fn test_length_and_not_null_constraints() {
  let compiled = compile(query_action(json!({
    "code": { "minLength": 2, "maxLength": 8, "required": true },
    "tag": { "maxLength": 16 }
  })));
  let get = &compiled.interface("Widgets").methods[0];

  let code = get.param("code").expect("code");
  assert_eq!(
    code.validation_attrs,
    [
      ValidationAttribute::Length {
        min: Some(2),
        max: Some(8)
      },
      ValidationAttribute::NotNull,
    ]
  );
  assert_eq!(code.rust_type.to_rust_type(), "String");

  let tag = get.param("tag").expect("tag");
  assert_eq!(tag.validation_attrs, [ValidationAttribute::Length { min: None, max: Some(16) }]);
  assert_eq!(tag.rust_type.to_rust_type(), "Option<String>");
}

#[test]
fn test_integer_bounds_convert_exactly() {
  let compiled = compile(query_action(json!({
    "limit": { "type": "integer", "minimum": 1, "maximum": 100.0 }
  })));
  let limit = compiled.interface("Widgets").methods[0].param("limit").cloned().expect("limit");
  assert_eq!(limit.validation_attrs, [ValidationAttribute::Min(1), ValidationAttribute::Max(100)]);
  assert!(compiled.warnings.is_empty());
}

#[test]
fn test_maximum_bound_reads_declared_maximum() {
  let compiled = compile(query_action(json!({
    "size": { "type": "integer", "minimum": 5, "maximum": 50 }
  })));
  let size = compiled.interface("Widgets").methods[0].param("size").cloned().expect("size");
  assert!(size.validation_attrs.contains(&ValidationAttribute::Max(50)));
  assert!(!size.validation_attrs.contains(&ValidationAttribute::Max(5)));
}

#[test]
fn test_non_integer_bounds_are_skipped_with_diagnostic() {
  let compiled = compile(query_action(json!({
    "ratio": { "type": "number", "minimum": 0.5, "maximum": 18446744073709551615u64 }
  })));
  let ratio = compiled.interface("Widgets").methods[0].param("ratio").cloned().expect("ratio");
  assert!(ratio.validation_attrs.is_empty());
  assert_eq!(compiled.warnings.len(), 2);
  assert!(compiled.warnings[0].contains("minimum of `ratio`"));
  assert!(compiled.warnings[1].contains("maximum of `ratio`"));
}

#[test]
fn test_pattern_is_reported_not_emitted() {
  let compiled = compile(query_action(json!({ "sku": { "pattern": "^[A-Z]+$" } })));
  let sku = compiled.interface("Widgets").methods[0].param("sku").cloned().expect("sku");
  assert!(sku.validation_attrs.is_empty());
  assert_eq!(compiled.warnings.len(), 1);
  assert!(compiled.warnings[0].contains("pattern"));
}

#[test]
fn test_validation_can_be_disabled() {
  let compiled = try_compile_with(
    query_action(json!({ "code": { "minLength": 2, "required": true, "pattern": "x" } })),
    false,
  )
  .expect("compiles");
  let code = compiled.interface("Widgets").methods[0].param("code").cloned().expect("code");
  assert!(code.validation_attrs.is_empty());
  assert!(compiled.warnings.is_empty());
}

#[test]
fn test_defaults_and_repeat() {
  let compiled = compile(query_action(json!({
    "page": { "type": "integer", "default": 1 },
    "sort": { "default": "name" },
    "ids": { "type": "integer", "repeat": true }
  })));
  let get = &compiled.interface("Widgets").methods[0];

  let page = get.param("page").expect("page");
  assert_eq!(page.default_value.as_deref(), Some("1"));
  assert_eq!(page.rust_type.to_rust_type(), "i64");

  assert_eq!(get.param("sort").and_then(|p| p.default_value.as_deref()), Some("name"));
  assert_eq!(
    get.param("ids").map(|p| p.rust_type.to_rust_type()),
    Some("Option<Vec<i64>>".to_string())
  );
}

#[test]
fn test_keyword_and_colliding_argument_names() {
  let compiled = compile(json!({
    "/widgets": {
      "actions": {
        "get": {
          "headers": { "type": {} },
          "queryParameters": { "Type": {} }
        },
        "post": { "queryParameters": { "entity": {} }, "body": { "application/json": {} } }
      }
    }
  }));
  let widgets = compiled.interface("Widgets");
  let get_names = widgets.methods[0].params.iter().map(|p| p.name.to_string()).collect::<Vec<_>>();
  assert_eq!(get_names, ["r#type", "r#type2"]);

  let post_names = widgets.methods[1].params.iter().map(|p| p.name.to_string()).collect::<Vec<_>>();
  assert_eq!(post_names, ["entity", "entity2"]);
  assert_eq!(widgets.methods[1].params[1].binding, ParamBinding::Entity);
}

#[test]
fn test_single_typed_form_fields_bind_individually() {
  let compiled = compile(json!({
    "/widgets": {
      "actions": {
        "post": {
          "body": {
            "application/x-www-form-urlencoded": {
              "formParameters": {
                "name": { "required": true },
                "picture": { "type": "file" }
              }
            }
          }
        }
      }
    }
  }));
  let post = &compiled.interface("Widgets").methods[0];
  let bindings = post.params.iter().map(|p| p.binding.clone()).collect::<Vec<_>>();
  assert_eq!(
    bindings,
    [ParamBinding::Form("name".to_string()), ParamBinding::Form("picture".to_string())]
  );
  assert_eq!(post.params[1].rust_type.to_rust_type(), "Option<Vec<u8>>");
}

#[test]
fn test_multi_typed_form_field_collapses_into_catch_all() {
  let compiled = compile(json!({
    "/widgets": {
      "actions": {
        "post": {
          "body": {
            "application/x-www-form-urlencoded": {
              "formParameters": {
                "name": { "displayName": "Name", "description": "widget name" },
                "size": [
                  { "type": "integer", "description": "in centimetres" },
                  { "type": "string", "description": "S, M or L" }
                ]
              }
            }
          }
        }
      }
    }
  }));
  let post = &compiled.interface("Widgets").methods[0];
  assert_eq!(post.params.len(), 1);
  assert_eq!(post.params[0].name, "entity");
  assert_eq!(post.params[0].binding, ParamBinding::FormFields);
  assert_eq!(post.params[0].rust_type.to_rust_type(), "FormFields");
  assert_eq!(
    post.docs.param("entity"),
    Some("name: Name - widget name\nsize: in centimetres\nsize: S, M or L")
  );
}

#[test]
fn test_multipart_body_is_single_catch_all() {
  let compiled = compile(json!({
    "/widgets": {
      "actions": {
        "post": {
          "body": {
            "multipart/form-data": {
              "formParameters": { "manifest": {}, "archive": { "type": "file" } }
            }
          }
        }
      }
    }
  }));
  let post = &compiled.interface("Widgets").methods[0];
  assert_eq!(post.params.len(), 1);
  assert_eq!(post.params[0].binding, ParamBinding::Multipart);
  assert_eq!(post.params[0].rust_type.to_rust_type(), "Multipart");
  assert_eq!(post.docs.param("entity"), Some("manifest:\narchive:"));
}
