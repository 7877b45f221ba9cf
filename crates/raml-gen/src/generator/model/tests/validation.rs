use serde_json::json;

use crate::generator::{
  error::GeneratorError,
  model::{ApiDescription, validation::validate},
};

fn description(value: serde_json::Value) -> ApiDescription {
  serde_json::from_value::<ApiDescription>(value)
    .expect("description should deserialize")
    .normalized()
}

#[test]
fn test_valid_description_passes() {
  let description = description(json!({
    "title": "ok",
    "resources": {
      "/widgets": {
        "resources": {
          "/{id}": { "uriParameters": { "id": { "minLength": 1, "maxLength": 4 } } }
        }
      }
    }
  }));
  assert!(validate(&description).is_ok());
}

#[test]
fn test_all_problems_are_aggregated() {
  let description = description(json!({
    "title": "broken",
    "resources": {
      "widgets": {
        "uriParameters": { "id": {} },
        "actions": {
          "post": {
            "body": {
              "application/json": { "formParameters": { "name": {} } }
            },
            "queryParameters": {
              "size": { "minimum": 10, "maximum": 2 },
              "code": { "minLength": 5, "maxLength": 1 }
            }
          }
        }
      },
      "/gadgets/{id": {}
    }
  }));

  let Err(GeneratorError::InvalidDescription { errors }) = validate(&description) else {
    panic!("expected an aggregate validation failure");
  };

  assert_eq!(errors.len(), 6, "{errors:#?}");
  assert!(errors[0].contains("must start with '/'"));
  assert!(errors[1].contains("URI parameter 'id' not found"));
  assert!(errors.iter().any(|e| e.contains("minimum 10 > maximum 2")));
  assert!(errors.iter().any(|e| e.contains("minLength 5 > maxLength 1")));
  assert!(errors.iter().any(|e| e.contains("form parameters are not allowed")));
  assert!(errors.iter().any(|e| e.contains("unbalanced braces")));
}

#[test]
fn test_error_message_concatenates_every_problem() {
  let err = GeneratorError::InvalidDescription {
    errors: vec!["first".to_string(), "second".to_string()],
  };
  assert_eq!(err.to_string(), "Invalid RAML definition:\nfirst\nsecond");
}
