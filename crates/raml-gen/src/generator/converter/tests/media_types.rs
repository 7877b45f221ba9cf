use serde_json::json;

use super::common::description;
use crate::generator::{converter::MediaTypeSet, model::ActionType};

#[test]
fn test_response_media_types_deduplicate_in_declaration_order() {
  let description = description(json!({
    "/widgets": {
      "actions": {
        "get": {
          "responses": {
            "200": { "body": { "application/json": { "schema": "Widget" }, "text/plain": {} } },
            "404": { "body": { "application/json": { "schema": "Problem" } } },
            "204": {}
          }
        }
      }
    }
  }));
  let action = &description.resources["/widgets"].actions[&ActionType::Get];

  let set = MediaTypeSet::unique_response_media_types(action);
  assert_eq!(set.media_types(), ["application/json", "text/plain"]);
}

#[test]
fn test_status_only_responses_contribute_nothing() {
  let description = description(json!({
    "/widgets": { "actions": { "delete": { "responses": { "204": {} } } } }
  }));
  let action = &description.resources["/widgets"].actions[&ActionType::Delete];
  assert!(MediaTypeSet::unique_response_media_types(action).is_empty());
}
