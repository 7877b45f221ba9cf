use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{ensure_unique, sanitize, to_rust_field_name, to_rust_type_name};

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("X-Request-Id"), "X_Request_Id");
  assert_eq!(sanitize("--weird..name--"), "weird_name");
  assert_eq!(sanitize("café"), "cafe");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_to_rust_field_name() {
  assert_eq!(to_rust_field_name("X-Request-Id"), "x_request_id");
  assert_eq!(to_rust_field_name("type"), "r#type");
  assert_eq!(to_rust_field_name("self"), "self_");
  assert_eq!(to_rust_field_name("crate"), "crate_");
  assert_eq!(to_rust_field_name("2fa"), "_2fa");
  assert_eq!(to_rust_field_name("{?}"), "_");
}

#[test]
fn test_to_rust_type_name() {
  assert_eq!(to_rust_type_name("widgets"), "Widgets");
  assert_eq!(to_rust_type_name("user_accounts"), "UserAccounts");
  assert_eq!(to_rust_type_name("WidgetSet"), "WidgetSet");
  assert_eq!(to_rust_type_name("vec"), "GenVec");
  assert_eq!(to_rust_type_name("///"), "Unnamed");
}

#[test]
fn test_ensure_unique() {
  let used = BTreeSet::from(["get".to_string(), "get2".to_string()]);
  assert_eq!(ensure_unique("put", &used), "put");
  assert_eq!(ensure_unique("get", &used), "get3");
}

#[test]
fn test_ensure_unique_separates_trailing_digits() {
  let used = BTreeSet::from(["status_0".to_string(), "status_0_2".to_string()]);
  assert_eq!(ensure_unique("status_0", &used), "status_0_3");
  assert_eq!(ensure_unique("status_1", &used), "status_1");
}
