use super::{compile, widgets};
use crate::generator::{
  codegen::{CodeMetadata, ModFileGenerator, Visibility, assign_modules},
  config::CodegenConfig,
};

#[test]
fn test_mod_file_declares_every_interface() {
  let (description, interfaces) = compile(serde_json::json!({
    "/widgets": { "actions": { "get": {} } },
    "/user-accounts": { "actions": { "get": {} } }
  }));
  let metadata = CodeMetadata::from_description(&description);
  let config = CodegenConfig::default();

  let files = ModFileGenerator::new(&metadata, &config)
    .generate(&assign_modules(&interfaces, &config), "api.json")
    .expect("mod file renders");
  assert_eq!(files.len(), 1);
  assert_eq!(files[0].file_name, "mod.rs");
  assert!(files[0].overwrite);

  let code = &files[0].code;
  assert!(code.contains("pub mod widgets;"));
  assert!(code.contains("pub use widgets::Widgets;"));
  assert!(code.contains("pub mod user_accounts;"));
  assert!(code.contains("pub use user_accounts::UserAccounts;"));
  assert!(!code.contains("mod types;"));
}

#[test]
fn test_named_entity_types_get_placeholder_module() {
  let (description, interfaces) = compile(widgets());
  let metadata = CodeMetadata::from_description(&description);
  let config = CodegenConfig::builder().visibility(Visibility::File).build();

  let files = ModFileGenerator::new(&metadata, &config)
    .generate(&assign_modules(&interfaces, &config), "api.json")
    .expect("mod file renders");
  assert_eq!(files.len(), 2);
  assert!(files[0].code.contains("mod types;"));

  let types = &files[1];
  assert_eq!(types.file_name, "types.rs");
  assert!(!types.overwrite);
  assert!(types.code.contains("pub(crate) type Widget = serde_json::Value;"));
  assert!(types.code.contains("pub(crate) type WidgetList = serde_json::Value;"));
}

#[test]
fn test_interface_module_avoids_types_module() {
  let (description, interfaces) = compile(serde_json::json!({
    "/types": {
      "actions": {
        "get": { "responses": { "200": { "body": { "application/json": { "schema": "TypeList" } } } } }
      }
    }
  }));
  let metadata = CodeMetadata::from_description(&description);
  let config = CodegenConfig::default();
  let modules = assign_modules(&interfaces, &config);
  assert_eq!(modules[0].module, "types2");

  let files = ModFileGenerator::new(&metadata, &config)
    .generate(&modules, "api.json")
    .expect("mod file renders");
  let code = &files[0].code;
  assert_eq!(code.matches("pub mod types;").count(), 1);
  assert!(code.contains("pub mod types2;"));
  assert!(code.contains("pub use types2::Types;"));
  let types_files = files.iter().filter(|f| f.file_name == "types.rs").count();
  assert_eq!(types_files, 1);
}
