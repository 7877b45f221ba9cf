use std::path::Path;

use crate::{
  generator::model::ActionType,
  utils::spec::{DescriptionFormat, DescriptionLoader},
};

fn fixture(name: &str) -> std::path::PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn test_format_from_extension() {
  assert_eq!(DescriptionFormat::from_extension("json"), DescriptionFormat::Json);
  assert_eq!(DescriptionFormat::from_extension("yaml"), DescriptionFormat::Yaml);
  assert_eq!(DescriptionFormat::from_extension("yml"), DescriptionFormat::Yaml);
  assert_eq!(DescriptionFormat::from_extension("raml"), DescriptionFormat::Json);
  assert_eq!(DescriptionFormat::from_extension("txt"), DescriptionFormat::Json);
}

#[tokio::test]
async fn test_loads_json_fixture() {
  let loader = DescriptionLoader::open(&fixture("widgets.json")).await.unwrap();
  assert_eq!(loader.format(), DescriptionFormat::Json);

  let description = loader.parse().unwrap();
  assert_eq!(description.title, "Widget API");
  assert_eq!(description.version.as_deref(), Some("v2"));
  assert_eq!(description.resources.keys().collect::<Vec<_>>(), ["/widgets", "/health"]);
  assert_eq!(description.resources["/widgets"].relative_uri, "/widgets");
}

#[tokio::test]
async fn test_loads_yaml_fixture() {
  let loader = DescriptionLoader::open(&fixture("widgets.yaml")).await.unwrap();
  assert_eq!(loader.format(), DescriptionFormat::Yaml);

  let description = loader.parse().unwrap();
  let widgets = &description.resources["/widgets"];
  assert_eq!(
    widgets.actions.keys().copied().collect::<Vec<_>>(),
    [ActionType::Get, ActionType::Post]
  );

  let by_id = &widgets.resources["/{id}"];
  assert_eq!(by_id.relative_uri, "/{id}");
  assert_eq!(by_id.uri_parameters["id"].required, Some(true));
}

#[tokio::test]
async fn test_missing_file_reports_path() {
  let Err(err) = DescriptionLoader::open(Path::new("does/not/exist.json")).await else {
    panic!("opening a missing file should fail");
  };
  assert!(err.to_string().contains("does/not/exist.json"));
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("broken.json");
  tokio::fs::write(&path, b"{ \"title\": ").await.unwrap();

  let loader = DescriptionLoader::open(&path).await.unwrap();
  assert!(loader.parse().is_err());
}
