use indexmap::IndexSet;

use crate::generator::model::Action;

/// Response media types of an action, deduplicated by media-type string in
/// order of first declaration.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeSet<'a> {
  types: IndexSet<&'a str>,
}

impl<'a> MediaTypeSet<'a> {
  pub fn unique_response_media_types(action: &'a Action) -> Self {
    let types = action
      .responses
      .values()
      .flat_map(|response| response.body.values())
      .map(|mime| mime.media_type.as_str())
      .collect();
    Self { types }
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }

  pub fn media_types(&self) -> Vec<String> {
    self.types.iter().map(ToString::to_string).collect()
  }
}
