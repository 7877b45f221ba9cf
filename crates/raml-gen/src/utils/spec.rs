use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::model::ApiDescription;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFormat {
  #[default]
  Json,
  Yaml,
}

impl DescriptionFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Memory-maps an API description and parses it as JSON or YAML depending
/// on the file extension.
pub struct DescriptionLoader {
  file: AsyncMmapFile,
  format: DescriptionFormat,
}

impl DescriptionLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(DescriptionFormat::default(), DescriptionFormat::from_extension);

    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn format(&self) -> DescriptionFormat {
    self.format
  }

  /// Parses the mapped file. Mapping keys are copied into the values that
  /// carry them.
  pub fn parse(&self) -> anyhow::Result<ApiDescription> {
    let description = match self.format {
      DescriptionFormat::Json => serde_json::from_slice::<ApiDescription>(self.file.as_slice())?,
      DescriptionFormat::Yaml => serde_yaml::from_slice::<ApiDescription>(self.file.as_slice())?,
    };
    Ok(description.normalized())
  }
}
