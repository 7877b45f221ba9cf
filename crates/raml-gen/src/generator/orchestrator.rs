//! Orchestration of the description to Rust source pipeline.
//!
//! ```ignore
//! # async fn example() -> anyhow::Result<()> {
//! let description = DescriptionLoader::open("api.json".as_ref()).await?.parse()?;
//! let orchestrator = Orchestrator::new(description, CodegenConfig::default());
//! let output = orchestrator.generate("api.json")?;
//! println!("{} interfaces", output.stats.interfaces_generated);
//! # Ok(())
//! # }
//! ```

use indexmap::IndexSet;

use super::{
  ast::GeneratedInterface,
  codegen::{self, CodeMetadata, GeneratedFile, ModFileGenerator},
  config::CodegenConfig,
  converter::{GenerationContext, ResourceWalker},
  error::GeneratorResult,
  model::{ApiDescription, validation},
};

/// Counts and diagnostics of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub interfaces_generated: usize,
  pub methods_generated: usize,
  pub wrappers_generated: usize,
  pub factories_generated: usize,
  /// Non-fatal diagnostics, in the order they were raised.
  pub warnings: Vec<String>,
}

impl GenerationStats {
  fn from_interfaces(interfaces: &[GeneratedInterface], warnings: Vec<String>) -> Self {
    let wrappers = interfaces.iter().flat_map(|i| i.wrappers()).collect::<Vec<_>>();
    Self {
      interfaces_generated: interfaces.len(),
      methods_generated: interfaces.iter().map(|i| i.methods.len()).sum(),
      wrappers_generated: wrappers.len(),
      factories_generated: wrappers.iter().map(|w| w.all_factories().count()).sum(),
      warnings,
    }
  }
}

/// Compiled interfaces before rendering.
#[derive(Debug, Clone)]
pub struct CompiledApi {
  pub names: IndexSet<String>,
  pub interfaces: Vec<GeneratedInterface>,
  pub stats: GenerationStats,
}

#[derive(Debug, Clone)]
pub struct GenerationOutput {
  pub names: IndexSet<String>,
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  description: ApiDescription,
  config: CodegenConfig,
}

impl Orchestrator {
  pub fn new(description: ApiDescription, config: CodegenConfig) -> Self {
    Self {
      description: description.normalized(),
      config,
    }
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata::from_description(&self.description)
  }

  /// Validates the description and compiles its resource tree.
  pub fn compile(&self) -> GeneratorResult<CompiledApi> {
    validation::validate(&self.description)?;

    let mut ctx = GenerationContext::with_defaults(self.config.use_validation);
    let names = ResourceWalker::new(&mut ctx).compile(&self.description.resources)?;
    let (interfaces, warnings) = ctx.into_parts();
    let stats = GenerationStats::from_interfaces(&interfaces, warnings);

    tracing::info!(
      interfaces = stats.interfaces_generated,
      methods = stats.methods_generated,
      warnings = stats.warnings.len(),
      "compiled API description"
    );

    Ok(CompiledApi {
      names,
      interfaces,
      stats,
    })
  }

  /// Compiles and renders one module per interface plus `mod.rs`.
  pub fn generate(&self, source_path: &str) -> GeneratorResult<GenerationOutput> {
    let CompiledApi {
      names,
      interfaces,
      stats,
    } = self.compile()?;
    let metadata = self.metadata();

    let modules = codegen::assign_modules(&interfaces, &self.config);
    let mut files = modules
      .iter()
      .map(|module| codegen::render_interface(module, &self.config, &metadata, source_path))
      .collect::<GeneratorResult<Vec<_>>>()?;
    files.extend(ModFileGenerator::new(&metadata, &self.config).generate(&modules, source_path)?);

    Ok(GenerationOutput { names, files, stats })
  }
}
