use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
  /// Raised before compilation when the description has structural problems.
  #[error("Invalid RAML definition:\n{}", errors.join("\n"))]
  InvalidDescription { errors: Vec<String> },

  #[error("cannot resolve type of `{name}`: {reason}")]
  TypeResolution { name: String, reason: String },

  #[error("cannot derive a name for `{input}`: {reason}")]
  Naming { input: String, reason: String },

  #[error("failed to emit `{artifact}`: {reason}")]
  Emit { artifact: String, reason: String },

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
