use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupportError {
  #[error("invalid status code {0}")]
  Status(u16),
  #[error("invalid header `{name}`: {reason}")]
  Header { name: String, reason: String },
  #[error("failed to serialize response entity: {0}")]
  Entity(String),
  #[error("failed to write streaming entity: {0}")]
  Stream(#[from] std::io::Error),
  #[error("parameter `{name}` violates {constraint}")]
  Constraint { name: String, constraint: String },
}
