use std::fmt::{Display, Formatter};

use http::StatusCode;

/// Why a response key did not yield a usable status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKeyIssue {
  NotNumeric,
  /// An integer outside `0..=65535`.
  OutOfRange,
}

impl Display for StatusKeyIssue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NotNumeric => write!(f, "is not numeric"),
      Self::OutOfRange => write!(f, "does not fit a 16-bit status code"),
    }
  }
}

/// Status code of a declared response. Keys that do not parse as a `u16`
/// become `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCodeToken(u16);

impl StatusCodeToken {
  #[must_use]
  pub const fn new(code: u16) -> Self {
    Self(code)
  }

  /// Lenient parse; unusable keys become `0` along with the reason.
  pub fn parse_lenient(key: &str) -> (Self, Option<StatusKeyIssue>) {
    let key = key.trim();
    match key.parse::<u16>() {
      Ok(code) => (Self::new(code), None),
      Err(_) if key.parse::<i64>().is_ok() => (Self::new(0), Some(StatusKeyIssue::OutOfRange)),
      Err(_) => (Self::new(0), Some(StatusKeyIssue::NotNumeric)),
    }
  }

  pub const fn code(self) -> u16 {
    self.0
  }

  /// Canonical reason phrase, e.g. `Not Found` for 404.
  pub fn reason(self) -> Option<&'static str> {
    StatusCode::from_u16(self.0).ok()?.canonical_reason()
  }

  /// Identifier stem used to name response factories: the reason phrase
  /// when known, `status <code>` otherwise.
  pub fn factory_stem(self) -> String {
    match self.reason() {
      Some(reason) => reason.to_string(),
      None => format!("status {}", self.0),
    }
  }
}

impl Display for StatusCodeToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
