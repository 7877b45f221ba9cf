use std::fmt::{Display, Formatter};

use crate::SupportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
  Path,
  Header,
  Query,
  Form,
  Body,
}

/// A validation constraint attached to a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
  Length { min: Option<u64>, max: Option<u64> },
  Min(i64),
  Max(i64),
  NotNull,
}

impl Constraint {
  /// Checks a raw parameter value. `None` means the parameter was absent.
  pub fn check(&self, name: &str, value: Option<&str>) -> Result<(), SupportError> {
    let violated = match (self, value) {
      (Self::NotNull, None) => true,
      (_, None) | (Self::NotNull, Some(_)) => false,
      (Self::Length { min, max }, Some(value)) => {
        let len = value.chars().count() as u64;
        min.is_some_and(|m| len < m) || max.is_some_and(|m| len > m)
      }
      (Self::Min(bound), Some(value)) => value.parse::<f64>().is_ok_and(|v| v < *bound as f64),
      (Self::Max(bound), Some(value)) => value.parse::<f64>().is_ok_and(|v| v > *bound as f64),
    };

    if violated {
      return Err(SupportError::Constraint {
        name: name.to_string(),
        constraint: self.to_string(),
      });
    }
    Ok(())
  }
}

impl Display for Constraint {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Length { min, max } => {
        write!(f, "length(")?;
        if let Some(min) = min {
          write!(f, "min = {min}")?;
        }
        if let Some(max) = max {
          if min.is_some() {
            write!(f, ", ")?;
          }
          write!(f, "max = {max}")?;
        }
        write!(f, ")")
      }
      Self::Min(bound) => write!(f, "min({bound})"),
      Self::Max(bound) => write!(f, "max({bound})"),
      Self::NotNull => write!(f, "not_null"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteParam {
  /// Name as declared in the API description.
  pub name: &'static str,
  /// Name of the generated argument.
  pub argument: &'static str,
  pub location: ParamLocation,
  pub default_value: Option<&'static str>,
  pub constraints: &'static [Constraint],
}

impl RouteParam {
  pub fn validate(&self, value: Option<&str>) -> Result<(), SupportError> {
    let value = value.or(self.default_value);
    self
      .constraints
      .iter()
      .try_for_each(|constraint| constraint.check(self.name, value))
  }
}

/// HTTP binding of one generated resource method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
  pub method: &'static str,
  /// Full URI of the declaring resource.
  pub path: &'static str,
  /// Base path of the owning interface, without surrounding slashes; `/` for the root.
  pub base_path: &'static str,
  /// `path` relative to `base_path`, absent when the method is bound to the base itself.
  pub residual_path: Option<&'static str>,
  pub handler: &'static str,
  pub consumes: Option<&'static str>,
  pub produces: &'static [&'static str],
  pub params: &'static [RouteParam],
}

impl Route {
  pub fn param(&self, name: &str) -> Option<&RouteParam> {
    self.params.iter().find(|param| param.name == name)
  }
}
