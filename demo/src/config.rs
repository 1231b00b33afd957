use std::num::ParseIntError;

use thiserror::Error;

/// Inputs of the demonstration scenarios.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DemoConfig {
  pub email: String,
  pub default_value: String,
  pub name: String,
  /// Marks of the second `or_else_get` scenario; `None` makes it fall back to `default_marks`.
  pub marks: Option<i32>,
  pub default_marks: i32,
  pub gender: String,
  pub padded: String,
  pub needle: String,
}

impl Default for DemoConfig {
  fn default() -> Self {
    Self {
      email: "kiran@gmail.com".to_string(),
      default_value: "default value".to_string(),
      name: "Kiran".to_string(),
      marks: Some(98),
      default_marks: 0,
      gender: "MALE".to_string(),
      padded: " abc".to_string(),
      needle: "abc".to_string(),
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Environment variable '{var}' is not a valid integer: '{value}'")]
  InvalidInteger {
    var: &'static str,
    value: String,
    #[source]
    source: ParseIntError,
  },
}

impl DemoConfig {
  /// Reads the configuration from `OPTIONAL_DEMO_*` environment variables, using defaults for unset variables.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| std::env::var(var).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    if let Some(email) = lookup("OPTIONAL_DEMO_EMAIL") {
      config.email = email;
    }
    if let Some(default_value) = lookup("OPTIONAL_DEMO_DEFAULT_VALUE") {
      config.default_value = default_value;
    }
    if let Some(name) = lookup("OPTIONAL_DEMO_NAME") {
      config.name = name;
    }
    if let Some(marks) = lookup("OPTIONAL_DEMO_MARKS") {
      config.marks = if marks.is_empty() { None } else { Some(parse_integer("OPTIONAL_DEMO_MARKS", marks)?) };
    }
    if let Some(default_marks) = lookup("OPTIONAL_DEMO_DEFAULT_MARKS") {
      config.default_marks = parse_integer("OPTIONAL_DEMO_DEFAULT_MARKS", default_marks)?;
    }
    if let Some(gender) = lookup("OPTIONAL_DEMO_GENDER") {
      config.gender = gender;
    }
    if let Some(padded) = lookup("OPTIONAL_DEMO_PADDED") {
      config.padded = padded;
    }
    if let Some(needle) = lookup("OPTIONAL_DEMO_NEEDLE") {
      config.needle = needle;
    }
    Ok(config)
  }
}

fn parse_integer(var: &'static str, value: String) -> Result<i32, ConfigError> {
  match value.trim().parse() {
    Ok(integer) => Ok(integer),
    Err(source) => Err(ConfigError::InvalidInteger { var, value, source }),
  }
}


#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use pretty_assertions::assert_eq;

  use super::*;

  fn config_from(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    DemoConfig::from_lookup(|var: &str| vars.get(var).cloned())
  }

  #[test]
  fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, DemoConfig::default());
  }

  #[test]
  fn overrides_from_lookup() {
    let config = config_from(&[
      ("OPTIONAL_DEMO_EMAIL", "someone@example.com"),
      ("OPTIONAL_DEMO_DEFAULT_MARKS", " 10 "),
      ("OPTIONAL_DEMO_GENDER", "FEMALE"),
    ]).unwrap();
    assert_eq!(config.email, "someone@example.com");
    assert_eq!(config.default_marks, 10);
    assert_eq!(config.gender, "FEMALE");
    assert_eq!(config.name, "Kiran");
  }

  #[test]
  fn empty_marks_is_absent() {
    let config = config_from(&[("OPTIONAL_DEMO_MARKS", "")]).unwrap();
    assert_eq!(config.marks, None);
  }

  #[test]
  fn invalid_integer_fails() {
    let error = config_from(&[("OPTIONAL_DEMO_MARKS", "ninety")]).unwrap_err();
    match error {
      ConfigError::InvalidInteger { var, value, .. } => {
        assert_eq!(var, "OPTIONAL_DEMO_MARKS");
        assert_eq!(value, "ninety");
      }
    }
  }
}
