use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info, trace};

use optional_core::{Optional, OptionalError};

use crate::config::DemoConfig;

#[derive(Debug, Error)]
pub enum ScenarioError {
  #[error("Failed to write scenario output: {0}")]
  Io(#[from] io::Error),
  #[error(transparent)]
  Optional(#[from] OptionalError),
}

#[derive(Debug, Error)]
#[error("No Marks Exists")]
struct NoMarksError;

/// Runs every scenario in order, writing one line per printed item to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  info!("running optional scenarios");
  construction(config, out)?;
  extraction(config, out)?;
  defaults(config, out)?;
  conditional(config, out)?;
  pipeline(config, out)?;
  info!("done running optional scenarios");
  Ok(())
}

fn construction(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  debug!("construction");
  let empty = Optional::<String>::empty();
  writeln!(out, "{}", empty)?;

  let email = Optional::of(config.email.as_str());
  writeln!(out, "{}", email)?;

  let absent = Optional::<&str>::of_nullable(None);
  writeln!(out, "{}", absent)?;
  Ok(())
}

fn extraction(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  debug!("extraction");
  let email = Optional::of(config.email.as_str());
  writeln!(out, "{}", email.get()?)?;

  let absent = Optional::<&str>::of_nullable(None);
  if absent.is_present() {
    writeln!(out, "{}", absent.get()?)?;
  } else {
    writeln!(out, "No value present")?;
  }
  Ok(())
}

fn defaults(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  debug!("defaults");
  let absent = Optional::<&str>::of_nullable(None);
  writeln!(out, "{}", absent.or_else(&config.default_value))?;

  let name = Optional::of_nullable(Some(config.name.as_str()));
  writeln!(out, "{}", name.or_else(&config.default_value))?;

  let no_marks = Optional::<i32>::of_nullable(None);
  let marks = no_marks.or_else_get(|| {
    trace!("computing default marks");
    config.default_marks
  });
  writeln!(out, "{}", marks)?;

  let some_marks = Optional::of_nullable(config.marks);
  let marks = some_marks.or_else_get(|| {
    trace!("computing default marks");
    config.default_marks
  });
  writeln!(out, "{}", marks)?;

  match no_marks.or_else_throw(|| NoMarksError) {
    Ok(marks) => writeln!(out, "{}", marks)?,
    Err(e) => writeln!(out, "{}", e)?,
  }
  Ok(())
}

fn conditional(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  debug!("conditional execution");
  let mut result = Ok(());
  let mut print = |gender: &str| {
    trace!(gender, "printing gender");
    if result.is_ok() {
      result = writeln!(out, "{}", gender);
    }
  };

  let male = Optional::of(config.gender.as_str());
  male.if_present(&mut print);
  let female = Optional::<&str>::empty();
  female.if_present(&mut print);

  result?;
  Ok(())
}

fn pipeline(config: &DemoConfig, out: &mut impl Write) -> Result<(), ScenarioError> {
  debug!("filter and map pipeline");
  let mut result = Ok(());
  Optional::of(config.padded.as_str())
    .filter(|s| s.contains(config.needle.as_str()))
    .map(str::trim)
    .if_present(|s| result = writeln!(out, "{}", s));
  result?;
  Ok(())
}
