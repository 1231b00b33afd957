use std::error::Error;
use std::io;

use tracing::{debug, warn};

use optional_core::app::env;
use optional_core::app::tracing::AppTracingBuilder;

use crate::config::DemoConfig;

mod config;
mod scenario;

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv = match std::env::var_os("OPTIONAL_DEMO_ENV_FILE") {
    Some(path) => env::load_dotenv_file_into_env(path),
    None => env::load_dotenv_into_env(),
  };
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(std::env::var_os("OPTIONAL_DEMO_LOG_FILE"))
    .build();
  match dotenv {
    Ok(Some(path)) => debug!("loaded environment from '{}'", path.display()),
    Ok(None) => {}
    Err(cause) => warn!(%cause, "failed to load .env file; continuing without it"),
  }

  let config = DemoConfig::from_env()?;
  debug!(?config, "loaded configuration");

  let stdout = io::stdout();
  let mut out = stdout.lock();
  scenario::run(&config, &mut out)?;

  Ok(())
}
