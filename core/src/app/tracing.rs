use std::io;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the global tracing subscriber: a console layer on stderr and, when a log file path is given, a file layer.
///
/// The console layer is filtered by the `CONSOLE_LOG` environment variable and the file layer by `FILE_LOG`. Both
/// default to `info`.
#[derive(Default)]
pub struct AppTracingBuilder {
  log_file_path: Option<PathBuf>,
}
impl AppTracingBuilder {
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(|p| p.into());
    self
  }

  pub fn build(self) -> AppTracing {
    let console_layer = tracing_subscriber::fmt::layer()
      .with_writer(io::stderr)
      .with_filter(env_filter("CONSOLE_LOG"));
    let subscriber = tracing_subscriber::registry().with(console_layer);

    let Some(log_file_path) = self.log_file_path else {
      subscriber.init();
      return AppTracing::default();
    };

    #[cfg(feature = "app_tracing_file")] {
      match open_log_file(&log_file_path) {
        Err(cause) => {
          subscriber.init();
          tracing::warn!(%cause, "cannot log to file '{}'; logging to console only", log_file_path.display());
          AppTracing::default()
        }
        Ok(writer) => {
          let (non_blocking, guard) = tracing_appender::non_blocking(writer);
          let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(env_filter("FILE_LOG"));
          subscriber.with(file_layer).init();
          AppTracing { _file_guard: Some(guard) }
        }
      }
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      subscriber.init();
      tracing::warn!("cannot log to file '{}'; file logging is not enabled", log_file_path.display());
      AppTracing::default()
    }
  }
}

fn env_filter(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Keeps file logging alive; dropping it flushes and closes the log file.
#[derive(Default)]
pub struct AppTracing {
  #[cfg(feature = "app_tracing_file")]
  _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Creates the parent directories of `log_file_path` and truncates or creates the log file.
#[cfg(feature = "app_tracing_file")]
fn open_log_file(log_file_path: &std::path::Path) -> Result<io::BufWriter<std::fs::File>, io::Error> {
  if let Some(parent) = log_file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  Ok(io::BufWriter::new(std::fs::File::create(log_file_path)?))
}


#[cfg(all(test, feature = "app_tracing_file"))]
mod tests {
  use std::fs;
  use std::io::Write;

  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn open_log_file_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let log_file_path = dir.path().join("logs").join("log.txt");
    let mut writer = open_log_file(&log_file_path).unwrap();
    writer.write_all(b"line\n").unwrap();
    writer.flush().unwrap();
    assert_eq!(fs::read_to_string(&log_file_path).unwrap(), "line\n");
  }

  #[test]
  fn open_log_file_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    assert!(open_log_file(&blocker.join("log.txt")).is_err());
    assert!(open_log_file(&blocker.join("logs").join("log.txt")).is_err());
  }
}
