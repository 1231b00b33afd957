use std::path::{Path, PathBuf};

/// Loads the nearest `.env` file, searching the current directory and its ancestors, into the process environment.
/// Variables already set in the environment are not overridden.
///
/// Returns the path of the loaded file, or `None` if no `.env` file was found.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  found_or_none(dotenvy::dotenv())
}

/// Loads the env file at `path` into the process environment. Returns `None` if `path` does not exist.
pub fn load_dotenv_file_into_env(path: impl AsRef<Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
  let path = path.as_ref();
  found_or_none(dotenvy::from_path(path).map(|_| path.to_path_buf()))
}

fn found_or_none(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
  match result {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}
