//! Loading and parsing of conda environment files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::conda::schema::CondaEnvironment;
use crate::error::{PacklistError, Result};

/// Loads and parses an environment file from disk.
///
/// A missing file is reported as [`PacklistError::EnvFileNotFound`] so
/// callers can print the path they actually looked at; every other I/O
/// failure is passed through untouched.
pub fn load_env_file(path: &Path) -> Result<CondaEnvironment> {
    debug!(path = %path.display(), "loading conda environment file");

    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            PacklistError::EnvFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PacklistError::Io(err)
        }
    })?;

    parse_env(&content, path)
}

/// Parses environment file content, attributing errors to `source`.
pub fn parse_env(content: &str, source: &Path) -> Result<CondaEnvironment> {
    let env: CondaEnvironment =
        serde_yaml::from_str(content).map_err(|err| PacklistError::EnvParseError {
            path: source.to_path_buf(),
            message: err.to_string(),
        })?;

    debug!(
        dependencies = env.dependencies.len(),
        "parsed conda environment"
    );
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_env_file_reads_valid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_env(
            &dir,
            "environment.yml",
            "name: demo\ndependencies:\n  - python=3.10\n",
        );

        let env = load_env_file(&path).unwrap();
        assert_eq!(env.name.as_deref(), Some("demo"));
        assert_eq!(env.dependencies.len(), 1);
    }

    #[test]
    fn load_env_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yml");

        let err = load_env_file(&path).unwrap_err();
        match err {
            PacklistError::EnvFileNotFound { path: reported } => {
                assert_eq!(reported, path);
            }
            other => panic!("expected EnvFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_env_reports_malformed_yaml() {
        let err = parse_env("dependencies: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            PacklistError::EnvParseError { path, message } => {
                assert_eq!(path, Path::new("bad.yml"));
                assert!(!message.is_empty());
            }
            other => panic!("expected EnvParseError, got {other:?}"),
        }
    }

    #[test]
    fn parse_env_rejects_non_mapping_document() {
        let err = parse_env("- just\n- a\n- list\n", Path::new("list.yml")).unwrap_err();
        assert!(matches!(err, PacklistError::EnvParseError { .. }));
    }
}
