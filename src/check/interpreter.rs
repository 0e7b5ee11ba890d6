//! Python interpreter discovery and probe snippet execution.
//!
//! Every probe shells out as `python -c <snippet>` with captured output.
//! The interpreter is resolved once per run: an explicit flag wins, then
//! an active virtualenv, then a PATH walk over `python3`/`python`. The
//! PATH walk checks executable bits itself instead of shelling out to
//! `which`.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{PacklistError, Result};

/// Binary names probed on PATH, in preference order.
const INTERPRETER_NAMES: &[&str] = &["python3", "python"];

/// Failure detail used when no interpreter could be resolved.
pub const NO_INTERPRETER: &str =
    "no Python interpreter found (tried --python, VIRTUAL_ENV, and python3/python on PATH)";

/// Where a resolved interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    /// Explicit `--python` flag.
    Flag,
    /// `$VIRTUAL_ENV/bin/python` of an active virtualenv.
    VirtualEnv,
    /// Found on PATH.
    PathLookup,
}

impl fmt::Display for InterpreterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterpreterSource::Flag => "--python flag",
            InterpreterSource::VirtualEnv => "active virtualenv",
            InterpreterSource::PathLookup => "PATH",
        };
        f.write_str(label)
    }
}

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
    source: InterpreterSource,
}

impl PythonInterpreter {
    /// Resolves an interpreter from the real environment.
    pub fn resolve(explicit: Option<&Path>) -> Option<Self> {
        Self::resolve_with(explicit, |key| env::var(key), &parse_system_path())
    }

    /// Resolution with an injected env lookup and PATH entries.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn resolve_with<F>(
        explicit: Option<&Path>,
        env_fn: F,
        path_entries: &[PathBuf],
    ) -> Option<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        // An explicit flag is taken at face value; a bad path surfaces
        // as a launch failure on every probe rather than being
        // second-guessed here.
        if let Some(path) = explicit {
            return Some(Self {
                path: path.to_path_buf(),
                source: InterpreterSource::Flag,
            });
        }

        if let Ok(root) = env_fn("VIRTUAL_ENV") {
            let candidate = PathBuf::from(root).join("bin").join("python");
            if candidate.is_file() {
                return Some(Self {
                    path: candidate,
                    source: InterpreterSource::VirtualEnv,
                });
            }
        }

        for name in INTERPRETER_NAMES {
            if let Some(found) = resolve_on_path(name, path_entries) {
                return Some(Self {
                    path: found,
                    source: InterpreterSource::PathLookup,
                });
            }
        }

        None
    }

    /// Path to the interpreter binary.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Which resolution step produced this interpreter.
    pub fn source(&self) -> InterpreterSource {
        self.source
    }

    /// Runs `<python> -c <code>`, capturing stdout and stderr.
    pub fn run(&self, code: &str) -> Result<SnippetOutput> {
        debug!(interpreter = %self.path.display(), code, "running probe snippet");

        let output = Command::new(&self.path)
            .arg("-c")
            .arg(code)
            .output()
            .map_err(|err| PacklistError::ProbeLaunch {
                interpreter: self.path.clone(),
                message: err.to_string(),
            })?;

        Ok(SnippetOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Captured output of one probe snippet.
#[derive(Debug, Clone)]
pub struct SnippetOutput {
    /// True when the interpreter exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl SnippetOutput {
    /// Last non-empty stdout line, trimmed.
    pub fn last_stdout_line(&self) -> Option<&str> {
        last_line(&self.stdout)
    }

    /// Last non-empty stderr line, trimmed. For Python tracebacks this
    /// is the exception line.
    pub fn last_stderr_line(&self) -> Option<&str> {
        last_line(&self.stderr)
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).last()
}

/// Result of attempting one probe snippet.
///
/// Launch problems (no interpreter at all, or a spawn failure) collapse
/// into [`SnippetRun::Unavailable`] so callers can report them exactly
/// like any other probe failure without aborting the run.
#[derive(Debug, Clone)]
pub enum SnippetRun {
    /// The interpreter ran; see the captured output.
    Completed(SnippetOutput),
    /// The snippet never ran; carries the reason.
    Unavailable(String),
}

/// Runs a snippet through an optionally-resolved interpreter.
pub fn run_snippet(py: Option<&PythonInterpreter>, code: &str) -> SnippetRun {
    match py {
        None => SnippetRun::Unavailable(NO_INTERPRETER.to_string()),
        Some(interpreter) => match interpreter.run(code) {
            Ok(output) => SnippetRun::Completed(output),
            Err(err) => SnippetRun::Unavailable(err.to_string()),
        },
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a binary by iterating over PATH entries.
fn resolve_on_path(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the PATH environment variable into a list of directories.
fn parse_system_path() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
}
