//! `PATH` lookup for the exec target.
//!
//! Mirrors the search `execvp` performs so the target can be checked
//! without replacing the process: names containing a slash are taken as
//! paths, everything else is looked up in each `PATH` entry in order. With
//! `PATH` unset the C library's default search path is used.

use std::ffi::OsStr;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::ExecveTestError;

/// Search path glibc's `execvp` uses when `PATH` is unset.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Where a program name resolves to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Resolution {
    pub program: String,
    /// Resolved path when a matching file exists.
    pub path: Option<PathBuf>,
    /// Whether the resolved path is a regular file carrying an execute bit.
    pub executable: bool,
    /// Human-readable remediation hint when the lookup fails.
    pub hint: Option<String>,
}

impl Resolution {
    /// Convert a failed resolution into the error exec would report.
    pub fn into_result(self) -> Result<Self, ExecveTestError> {
        match (&self.path, self.executable) {
            (Some(_), true) => Ok(self),
            (Some(_), false) => Err(ExecveTestError::PermissionDenied {
                program: self.program,
                errno: Errno::EACCES,
            }),
            (None, _) => Err(ExecveTestError::ProgramNotFound {
                program: self.program,
                errno: Errno::ENOENT,
            }),
        }
    }
}

/// Resolve `program` against the process's `PATH`.
pub fn resolve(program: &str) -> Resolution {
    let path_var = std::env::var_os("PATH");
    resolve_in(program, path_var.as_deref())
}

/// Resolve `program` against an explicit `PATH` value.
///
/// Executable matches win over earlier non-executable ones, as with
/// `execvp`, which keeps searching after `EACCES`. Anything that exists but
/// is not an executable regular file (a directory, a plain file) counts as
/// a non-executable match.
pub fn resolve_in(program: &str, path_var: Option<&OsStr>) -> Resolution {
    if program.contains('/') {
        let candidate = Path::new(program);
        return if candidate.exists() {
            found(program, candidate.to_path_buf())
        } else {
            not_found(program, format!("{program} does not exist"))
        };
    }

    let path_var = path_var.unwrap_or(OsStr::new(DEFAULT_SEARCH_PATH));

    let mut first_match: Option<PathBuf> = None;
    for dir in std::env::split_paths(path_var) {
        // An empty PATH entry means the current directory.
        let dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir
        };
        let candidate = dir.join(program);
        if !candidate.exists() {
            continue;
        }
        if is_executable(&candidate) {
            return found(program, candidate);
        }
        first_match.get_or_insert(candidate);
    }

    match first_match {
        Some(path) => found(program, path),
        None => not_found(
            program,
            format!("{program} was not found in any PATH directory"),
        ),
    }
}

/// `resolve [--program <name>]` handler.
pub fn show(args: &ResolveArgs, config: &Config) -> Result<serde_json::Value, ExecveTestError> {
    let program = args
        .program
        .clone()
        .unwrap_or_else(|| config.exec.program.clone());
    let resolution = resolve(&program).into_result()?;
    Ok(serde_json::to_value(resolution)?)
}

// ── Utility ──────────────────────────────────────────────────────────

fn is_executable(path: &Path) -> bool {
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

fn found(program: &str, path: PathBuf) -> Resolution {
    let executable = is_executable(&path);
    let hint = if executable {
        None
    } else if path.is_file() {
        Some(format!("{} is not executable; chmod +x it", path.display()))
    } else {
        Some(format!("{} is not a regular file", path.display()))
    };
    Resolution {
        program: program.to_string(),
        path: Some(path),
        executable,
        hint,
    }
}

fn not_found(program: &str, hint: String) -> Resolution {
    Resolution {
        program: program.to_string(),
        path: None,
        executable: false,
        hint: Some(hint),
    }
}
