//! Process image replacement.
//!
//! `replace_image` hands the request to `execvp(3)`: names without a slash
//! are searched on `PATH`, and on success the calling image is gone. The
//! function therefore only ever returns an error.

use std::convert::Infallible;
use std::ffi::CString;

use log::debug;
use nix::sys::signal::{self, SigHandler, Signal};
use nix::unistd;

use crate::config::{ExecSection, DEFAULT_PROGRAM};
use crate::error::ExecveTestError;

/// Program and arguments handed to exec.
///
/// `argv[0]` is always the program name itself; `args` follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ExecRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, Vec::new())
    }
}

impl ExecRequest {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(section: &ExecSection) -> Self {
        Self::new(section.program.clone(), section.args.clone())
    }

    /// Apply command-line overrides on top of the configured request.
    ///
    /// A new program replaces the configured arguments as well; arguments
    /// given alone keep the configured program.
    pub fn with_overrides(self, program: Option<String>, args: Vec<String>) -> Self {
        match program {
            Some(program) => Self::new(program, args),
            None if !args.is_empty() => Self::new(self.program, args),
            None => self,
        }
    }

    /// Full argument vector, `argv[0]` included.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    fn to_c_strings(&self) -> Result<(CString, Vec<CString>), ExecveTestError> {
        if self.program.is_empty() {
            return Err(ExecveTestError::InvalidArgument {
                arg: String::new(),
                reason: "program name is empty".to_string(),
            });
        }
        let argv = self
            .argv()
            .into_iter()
            .map(|arg| {
                CString::new(arg).map_err(|_| ExecveTestError::InvalidArgument {
                    arg: arg.replace('\0', "\\0"),
                    reason: "contains a NUL byte".to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((argv[0].clone(), argv))
    }
}

/// Replace the current process image with `request`.
///
/// Returns only when exec fails. Anything buffered in the process that has
/// not been flushed is lost on success.
pub fn replace_image(request: &ExecRequest) -> Result<Infallible, ExecveTestError> {
    let (file, argv) = request.to_c_strings()?;
    debug!("execvp {:?} argv={:?}", request.program, request.argv());

    // The Rust runtime ignores SIGPIPE, and an ignored disposition survives
    // exec. The new image gets the default back; a failed exec restores ours.
    let previous = set_sigpipe(SigHandler::SigDfl)?;

    let errno = match unistd::execvp(&file, &argv) {
        Ok(never) => match never {},
        Err(errno) => errno,
    };
    debug!("execvp {:?} returned {}", request.program, errno);

    set_sigpipe(previous)?;
    Err(ExecveTestError::from_errno(&request.program, errno))
}

fn set_sigpipe(handler: SigHandler) -> Result<SigHandler, ExecveTestError> {
    // SAFETY: only SigDfl, SigIgn, or a handler previously returned by
    // signal(2) are installed here; no Rust closure is registered.
    unsafe { signal::signal(Signal::SIGPIPE, handler) }
        .map_err(|errno| ExecveTestError::Io(errno.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_pwd() {
        let request = ExecRequest::default();
        assert_eq!(request.argv(), vec!["pwd"]);
    }

    #[test]
    fn argv_starts_with_program() {
        let request = ExecRequest::new("echo", vec!["a".into(), "b c".into()]);
        assert_eq!(request.argv(), vec!["echo", "a", "b c"]);
    }

    #[test]
    fn override_program_drops_configured_args() {
        let configured = ExecRequest::new("echo", vec!["configured".into()]);
        let request = configured.with_overrides(Some("ls".into()), vec![]);
        assert_eq!(request, ExecRequest::new("ls", vec![]));
    }

    #[test]
    fn override_args_keeps_program() {
        let configured = ExecRequest::new("echo", vec!["configured".into()]);
        let request = configured.with_overrides(None, vec!["cli".into()]);
        assert_eq!(request.argv(), vec!["echo", "cli"]);
    }

    #[test]
    fn no_override_keeps_config() {
        let configured = ExecRequest::new("echo", vec!["configured".into()]);
        let request = configured.clone().with_overrides(None, vec![]);
        assert_eq!(request, configured);
    }

    #[test]
    fn nul_in_argument_is_rejected() {
        let request = ExecRequest::new("echo", vec!["a\0b".into()]);
        let err = replace_image(&request).unwrap_err();
        assert!(matches!(err, ExecveTestError::InvalidArgument { .. }));
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn empty_program_is_rejected() {
        let err = replace_image(&ExecRequest::new("", vec![])).unwrap_err();
        assert!(matches!(err, ExecveTestError::InvalidArgument { .. }));
    }

    #[test]
    fn missing_program_returns_not_found() {
        let request = ExecRequest::new("execve-test-no-such-program-7f3a", vec![]);
        let err = replace_image(&request).unwrap_err();
        assert!(matches!(err, ExecveTestError::ProgramNotFound { .. }), "got {err:?}");
        assert_eq!(err.exit_status(), 127);
    }

    #[test]
    fn non_executable_file_returns_permission_denied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-executable");
        std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();

        let request = ExecRequest::new(path.to_string_lossy(), vec![]);
        let err = replace_image(&request).unwrap_err();
        assert!(matches!(err, ExecveTestError::PermissionDenied { .. }), "got {err:?}");
        assert_eq!(err.exit_status(), 126);
    }
}
