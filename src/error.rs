use std::process::ExitCode;

use nix::errno::Errno;

/// All errors produced by execve-test.
///
/// Exec failures follow the shell convention:
/// - **127**: the program could not be found
/// - **126**: the program was found but could not be executed
/// - **1**: any other exec failure
///
/// Everything that goes wrong before exec is attempted (bad config,
/// bad arguments, I/O on stdout) exits with **2**.
#[derive(thiserror::Error, Debug)]
pub enum ExecveTestError {
    // ── Exec failures ────────────────────────────────────────────────

    #[error("{program}: program not found ({errno:?})")]
    ProgramNotFound { program: String, errno: Errno },

    #[error("{program}: permission denied ({errno:?})")]
    PermissionDenied { program: String, errno: Errno },

    #[error("exec of {program} failed: {errno}")]
    ExecFailed {
        program: String,
        #[source]
        errno: Errno,
    },

    // ── Setup errors (exit code 2) ───────────────────────────────────

    #[error("Invalid argument {arg:?}: {reason}")]
    InvalidArgument { arg: String, reason: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Unknown subcommand: {name}")]
    UnknownSubcommand { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExecveTestError {
    /// Raw numeric exit status for this error. Never zero.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::ProgramNotFound { .. } => 127,
            Self::PermissionDenied { .. } => 126,
            Self::ExecFailed { .. } => 1,

            Self::InvalidArgument { .. }
            | Self::ConfigParse(_)
            | Self::UnknownSubcommand { .. }
            | Self::Io(_)
            | Self::Json(_) => 2,
        }
    }

    /// Map each error variant to its process exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Build the error for a failed exec of `program`.
    pub fn from_errno(program: &str, errno: Errno) -> Self {
        let program = program.to_string();
        match errno {
            Errno::ENOENT | Errno::ENOTDIR => Self::ProgramNotFound { program, errno },
            Errno::EACCES | Errno::EPERM => Self::PermissionDenied { program, errno },
            errno => Self::ExecFailed { program, errno },
        }
    }
}
