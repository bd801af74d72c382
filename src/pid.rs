//! Process identity — the PID observed before the image is replaced.
//!
//! A successful exec keeps the PID, so the value printed here is also the
//! PID of whatever program runs next.

use std::fmt;

use chrono::{DateTime, Utc};
use nix::unistd::{self, Pid};
use serde::Serialize;

/// OS-assigned identifier of a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(Pid);

impl ProcessId {
    pub fn from_raw(raw: i32) -> Self {
        ProcessId(Pid::from_raw(raw))
    }

    pub fn as_raw(self) -> i32 {
        self.0.as_raw()
    }

    /// The line printed on stdout before exec, without the trailing newline.
    pub fn banner(self) -> String {
        format!("My PID is {self}")
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_raw())
    }
}

/// PID of the calling process.
pub fn current() -> ProcessId {
    ProcessId(unistd::getpid())
}

/// PID of the calling process's parent.
pub fn parent() -> ProcessId {
    ProcessId(unistd::getppid())
}

/// Snapshot of the process identity, used for JSON output.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PidReport {
    pub pid: i32,
    pub ppid: i32,
    /// Observation timestamp, serialized as RFC 3339.
    pub observed_at: DateTime<Utc>,
}

pub fn report() -> PidReport {
    PidReport {
        pid: current().as_raw(),
        ppid: parent().as_raw(),
        observed_at: Utc::now(),
    }
}
