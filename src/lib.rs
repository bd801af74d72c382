//! execve-test — print the current PID, then replace the process image.
//!
//! The bare invocation behaves like the classic exec smoke test:
//!
//! ```text
//! $ execve-test
//! My PID is 48213
//! /home/user
//! ```
//!
//! The second line comes from `pwd`, running under the same PID.

#[cfg(not(unix))]
compile_error!("execve-test requires a Unix target");

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod help;
pub mod logging;
pub mod output;
pub mod pid;
pub mod resolve;
pub mod run;
