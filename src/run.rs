//! `run` handler — print the PID, then replace the process image.
//!
//! Order matters: the PID line is written and flushed first, then exec is
//! attempted. A successful exec never comes back here; whatever the new
//! program prints follows the PID line on the same stdout.

use std::convert::Infallible;

use log::{debug, info};

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::ExecveTestError;
use crate::exec::{self, ExecRequest};
use crate::output::{self, OutputFormat};
use crate::pid;
use crate::resolve;

/// Build the exec request from the config and command-line overrides.
pub fn request_for(args: &RunArgs, config: &Config) -> ExecRequest {
    ExecRequest::from_config(&config.exec).with_overrides(args.program.clone(), args.args.clone())
}

/// Returns only when exec fails.
pub fn execute(
    args: &RunArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<Infallible, ExecveTestError> {
    let request = request_for(args, config);

    if log::log_enabled!(log::Level::Debug) {
        let resolution = resolve::resolve(&request.program);
        debug!(
            "{} resolves to {:?} (executable: {})",
            resolution.program, resolution.path, resolution.executable
        );
    }

    let report = pid::report();
    info!("pid {} (parent {}), replacing image with {:?}", report.pid, report.ppid, request.argv());
    output::emit_banner(format, &report)?;

    exec::replace_image(&request)
}
