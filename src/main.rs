use std::process::ExitCode;

use clap::Parser;

use execve_test::cli::{Cli, Command};
use execve_test::error::ExecveTestError;
use execve_test::{config, help, logging, output, pid, resolve, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = cli.output;
    match dispatch(cli) {
        Ok(value) => match output::emit(format, &value) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                let e = ExecveTestError::Io(e);
                output::emit_error(format, e.exit_status(), &e.to_string());
                e.exit_code()
            }
        },
        Err(e) => {
            log::debug!("exiting with status {}: {e:?}", e.exit_status());
            output::emit_error(format, e.exit_status(), &e.to_string());
            e.exit_code()
        }
    }
}

fn dispatch(cli: Cli) -> Result<serde_json::Value, ExecveTestError> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Run(args) => match run::execute(&args, &config, cli.output) {
            Ok(never) => match never {},
            Err(e) => Err(e),
        },
        Command::Pid => Ok(serde_json::to_value(pid::report())?),
        Command::Resolve(args) => resolve::show(&args, &config),
        Command::HelpCmd(args) => help::show(args),
    }
}
