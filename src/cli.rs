use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::output::OutputFormat;

/// Print the current PID, then replace this process with another program.
#[derive(Parser, Debug)]
#[command(name = "execve-test", version, about)]
pub struct Cli {
    /// Subcommand to run; `run` with defaults when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for all subcommands.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    /// TOML config file describing the exec target.
    #[arg(long, env = "EXECVE_TEST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the PID, then exec the target program.
    Run(RunArgs),

    /// Print the PID report without exec.
    Pid,

    /// Report where the target program resolves on PATH.
    Resolve(ResolveArgs),

    /// Show help for a subcommand.
    #[command(name = "help-cmd", hide = true)]
    HelpCmd(HelpArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunArgs::default())
    }
}

// ── run ──────────────────────────────────────────────────────────────

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Program to exec (overrides the config file).
    #[arg(long)]
    pub program: Option<String>,

    /// Arguments passed after `argv[0]`.
    #[arg(last = true)]
    pub args: Vec<String>,
}

// ── resolve ──────────────────────────────────────────────────────────

#[derive(clap::Args, Debug, Default)]
pub struct ResolveArgs {
    /// Program to look up (defaults to the configured target).
    #[arg(long)]
    pub program: Option<String>,
}

// ── help ─────────────────────────────────────────────────────────────

#[derive(clap::Args, Debug)]
pub struct HelpArgs {
    /// Subcommand name to show detailed help for.
    pub subcommand: Option<String>,
}
