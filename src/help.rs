//! Help subcommand — list subcommands or show detailed help for one.

use serde::Serialize;

use crate::cli::HelpArgs;
use crate::error::ExecveTestError;

// ── Output types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HelpOverview {
    pub subcommands: Vec<SubcommandSummary>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SubcommandSummary {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SubcommandHelp {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterInfo>,
    pub exit_codes: Vec<ExitCodeInfo>,
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub default: Option<String>,
    pub description: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ExitCodeInfo {
    pub code: u8,
    pub meaning: String,
}

// ── Subcommand registry ──────────────────────────────────────────────

fn setup_exit_codes() -> Vec<ExitCodeInfo> {
    vec![
        ExitCodeInfo { code: 0, meaning: "Success".to_string() },
        ExitCodeInfo { code: 2, meaning: "Bad config, bad argument, or I/O error".to_string() },
    ]
}

fn exec_exit_codes() -> Vec<ExitCodeInfo> {
    vec![
        ExitCodeInfo { code: 1, meaning: "Exec failed for another reason".to_string() },
        ExitCodeInfo { code: 2, meaning: "Bad config, bad argument, or I/O error".to_string() },
        ExitCodeInfo { code: 126, meaning: "Program found but not executable".to_string() },
        ExitCodeInfo { code: 127, meaning: "Program not found".to_string() },
    ]
}

fn all_subcommands() -> Vec<SubcommandSummary> {
    vec![
        SubcommandSummary { name: "run".into(), description: "Print the PID, then exec the target program".into() },
        SubcommandSummary { name: "pid".into(), description: "Print the PID report without exec".into() },
        SubcommandSummary { name: "resolve".into(), description: "Report where the target program resolves on PATH".into() },
        SubcommandSummary { name: "help-cmd".into(), description: "Show help for a subcommand".into() },
    ]
}

fn subcommand_detail(name: &str) -> Option<SubcommandHelp> {
    match name {
        "run" => Some(SubcommandHelp {
            name: "run".into(),
            description: "Print the PID, then exec the target program. On success the target's exit status is the process exit status.".into(),
            parameters: vec![
                ParameterInfo { name: "--program".into(), param_type: "string".into(), required: false, default: Some("pwd".into()), description: "Program to exec, searched on PATH".into() },
                ParameterInfo { name: "args".into(), param_type: "string[]".into(), required: false, default: None, description: "Arguments after --, passed after argv[0]".into() },
            ],
            exit_codes: exec_exit_codes(),
            examples: vec![
                "execve-test".into(),
                "execve-test run --program echo -- hello".into(),
                "execve-test --config target.toml run".into(),
            ],
        }),
        "pid" => Some(SubcommandHelp {
            name: "pid".into(),
            description: "Print the PID report without exec".into(),
            parameters: vec![],
            exit_codes: setup_exit_codes(),
            examples: vec!["execve-test pid --output json".into()],
        }),
        "resolve" => Some(SubcommandHelp {
            name: "resolve".into(),
            description: "Report where the target program resolves on PATH".into(),
            parameters: vec![
                ParameterInfo { name: "--program".into(), param_type: "string".into(), required: false, default: Some("pwd".into()), description: "Program to look up".into() },
            ],
            exit_codes: exec_exit_codes(),
            examples: vec!["execve-test resolve --program ls".into()],
        }),
        _ => {
            let subs = all_subcommands();
            subs.iter().find(|s| s.name == name).map(|s| SubcommandHelp {
                name: s.name.clone(),
                description: s.description.clone(),
                parameters: vec![],
                exit_codes: setup_exit_codes(),
                examples: vec![],
            })
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────

pub fn show(args: HelpArgs) -> Result<serde_json::Value, ExecveTestError> {
    match args.subcommand {
        None => {
            let output = HelpOverview {
                subcommands: all_subcommands(),
            };
            serde_json::to_value(&output).map_err(ExecveTestError::Json)
        }
        Some(name) => match subcommand_detail(&name) {
            Some(detail) => serde_json::to_value(&detail).map_err(ExecveTestError::Json),
            None => Err(ExecveTestError::UnknownSubcommand { name }),
        },
    }
}

/// Return the list of all subcommand names.
pub fn subcommand_names() -> Vec<String> {
    all_subcommands().iter().map(|s| s.name.clone()).collect()
}
