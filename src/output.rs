use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::pid::{PidReport, ProcessId};

/// Output format selection for all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object on stdout.
    Json,
    /// Human-readable summary on stdout.
    #[default]
    Human,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Write a successful result to stdout.
///
/// - **Json**: a single JSON object, no extraneous text.
/// - **Human**: indented JSON.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T) -> Result<(), std::io::Error> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(value).map_err(std::io::Error::other)?;
            writeln!(stdout, "{json}")?;
        }
        OutputFormat::Human => {
            let pretty = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
            writeln!(stdout, "{pretty}")?;
        }
    }
    stdout.flush()
}

/// Write the pre-exec PID line and flush stdout.
///
/// Human mode prints `My PID is <pid>`; JSON mode prints the report as a
/// single line. The flush must happen before exec, which discards any
/// buffered output.
pub fn emit_banner(format: OutputFormat, report: &PidReport) -> Result<(), std::io::Error> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Human => writeln!(stdout, "{}", banner_line(report))?,
        OutputFormat::Json => {
            let json = serde_json::to_string(report).map_err(std::io::Error::other)?;
            writeln!(stdout, "{json}")?;
        }
    }
    stdout.flush()
}

fn banner_line(report: &PidReport) -> String {
    ProcessId::from_raw(report.pid).banner()
}

/// Write an error to stdout (JSON mode) or stderr (human mode).
///
/// `exit_code_num` is the raw numeric exit status.
pub fn emit_error(format: OutputFormat, exit_code_num: u8, message: &str) {
    match format {
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "error": message,
                "exit_code": exit_code_num,
            });
            // JSON errors go to stdout so the caller always gets valid JSON on stdout.
            println!("{}", serde_json::to_string(&obj).unwrap_or_else(|_| {
                format!("{{\"error\":\"{message}\"}}")
            }));
        }
        OutputFormat::Human => {
            eprintln!("error: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_line_matches_original_format() {
        let report = PidReport {
            pid: 31337,
            ppid: 1,
            observed_at: chrono::Utc::now(),
        };
        assert_eq!(banner_line(&report), "My PID is 31337");
    }

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Human.to_string(), "human");
    }

    #[test]
    fn output_format_default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
