//! Logger setup. All log output goes to stderr; stdout carries only the PID
//! line and whatever the exec'd program prints.

use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "EXECVE_TEST_LOG";

/// Level for a `-v` count: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `EXECVE_TEST_LOG` overrides the `-v` level.
pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_env(env_logger::Env::new().filter(LOG_ENV))
        .target(env_logger::Target::Stderr)
        .try_init();
}
