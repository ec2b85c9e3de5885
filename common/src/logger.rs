use std::env;
use std::str::FromStr;

use redox_log::{OutputBuilder, RedoxLogger};

/// Environment variable overriding the stderr log level (`error`, `warn`, `info`,
/// `debug`, `trace`, `off`).
pub const LOG_LEVEL_VAR: &str = "DRIVER_LOG";

fn level_from_env(default: log::LevelFilter) -> log::LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|value| log::LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(default)
}

pub fn output_level() -> log::LevelFilter {
    level_from_env(log::LevelFilter::Info)
}

pub fn file_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

/// Configures logging for a single driver or tool.
#[cfg_attr(not(target_os = "redox"), allow(unused_variables, unused_mut))]
pub fn setup_logging(
    category: &str,
    subcategory: &str,
    logfile_base: &str,
    output_level: log::LevelFilter,
    file_level: log::LevelFilter,
) {
    let mut logger = RedoxLogger::new().with_output(
        OutputBuilder::stderr()
            .with_filter(output_level)
            .with_ansi_escape_codes()
            .flush_on_newline(true)
            .build(),
    );

    #[cfg(target_os = "redox")]
    match OutputBuilder::in_redox_logging_scheme(
        category,
        subcategory,
        format!("{logfile_base}.log"),
    ) {
        Ok(b) => {
            logger = logger.with_output(b.with_filter(file_level).flush_on_newline(true).build())
        }
        Err(error) => eprintln!("Failed to create {logfile_base}.log: {}", error),
    }

    if let Err(error) = logger.enable() {
        eprintln!("{category}/{subcategory}: failed to set default logger: {error}");
    }
}
