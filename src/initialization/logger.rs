//! Logger initialization.
//!
//! `RUST_LOG` is read first and `--log-level` overrides it. Lines are stamped
//! in Dhaka time, the same clock the dashboard shows.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use crate::time::bangladesh_now;

/// HTTP stack modules and the most they may log.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// Installs the global logger.
///
/// Dependency modules never log more than their cap in `QUIET_MODULES`, nor
/// more than `level` itself.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
///
/// ```bash
/// RUST_LOG=amar_weather::geocode=debug amar_weather locate 24.75 90.42
/// amar_weather --log-level warn --log-format json dashboard
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, (*cap).min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => builder.format(|buf, record| writeln!(buf, "{}", json_line(record))),
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)))
        }
    };

    builder.try_init().map_err(InitializationError::from)
}

/// `geocode::resolver` for this crate's modules, the full path otherwise.
fn short_target(target: &str) -> &str {
    target.strip_prefix(CRATE_PREFIX).unwrap_or(target)
}

fn badge(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("❌", Color::Red),
        Level::Warn => ("⚠️", Color::Yellow),
        Level::Info => ("✔️", Color::Green),
        Level::Debug => ("🔍", Color::Blue),
        Level::Trace => ("🔬", Color::Magenta),
    }
}

fn plain_line(record: &Record) -> String {
    let (emoji, color) = badge(record.level());
    format!(
        "{} {} {} [{}] {}",
        emoji,
        bangladesh_now().format("%H:%M:%S").to_string().dimmed(),
        short_target(record.target()).cyan(),
        record.level().as_str().color(color),
        record.args()
    )
}

fn json_line(record: &Record) -> String {
    serde_json::json!({
        "ts": bangladesh_now().to_rfc3339(),
        "level": record.level().as_str(),
        "target": short_target(record.target()),
        "msg": record.args().to_string(),
    })
    .to_string()
}
