//! File logging.
//!
//! The terminal is in raw mode for the whole run, so log records go to a
//! file or nowhere.

use std::path::Path;

use log::LevelFilter;

use crate::AppError;

/// Install the global logger. Without a path logging stays disabled.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<(), AppError> {
    let Some(path) = path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                timestamp(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;

    log::info!("logging to {} at level {}", path.display(), level);
    Ok(())
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `--log-level` value such as `debug` or `warn`.
pub fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level `{}`", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level("OFF"), Ok(LevelFilter::Off));
        assert!(parse_level("chatty").is_err());
    }

    #[test]
    fn test_disabled_without_path() {
        init(None, LevelFilter::Debug).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Off);
    }

    #[test]
    fn test_timestamp_is_local_datetime() {
        let stamp = timestamp();
        assert_eq!(stamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
