//! Process-wide logger on stderr.
//!
//! `RUST_LOG` wins over the configured level. Only the first call starts the
//! backend; later calls return the level already in effect.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<(String, LoggerHandle)> = OnceCell::new();

pub fn init(level: &str) -> Result<&'static str, String> {
    let (active, _) = LOGGER.get_or_try_init(|| -> Result<(String, LoggerHandle), String> {
        let logspec = normalize_level(level);
        let handle = Logger::try_with_env_or_str(&logspec)
            .map_err(|err| format!("invalid log level `{logspec}`: {err}"))?
            .format(flexi_logger::colored_default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        info!("event=app_start level={} version={}", logspec, env!("CARGO_PKG_VERSION"));
        Ok((logspec, handle))
    })?;
    Ok(active.as_str())
}

fn normalize_level(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => level,
        _ => "info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(normalize_level(" DEBUG "), "debug");
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }

    #[test]
    fn init_is_idempotent() {
        let first = init("warn").unwrap();
        let second = init("trace").unwrap();
        assert_eq!(first, second);
    }
}
