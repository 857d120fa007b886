use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

/// Engine-wide default tolerance in canonical textual form.
///
/// Fallback for `DEFAULT_TOLERANCE` when the environment does not override
/// it. Graders that want a different engine default set the environment
/// variable rather than patching code.
pub const DEFAULT_TOLERANCE: &str = "0.001%";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    /// Canonical textual form of the tolerance applied when a question
    /// does not specify one (e.g. "0.001%").
    pub default_tolerance: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "numeric-marker".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/marker.log".into());
            let default_tolerance =
                env::var("DEFAULT_TOLERANCE").unwrap_or_else(|_| DEFAULT_TOLERANCE.into());

            Config {
                project_name,
                log_level,
                log_file,
                default_tolerance,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Config is a process-wide OnceCell: every test that touches it runs
    // serially and shares the first initialization.

    #[test]
    #[serial]
    fn test_init_uses_defaults_when_env_missing() {
        env::remove_var("PROJECT_NAME");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FILE");
        env::remove_var("DEFAULT_TOLERANCE");

        let config = Config::init("does-not-exist.env");
        assert_eq!(config.project_name, "numeric-marker");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "logs/marker.log");
        assert_eq!(config.default_tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    #[serial]
    fn test_get_returns_initialized_config() {
        Config::init("does-not-exist.env");
        let config = Config::get();
        assert_eq!(config.default_tolerance, DEFAULT_TOLERANCE);
    }
}
