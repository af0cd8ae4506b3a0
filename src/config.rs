//! Environment-driven settings.
//!
//! Values come from the process environment, optionally seeded from a `.env` file
//! in the working directory. CLI flags always win over these.

use std::path::PathBuf;

/// Environment variable holding the default display name.
pub const ENV_NAME: &str = "VMATT_NAME";
/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "VMATT_LOG";
/// Environment variable naming a log file for TUI sessions.
pub const ENV_LOG_FILE: &str = "VMATT_LOG_FILE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Default name used when none is given on the command line.
    pub default_name: Option<String>,
    /// Filter directive for `tracing-subscriber` (e.g. `info`, `vmatt=debug`).
    pub log_filter: Option<String>,
    /// Where the TUI writes logs; the TUI owns the terminal so it never logs to stderr.
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load `.env` (if present) and read settings from the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (blank values count as unset).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            default_name: get(ENV_NAME),
            log_filter: get(ENV_LOG),
            log_file: get(ENV_LOG_FILE).map(PathBuf::from),
        }
    }

    /// Pick the CLI-provided name, falling back to the configured default.
    pub fn resolve_name(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn reads_known_keys_and_ignores_blanks() {
        let s = settings(&[(ENV_NAME, " Ada "), (ENV_LOG, ""), (ENV_LOG_FILE, "vmatt.log")]);
        assert_eq!(s.default_name.as_deref(), Some("Ada"));
        assert_eq!(s.log_filter, None);
        assert_eq!(s.log_file, Some(PathBuf::from("vmatt.log")));
    }

    #[test]
    fn cli_name_wins_over_default() {
        let s = settings(&[(ENV_NAME, "Ada")]);
        assert_eq!(s.resolve_name(Some("Grace")).as_deref(), Some("Grace"));
        assert_eq!(s.resolve_name(Some("  ")).as_deref(), Some("Ada"));
        assert_eq!(s.resolve_name(None).as_deref(), Some("Ada"));
        assert_eq!(Settings::default().resolve_name(None), None);
    }
}
