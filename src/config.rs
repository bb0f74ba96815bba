// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// `http(s)://` base URL or local directory holding `<dateKey>.json`.
    pub snapshot_base: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_base: "public".to_string(),
            port: 3000,
            request_timeout_secs: 30,
            output_dir: PathBuf::from("output"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory, then apply environment
    /// overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), |key| env::var(key).ok())
    }

    /// A missing file yields the defaults; an unreadable or invalid one is an
    /// error.
    pub fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let config = if path.exists() {
            load_config(path).with_context(|| format!("Invalid {}", path.display()))?
        } else {
            Config::default()
        };
        Ok(config.with_env_overrides(lookup))
    }

    /// Apply `SNAPSHOT_BASE`, `PORT` and `LOG_LEVEL` from `lookup`.
    /// Unparseable values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup("SNAPSHOT_BASE") {
            self.snapshot_base = base;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)?;
    Ok(toml::from_str(&config_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.snapshot_base, "public");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_deserialization_from_toml_string() {
        let toml_content = r#"
snapshot_base = "https://example.org/root-ranking/"
port = 8080
request_timeout_secs = 5
output_dir = "reports"
log_level = "debug"
"#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.snapshot_base, "https://example.org/root-ranking/");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("port = 4000").expect("Failed to parse TOML");

        assert_eq!(config.port, 4000);
        assert_eq!(config.snapshot_base, "public");
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_invalid_toml_syntax() {
        let result: Result<Config, _> = toml::from_str("port = [1");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SNAPSHOT_BASE", "/srv/snapshots"),
            ("PORT", "9000"),
            ("LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();

        let config =
            Config::default().with_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.snapshot_base, "/srv/snapshots");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unparseable_port_override_is_ignored() {
        let config = Config::default().with_env_overrides(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_load_config_from_temp_file() {
        let config = Config {
            snapshot_base: "snapshots".to_string(),
            port: 3100,
            ..Config::default()
        };

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
        temp_file
            .write_all(toml_str.as_bytes())
            .expect("Failed to write");

        let loaded = load_config(temp_file.path()).expect("Failed to load");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join(CONFIG_FILE), |_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_broken_file_reports_error() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(b"port = [1").expect("Failed to write");

        let err = Config::load_from(temp_file.path(), |_| None).unwrap_err();
        assert!(err.to_string().starts_with("Invalid "));
    }

    #[test]
    fn test_load_from_applies_env_overrides() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"port = 4000\nlog_level = \"debug\"")
            .expect("Failed to write");

        let config = Config::load_from(temp_file.path(), |key| match key {
            "LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.log_level, "warn");
    }
}
