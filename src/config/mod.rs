use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Module selected on startup unless the config overrides it.
pub const DEFAULT_MODULE: &str = "patient-management";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend_url: Option<String>,

    #[serde(default)]
    pub default_module: Option<String>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PULSE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("pulse").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("pulse").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "pulse", "pulse")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("pulse"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("pulse"));
    }
    directories::ProjectDirs::from("io", "pulse", "pulse").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Resolve the backend base URL. CLI flag wins, then the environment,
/// then the config file, then the fixed local default.
pub fn resolve_backend_url(cli: Option<&str>, config: &Config) -> String {
    if let Some(url) = non_empty(cli) {
        return normalize_http_endpoint(url);
    }
    if let Ok(url) = std::env::var("PULSE_BACKEND_URL") {
        if let Some(url) = non_empty(Some(&url)) {
            return normalize_http_endpoint(url);
        }
    }
    if let Some(url) = non_empty(config.backend_url.as_deref()) {
        return normalize_http_endpoint(url);
    }
    DEFAULT_BACKEND_URL.to_string()
}

/// Initial active module id: config override or the built-in default.
pub fn initial_module(config: &Config) -> String {
    non_empty(config.default_module.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_MODULE.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub fn normalize_http_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_scheme_and_trims_slash() {
        assert_eq!(
            normalize_http_endpoint("localhost:8000"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_http_endpoint("https://clinic.example/"),
            "https://clinic.example"
        );
    }

    #[test]
    fn cli_flag_beats_config() {
        let config = Config {
            backend_url: Some("http://from-config:9000".to_string()),
            default_module: None,
        };
        assert_eq!(
            resolve_backend_url(Some("from-cli:7000"), &config),
            "http://from-cli:7000"
        );
    }

    #[test]
    fn blank_config_values_fall_through() {
        let config = Config {
            backend_url: None,
            default_module: Some(String::new()),
        };
        assert_eq!(initial_module(&config), DEFAULT_MODULE);
    }
}
