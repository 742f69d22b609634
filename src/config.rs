//! Application configuration.

use crate::consts::cli_consts::{polling, server};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, path::Path};

/// Get the path to the monitor config file, typically located at ~/.class-monitor/config.json.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".class-monitor").join("config.json"))
}

/// Turns a user-supplied server address into a base URL.
///
/// A bare `host:port` (as typed from an IP shown on the host machine) gets an
/// `http://` scheme. Anything that still is not an http(s) URL with a host is rejected.
pub fn normalize_server_url(raw: &str) -> Result<String, std::io::Error> {
    let trimmed = raw.trim();
    let invalid = |reason: String| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("'{}' is not a usable server address: {}", raw, reason),
        )
    };

    let url = if trimmed.contains("://") {
        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        url
    } else {
        // "localhost:8000" would otherwise parse with "localhost" as its scheme
        Url::parse(&format!("http://{}", trimmed)).map_err(|e| invalid(e.to_string()))?
    };

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn default_poll_interval_ms() -> u64 {
    polling::DEFAULT_INTERVAL_MS
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the monitor server, e.g. `http://10.84.87.149:8000`
    pub server_url: String,

    /// Milliseconds between polls of the students endpoint
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(server::DEFAULT_URL.to_string(), polling::DEFAULT_INTERVAL_MS)
    }
}

impl Config {
    pub fn new(server_url: String, poll_interval_ms: u64) -> Self {
        Config {
            server_url,
            poll_interval_ms,
        }
    }

    /// Merge settings by precedence: CLI flag, then environment, then the config
    /// file, then built-in defaults.
    pub fn resolve(
        cli_url: Option<String>,
        cli_interval_ms: Option<u64>,
        env_url: Option<String>,
        file: Option<Config>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let server_url = cli_url
            .or(env_url.filter(|url| !url.trim().is_empty()))
            .unwrap_or(file.server_url);
        let poll_interval_ms = cli_interval_ms.unwrap_or(file.poll_interval_ms);
        Config::new(server_url, poll_interval_ms)
    }

    /// Poll interval, never shorter than the allowed minimum
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(polling::MIN_INTERVAL_MS))
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
