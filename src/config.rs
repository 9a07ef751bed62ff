use crate::engine::{PageGeometry, DEFAULT_CHARS_PER_LINE, DEFAULT_LINES_PER_PAGE};
use crate::error::{DaybookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// The keys [`DaybookConfig::get`] and [`DaybookConfig::set`] understand.
pub const CONFIG_KEYS: &[&str] = &[
    "webhook-url",
    "chars-per-line",
    "lines-per-page",
    "timeout-secs",
];

/// Configuration for daybook, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaybookConfig {
    /// Workflow webhook to post packed pages to. Unset means packing is off.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Characters per notebook line
    #[serde(default = "default_chars_per_line")]
    pub chars_per_line: usize,

    /// Lines per notebook page
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,

    /// How long to wait for the workflow before giving up on an answer
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_chars_per_line() -> usize {
    DEFAULT_CHARS_PER_LINE
}

fn default_lines_per_page() -> usize {
    DEFAULT_LINES_PER_PAGE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn parse_dimension(key: &str, value: &str) -> std::result::Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("{} must be a positive number", key))?;
    if n == 0 {
        return Err(format!("{} must be at least 1", key));
    }
    Ok(n)
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DaybookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaybookError::Io)?;
        let config: DaybookConfig =
            serde_json::from_str(&content).map_err(DaybookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaybookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaybookError::Serialization)?;
        fs::write(config_path, content).map_err(DaybookError::Io)?;
        Ok(())
    }

    /// Set the webhook URL ("" or "none" unsets it)
    pub fn set_webhook_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() || url == "none" {
            self.webhook_url = None;
        } else {
            self.webhook_url = Some(url.to_string());
        }
    }

    /// Get a config value by CLI key name
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "webhook-url" => Some(
                self.webhook_url
                    .clone()
                    .unwrap_or_else(|| "unset".to_string()),
            ),
            "chars-per-line" => Some(self.chars_per_line.to_string()),
            "lines-per-page" => Some(self.lines_per_page.to_string()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a config value by CLI key name, validating it
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "webhook-url" => {
                let v = value.trim();
                if !v.is_empty()
                    && v != "none"
                    && !v.starts_with("http://")
                    && !v.starts_with("https://")
                {
                    return Err("webhook-url must start with http:// or https://".to_string());
                }
                self.set_webhook_url(value);
                Ok(())
            }
            "chars-per-line" => {
                self.chars_per_line = parse_dimension(key, value)?;
                Ok(())
            }
            "lines-per-page" => {
                self.lines_per_page = parse_dimension(key, value)?;
                Ok(())
            }
            "timeout-secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("{} must be a whole number of seconds", key))?;
                if secs == 0 {
                    return Err(format!("{} must be at least 1", key));
                }
                self.timeout_secs = secs;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// The page dimensions as engine geometry.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.chars_per_line, self.lines_per_page)
    }

    /// The workflow wait as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
