//! Simple configuration persistence for Trovul
//!
//! Stores animation and relay preferences in `key=value` lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use trovul_field::{FieldConfig, PointerResponse};
use trovul_waitlist::DEFAULT_RELAY_ENDPOINT;

/// Environment variable overriding the relay endpoint
pub const RELAY_URL_ENV: &str = "TROVUL_RELAY_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid value {value:?} for {key}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Animation frames per second
    pub fps: u32,
    /// Fixed seed for a reproducible particle field
    pub seed: Option<u64>,
    pub particle_count: usize,
    pub pointer_response: PointerResponse,
    /// Where waitlist signups are posted
    pub relay_endpoint: String,
    /// Color theme name
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            seed: None,
            particle_count: FieldConfig::default().particle_count,
            pointer_response: PointerResponse::default(),
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            theme: "night".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    ///
    /// The relay override from the environment is applied on top and never
    /// written back.
    pub fn load() -> Self {
        let mut config = Self::load_or_create(&Self::config_path());
        config.apply_env(std::env::var(RELAY_URL_ENV).ok());
        config
    }

    /// Load config from `path`, writing the defaults there on first run
    ///
    /// A malformed file is logged and gives the defaults, leaving the file
    /// untouched for the user to fix.
    pub fn load_or_create(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                match config.save_to(path) {
                    Ok(()) => tracing::info!(path = %path.display(), "wrote default config"),
                    // Best effort, a read-only config dir still runs
                    Err(e) => tracing::warn!(path = %path.display(), "could not write config: {e}"),
                }
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.serialize())?;
        Ok(())
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trovul")
            .join("config.txt")
    }

    /// Endpoint override, ignored when blank
    fn apply_env(&mut self, relay_url: Option<String>) {
        if let Some(url) = relay_url.filter(|url| !url.trim().is_empty()) {
            self.relay_endpoint = url.trim().to_string();
        }
    }

    /// Particle field settings derived from this config
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            particle_count: self.particle_count,
            pointer_response: self.pointer_response,
            ..FieldConfig::default()
        }
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            let invalid = || ConfigError::InvalidValue {
                line: index + 1,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "fps" => {
                    config.fps = value
                        .parse()
                        .ok()
                        .filter(|fps| *fps > 0)
                        .ok_or_else(invalid)?;
                }
                "seed" => {
                    config.seed = if value.is_empty() {
                        None
                    } else {
                        Some(value.parse().map_err(|_| invalid())?)
                    };
                }
                "particle_count" => {
                    config.particle_count = value.parse().map_err(|_| invalid())?;
                }
                "pointer_response" => {
                    config.pointer_response = PointerResponse::parse(value).ok_or_else(invalid)?;
                }
                "relay_endpoint" => {
                    if !value.is_empty() {
                        config.relay_endpoint = value.to_string();
                    }
                }
                "theme" => {
                    if !value.is_empty() {
                        config.theme = value.to_string();
                    }
                }
                _ => {} // Ignore unknown keys
            }
        }

        Ok(config)
    }

    /// Serialize config to simple key=value format
    fn serialize(&self) -> String {
        let mut lines = vec![
            "# Trovul Configuration".to_string(),
            format!("fps={}", self.fps),
        ];

        if let Some(seed) = self.seed {
            lines.push(format!("seed={seed}"));
        }
        lines.push(format!("particle_count={}", self.particle_count));
        lines.push(format!("pointer_response={}", self.pointer_response.name()));
        lines.push(format!("relay_endpoint={}", self.relay_endpoint));
        lines.push(format!("theme={}", self.theme));

        lines.join("\n")
    }
}
