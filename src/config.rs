//! Configuration for the viewer core.
//!
//! This module provides serialization and deserialization of viewer
//! settings. The crate never touches storage itself: configuration stops
//! at JSON strings, and where they live (a file, localStorage, nothing)
//! is the host's concern.

use serde::{Deserialize, Serialize};

use crate::constants::{layout, transition, zoom};
use crate::controller::ControllerOptions;
use crate::keybindings::KeyBindings;

/// Log level setting for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Viewer configuration that can be exported and imported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Scale multiplier/divisor per zoom step, must be > 1
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,

    /// Pan step for keyboard moves (pixels)
    #[serde(default = "default_key_move_step")]
    pub key_move_step: f32,

    /// Transition duration the host should animate zoom steps with
    /// (milliseconds)
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,

    /// Fraction of the window the host layout reserves on each side of
    /// the viewport, must be in `[0, 0.5)`
    #[serde(default = "default_window_margin_fraction")]
    pub window_margin_fraction: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_scale_factor() -> f32 {
    zoom::FACTOR
}

fn default_key_move_step() -> f32 {
    zoom::PAN_STEP
}

fn default_transition_duration_ms() -> u64 {
    transition::DURATION_MS
}

fn default_window_margin_fraction() -> f32 {
    layout::WINDOW_MARGIN_FRACTION
}

impl ViewerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            scale_factor: default_scale_factor(),
            key_move_step: default_key_move_step(),
            transition_duration_ms: default_transition_duration_ms(),
            window_margin_fraction: default_window_margin_fraction(),
            log_level: LogLevel::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// The controller tuning carried by this config.
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            scale_factor: self.scale_factor,
            key_move_step: self.key_move_step,
            window_margin_fraction: self.window_margin_fraction,
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the numeric settings for values the interaction math cannot
    /// work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "scale_factor",
                value: self.scale_factor,
            });
        }
        if !self.key_move_step.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "key_move_step",
                value: self.key_move_step,
            });
        }
        if !(self.window_margin_fraction.is_finite()
            && (0.0..0.5).contains(&self.window_margin_fraction))
        {
            return Err(ConfigError::InvalidValue {
                field: "window_margin_fraction",
                value: self.window_margin_fraction,
            });
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A numeric setting outside the range the interaction math accepts
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}
