//! TOML configuration for the host application.
//!
//! Example file:
//!
//! ```toml
//! log_level = "info"
//!
//! [tablet]
//! event_source = "/dev/input/event1"
//! pressure_threshold = 1000
//!
//! [screen]
//! width = 1920
//! height = 1080
//! offset_x = 0
//! offset_y = 0
//!
//! [behavior]
//! orientation = "right"
//! drag = true
//! rate_limit_ms = 16
//! debug_events = false
//! ```
//!
//! Every field has a default so a missing file or a partial file works; the
//! defaults match the stock digitizer hardware.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use penrelay_core::domain::scaler::{DEFAULT_TABLET_HEIGHT, DEFAULT_TABLET_WIDTH};
use penrelay_core::Orientation;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub tablet: TabletConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// The event-producing device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabletConfig {
    /// Where the raw record stream comes from: a path, or `"-"` for stdin
    /// (the usual arrangement when the stream is piped in over a remote
    /// shell).
    #[serde(default = "default_event_source")]
    pub event_source: String,
    /// Maximum X coordinate of the digitizer.  Probably don't change this.
    #[serde(default = "default_tablet_width")]
    pub width: i32,
    /// Maximum Y coordinate of the digitizer.  Probably don't change this.
    #[serde(default = "default_tablet_height")]
    pub height: i32,
    /// Pressure value above which contact counts as a click.  1000 is the
    /// point where the pen physically touches the surface; raise it to
    /// require more pressure.
    #[serde(default = "default_pressure_threshold")]
    pub pressure_threshold: i32,
}

/// The area of the host screen confining the pointer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    /// Width in pixels.  Absent means: ask the pointer driver.
    #[serde(default)]
    pub width: Option<i32>,
    /// Height in pixels.  Absent means: ask the pointer driver.
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
}

/// Pipeline behavior switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    /// Physical orientation of the tablet: `right`, `left`, or `vertical`.
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    /// Emit drags instead of moves while the pen is pressed.
    #[serde(default = "default_true")]
    pub drag: bool,
    /// Minimum interval between same-kind gesture changes, in milliseconds.
    /// Absent disables rate limiting.
    #[serde(default)]
    pub rate_limit_ms: Option<u64>,
    /// Stream raw hardware events as JSON instead of acting as a pointer.
    #[serde(default)]
    pub debug_events: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tablet: TabletConfig::default(),
            screen: ScreenConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for TabletConfig {
    fn default() -> Self {
        Self {
            event_source: default_event_source(),
            width: default_tablet_width(),
            height: default_tablet_height(),
            pressure_threshold: default_pressure_threshold(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            drag: default_true(),
            rate_limit_ms: None,
            debug_events: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_event_source() -> String {
    "-".to_string()
}

fn default_tablet_width() -> i32 {
    DEFAULT_TABLET_WIDTH
}

fn default_tablet_height() -> i32 {
    DEFAULT_TABLET_HEIGHT
}

fn default_pressure_threshold() -> i32 {
    1000
}

fn default_orientation() -> Orientation {
    Orientation::Right
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Loads the configuration from `path`.  A missing file yields the
    /// defaults; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        Ok(toml::from_str(&text)?)
    }
}
