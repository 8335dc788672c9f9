//! Configuration module for MaskViz
//!
//! This module handles application configuration including:
//! - The chart configuration file (`config.toml`): dataset URL, canvas
//!   geometry, scale domains, and cosmetic timings
//! - Persistent application state (`app_state.json`): UI preferences that
//!   survive across sessions
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.maskviz/`
//! - **macOS**: `~/Library/Application Support/dev.maskviz/`
//! - **Windows**: `%APPDATA%\dev.maskviz\`
//!
//! The bar chart's selection is deliberately *not* persisted: it starts
//! unselected every run and only becomes meaningful once the selection
//! control first changes.

use crate::error::{MaskVizError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.maskviz";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Chart configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Public dataset correlating per-state case counts with mask-usage survey results
pub const DEFAULT_DATASET_URL: &str = "https://amche101.github.io/data/mask_case.csv";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        MaskVizError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            MaskVizError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the chart configuration file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== Chart Configuration ====================

/// Margins around a chart's plotting area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Total horizontal margin
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Geometry and encoding parameters shared by the three charts.
///
/// Scale domains are fixed literals tuned to the observed data ranges, the
/// same way the source visualization pins them; only the population radius
/// scale derives its domain from the loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer canvas width in pixels (margins included)
    pub canvas_width: f32,
    /// Outer canvas height in pixels (margins included)
    pub canvas_height: f32,
    /// Margins for the two scatter charts
    pub scatter_margins: Margins,
    /// Margins for the bar chart
    pub bar_margins: Margins,
    /// Circle radius range mapped from the population extent
    pub radius_range: (f32, f32),
    /// Log-scale case-count domain; values at or below zero are undefined
    pub cases_domain: (f64, f64),
    /// Linear deaths domain for the cases-vs-deaths chart
    pub deaths_domain: (f64, f64),
    /// Linear mask-use domain for the cases-vs-mask-use chart
    pub mask_use_domain: (f64, f64),
    /// Cosmetic bar growth duration in seconds
    pub bar_growth_secs: f32,
    /// Tooltip fade-in duration in seconds
    pub tooltip_fade_in_secs: f32,
    /// Tooltip fade-out duration in seconds (slower than fade-in)
    pub tooltip_fade_out_secs: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1500.0,
            canvas_height: 1000.0,
            scatter_margins: Margins {
                top: 10.0,
                right: 10.0,
                bottom: 50.0,
                left: 100.0,
            },
            bar_margins: Margins {
                top: 10.0,
                right: 10.0,
                bottom: 50.0,
                left: 10.0,
            },
            radius_range: (10.0, 25.0),
            cases_domain: (5_000.0, 2_500_000.0),
            deaths_domain: (-5_000.0, 50_000.0),
            mask_use_domain: (-50_000.0, 750_000.0),
            bar_growth_secs: 1.0,
            tooltip_fade_in_secs: 0.2,
            tooltip_fade_out_secs: 0.5,
        }
    }
}

impl ChartConfig {
    /// Inner plotting width for the scatter charts
    pub fn scatter_width(&self) -> f32 {
        self.canvas_width - self.scatter_margins.horizontal()
    }

    /// Inner plotting height for the scatter charts
    pub fn scatter_height(&self) -> f32 {
        self.canvas_height - self.scatter_margins.vertical()
    }

    /// Inner plotting width for the bar chart
    pub fn bar_width(&self) -> f32 {
        self.canvas_width - self.bar_margins.horizontal()
    }

    /// Inner plotting height for the bar chart
    pub fn bar_height(&self) -> f32 {
        self.canvas_height - self.bar_margins.vertical()
    }
}

/// Top-level application configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the remote CSV dataset; every chart fetches it independently
    pub dataset_url: String,
    /// Chart geometry and encoding parameters
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from the app data directory, falling back to
    /// defaults when the file is missing or malformed.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
                Self::default()
            }
        }
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| MaskVizError::Config(format!("Failed to parse {:?}: {}", path, e)))
    }

    /// Save the configuration to the app data directory
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(CONFIG_FILE))
    }

    /// Save the configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| MaskVizError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

// ==================== App State ====================

/// Persistent application state
///
/// Stores user preferences that persist across sessions, separate from the
/// chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Version for future migration support
    pub version: u32,
    /// Whether the UI uses the dark theme
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            dark_mode: true,
        }
    }
}

impl AppState {
    /// Load app state from the app data directory, or defaults
    pub fn load_or_default() -> Self {
        let Some(path) = app_state_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(state) => state,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Failed to load app state from {:?}: {}", path, e);
                }
                Self::default()
            }
        }
    }

    /// Load app state from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| MaskVizError::Config(format!("Failed to parse {:?}: {}", path, e)))
    }

    /// Save app state to the app data directory
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| MaskVizError::Config(format!("Failed to serialize app state: {}", e)))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
