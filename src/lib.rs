//! # MaskViz: COVID-19 Cases and Mask Usage Explorer
//!
//! A desktop visualization of per-state COVID-19 case counts against
//! mask-usage survey results. Three charts share one remote CSV dataset:
//! two scatter charts (cases vs deaths, cases vs mask use) and a
//! dropdown-driven bar chart of one state's survey answer breakdown.
//!
//! ## Architecture
//!
//! - **Data**: Each chart fetches and parses the dataset independently on
//!   its own loader thread, reporting back over a crossbeam channel
//! - **Chart**: Pure geometry; scales, axes, marks, legend, and callouts
//!   are computed into plain scene records with no rendering surface
//! - **Frontend**: Renders the scenes with eframe/egui inside an
//!   egui_dock workspace, one tab per chart
//!
//! ## Configuration
//!
//! Configuration and UI preferences are stored in the platform-appropriate
//! data directory under `dev.maskviz`:
//!
//! - **Linux**: `~/.local/share/dev.maskviz/`
//! - **macOS**: `~/Library/Application Support/dev.maskviz/`
//! - **Windows**: `%APPDATA%\dev.maskviz\`
//!
//! ## Example
//!
//! ```ignore
//! use maskviz::{
//!     config::{AppConfig, AppState},
//!     frontend::MaskVizApp,
//! };
//!
//! fn main() -> eframe::Result<()> {
//!     let config = AppConfig::load_or_default();
//!     let app_state = AppState::load_or_default();
//!
//!     eframe::run_native(
//!         "MaskViz",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(MaskVizApp::new(cc, config, app_state)))),
//!     )
//! }
//! ```

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use app::MaskVizApp;
pub use chart::{BarScene, ScatterMetric, ScatterScene, SelectOutcome, SelectionDriver};
pub use config::{AppConfig, AppState};
pub use data::{DatasetHandle, DatasetSource, LoadStatus};
pub use error::{MaskVizError, Result};
pub use types::{Dataset, MaskCategory, StateRecord};
