//! MaskViz - Main Entry Point
//!
//! Desktop visualization of COVID-19 case counts against mask-usage survey
//! results, one chart per dockable pane.

use anyhow::Context;
use maskviz::config::{self, AppConfig, AppState};
use maskviz::frontend::MaskVizApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up console logging plus a daily-rotated log file in the app data
/// directory. Returns the appender guard that must outlive the app.
fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = config::ensure_app_data_dir().context("resolving log directory")?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "maskviz.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,maskviz=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

fn main() -> eframe::Result<()> {
    let _log_guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            // Fall back to console-only logging rather than refusing to start.
            eprintln!("Failed to set up file logging: {e:#}");
            tracing_subscriber::registry()
                .with(EnvFilter::new("info,maskviz=debug"))
                .with(tracing_subscriber::fmt::layer())
                .init();
            None
        }
    };

    tracing::info!("Starting MaskViz");

    let config = AppConfig::load_or_default();
    let app_state = AppState::load_or_default();
    tracing::info!(dataset_url = %config.dataset_url, "configuration loaded");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("MaskViz"),
        ..Default::default()
    };

    eframe::run_native(
        "MaskViz",
        native_options,
        Box::new(|cc| Ok(Box::new(MaskVizApp::new(cc, config, app_state)))),
    )
}
