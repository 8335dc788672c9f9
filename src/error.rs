//! Error handling for the MaskViz application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for MaskViz operations
#[derive(Error, Debug)]
pub enum MaskVizError {
    /// Errors raised while fetching the remote dataset
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Errors raised while parsing the dataset CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset is missing an expected column header
    #[error("Schema error: {0}")]
    Schema(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to channel communication
    #[error("Channel error: {0}")]
    Channel(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MaskVizError>,
    },
}

impl MaskVizError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MaskVizError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for MaskViz operations
pub type Result<T> = std::result::Result<T, MaskVizError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
