//! DatasetSource trait for unified dataset access
//!
//! This module provides a common trait for all dataset source
//! implementations, enabling both the real HTTPS source and local file
//! sources for tests and offline work.

use crate::error::Result;
use std::path::PathBuf;

/// A source of raw CSV dataset text.
///
/// `fetch` is blocking and runs on the loader thread, never on the UI
/// thread. There is no retry and no partial-result handling: a failed fetch
/// leaves the owning chart unrendered.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource: Send {
    /// Fetch the raw CSV text of the dataset
    fn fetch(&self) -> Result<String>;

    /// Human-readable description of the source, for logging
    fn describe(&self) -> String;
}

/// Fetches the dataset from a fixed public HTTPS URL.
pub struct HttpCsvSource {
    url: String,
}

impl HttpCsvSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetSource for HttpCsvSource {
    fn fetch(&self) -> Result<String> {
        // One throwaway current-thread runtime per fetch; the loader thread
        // has nothing else to do while the request is in flight.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let url = self.url.clone();
        runtime.block_on(async move {
            let response = reqwest::get(&url).await?.error_for_status()?;
            Ok(response.text().await?)
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the dataset from a local CSV file.
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileCsvSource {
    fn fetch(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
