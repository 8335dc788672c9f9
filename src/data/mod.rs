//! Dataset loading pipeline
//!
//! Fetches the remote CSV resource, parses it into the typed
//! [`Dataset`](crate::types::Dataset), and delivers it to the UI thread over
//! a crossbeam channel. Each chart
//! owns its own [`DatasetHandle`]; there is no caching or sharing between
//! charts, and a failed load is fatal to that chart only.
//!
//! # Submodules
//!
//! - [`source`] - The [`DatasetSource`] trait plus HTTP and file sources
//! - [`parser`] - CSV text to dataset with schema validation
//! - [`loader`] - Background fetch thread and non-blocking UI polling

pub mod loader;
pub mod parser;
pub mod source;

pub use loader::{DatasetHandle, DatasetMessage, LoadStatus};
pub use parser::parse_dataset;
pub use source::{DatasetSource, FileCsvSource, HttpCsvSource};
