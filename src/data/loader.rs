//! Background dataset loading
//!
//! One loader thread per chart: fetch, parse, send a single message, exit.
//! The UI polls the channel non-blocking once per frame. There is no retry
//! and no cancellation; dropping the handle orphans an in-flight fetch,
//! whose send then fails harmlessly.

use crossbeam_channel::{bounded, Receiver};

use crate::data::parser::parse_dataset;
use crate::data::source::DatasetSource;
use crate::types::Dataset;

/// Message delivered by a loader thread
#[derive(Debug)]
pub enum DatasetMessage {
    Loaded(Dataset),
    Failed(String),
}

/// Load lifecycle of one chart's dataset
#[derive(Debug, Clone, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready(Dataset),
    Failed(String),
}

/// Handle to one chart's background dataset load.
pub struct DatasetHandle {
    receiver: Receiver<DatasetMessage>,
    status: LoadStatus,
}

impl DatasetHandle {
    /// Spawn a loader thread for the given source.
    pub fn spawn(source: Box<dyn DatasetSource>) -> Self {
        let (tx, rx) = bounded(1);

        std::thread::spawn(move || {
            tracing::info!(source = %source.describe(), "fetching dataset");
            let message = match source.fetch().and_then(|text| parse_dataset(&text)) {
                Ok(dataset) => {
                    tracing::info!(records = dataset.len(), "dataset loaded");
                    DatasetMessage::Loaded(dataset)
                }
                Err(e) => {
                    tracing::error!(error = %e, "dataset load failed");
                    DatasetMessage::Failed(e.to_string())
                }
            };
            // The handle may already be gone if the chart was torn down.
            let _ = tx.send(message);
        });

        Self {
            receiver: rx,
            status: LoadStatus::Loading,
        }
    }

    /// Non-blocking poll; folds a delivered message into the status.
    pub fn poll(&mut self) -> &LoadStatus {
        if matches!(self.status, LoadStatus::Loading) {
            if let Ok(message) = self.receiver.try_recv() {
                self.status = match message {
                    DatasetMessage::Loaded(dataset) => LoadStatus::Ready(dataset),
                    DatasetMessage::Failed(error) => LoadStatus::Failed(error),
                };
            }
        }
        &self.status
    }

    /// Current status without polling the channel
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The loaded dataset, if the fetch has completed successfully
    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.status {
            LoadStatus::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::MockDatasetSource;
    use crate::error::MaskVizError;
    use std::time::{Duration, Instant};

    const FIXTURE_CSV: &str = "\
state,State Code,Region,cases,deaths,Mask Use,Population,ALWAYS,FREQUENTLY,SOMETIMES,RARELY,NEVER
Texas,TX,South,500000,9500,350000,29000000,0.5,0.2,0.15,0.1,0.05
";

    fn poll_until_settled(handle: &mut DatasetHandle) -> LoadStatus {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if !matches!(handle.poll(), LoadStatus::Loading) {
                return handle.status().clone();
            }
            assert!(Instant::now() < deadline, "loader never settled");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_successful_load() {
        let mut source = MockDatasetSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch()
            .returning(|| Ok(FIXTURE_CSV.to_string()));

        let mut handle = DatasetHandle::spawn(Box::new(source));
        let status = poll_until_settled(&mut handle);

        match status {
            LoadStatus::Ready(dataset) => {
                assert_eq!(dataset.len(), 1);
                assert!(dataset.find_state("Texas").is_some());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
        assert!(handle.dataset().is_some());
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let mut source = MockDatasetSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch()
            .returning(|| Err(MaskVizError::Channel("offline".to_string())));

        let mut handle = DatasetHandle::spawn(Box::new(source));
        let status = poll_until_settled(&mut handle);

        match status {
            LoadStatus::Failed(message) => assert!(message.contains("offline")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(handle.dataset().is_none());
    }

    #[test]
    fn test_malformed_resource_fails_load() {
        let mut source = MockDatasetSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch()
            .returning(|| Ok("not,a,mask,dataset\n1,2,3,4\n".to_string()));

        let mut handle = DatasetHandle::spawn(Box::new(source));
        let status = poll_until_settled(&mut handle);
        assert!(matches!(status, LoadStatus::Failed(_)));
    }
}
