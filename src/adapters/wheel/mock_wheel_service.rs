//! Mock Wheel Service for testing.
//!
//! Outcomes are queued and consumed in order; once the queue is empty every
//! submission succeeds with a generated path. Submitted entry lists and
//! deleted paths are recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let wheel = MockWheelService::new().with_failure(500);
//! let result = wheel.submit(&["Hausu".to_string()]).await;
//! assert!(matches!(result, Err(WheelServiceError::Status(500))));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{SharedWheel, WheelService, WheelServiceError};

/// Mock wheel service for testing.
#[derive(Debug, Clone, Default)]
pub struct MockWheelService {
    outcomes: Arc<Mutex<VecDeque<Result<String, WheelServiceError>>>>,
    shared: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<Vec<String>>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    failing_deletes: Arc<Mutex<Vec<String>>>,
}

impl MockWheelService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful submission returning `path`.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        self.push(Ok(path.into()));
        self
    }

    /// Queue a submission rejected with an HTTP status.
    pub fn with_failure(self, status: u16) -> Self {
        self.push(Err(WheelServiceError::Status(status)));
        self
    }

    /// Queue an arbitrary submission error.
    pub fn with_error(self, error: WheelServiceError) -> Self {
        self.push(Err(error));
        self
    }

    /// Pre-populate the account's shared wheels.
    pub fn with_shared(self, paths: &[&str]) -> Self {
        self.shared
            .lock()
            .unwrap()
            .extend(paths.iter().map(|p| p.to_string()));
        self
    }

    /// Make deleting `path` fail.
    pub fn with_failing_delete(self, path: impl Into<String>) -> Self {
        self.failing_deletes.lock().unwrap().push(path.into());
        self
    }

    fn push(&self, outcome: Result<String, WheelServiceError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Entry lists passed to `submit`, in call order.
    pub fn submissions(&self) -> Vec<Vec<String>> {
        self.submissions.lock().unwrap().clone()
    }

    /// Paths successfully deleted, in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl WheelService for MockWheelService {
    async fn submit(&self, entries: &[String]) -> Result<SharedWheel, WheelServiceError> {
        self.submissions.lock().unwrap().push(entries.to_vec());

        let outcome = self.outcomes.lock().unwrap().pop_front();
        let path = match outcome {
            Some(outcome) => outcome?,
            None => format!("wheel-{}", self.submissions.lock().unwrap().len()),
        };

        self.shared.lock().unwrap().push(path.clone());
        Ok(SharedWheel { path })
    }

    async fn list_shared(&self) -> Result<Vec<SharedWheel>, WheelServiceError> {
        Ok(self
            .shared
            .lock()
            .unwrap()
            .iter()
            .map(|path| SharedWheel { path: path.clone() })
            .collect())
    }

    async fn delete(&self, path: &str) -> Result<(), WheelServiceError> {
        if self.failing_deletes.lock().unwrap().iter().any(|p| p == path) {
            return Err(WheelServiceError::Status(404));
        }
        self.shared.lock().unwrap().retain(|p| p != path);
        self.deleted.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn share_url(&self, wheel: &SharedWheel) -> String {
        format!("https://wheelofnames.com/{}", wheel.path)
    }
}
