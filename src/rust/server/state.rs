//! Shared application state for the HTTP server.

use std::sync::Arc;

use crate::artifact::ArtifactStatus;
use crate::classifier::Classifier;

/// Shared state accessible by all handlers via axum's State extractor.
#[derive(Debug)]
pub struct AppState {
    pub classifier: Classifier,
    pub artifact: ArtifactStatus,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(classifier: Classifier, artifact: ArtifactStatus) -> SharedState {
        Arc::new(Self { classifier, artifact })
    }
}
