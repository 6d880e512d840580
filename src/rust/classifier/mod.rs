use serde::Serialize;

mod error;
mod table;
mod random;
#[allow(clippy::module_inception)]
mod classifier;
pub mod builder;

pub use error::ClassifierError;
pub use table::IntentTable;
pub use random::RandomSource;
pub use classifier::{Classifier, ClassificationResult, MatchKind, UNKNOWN_CONFIDENCE, UNKNOWN_INTENT};
pub use builder::{ClassifierBuilder, IntentDefinition};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierInfo {
    /// Number of intents the classifier can return
    pub num_intents: usize,
    /// Labels of the intents, in scan order
    pub intent_labels: Vec<String>,
    /// Total number of example phrases
    pub num_examples: usize,
    /// File the intent table was loaded from, if any
    pub source_path: Option<String>,
}
