//! A small HTTP service that guesses the intent behind a piece of text.
//!
//! Intents are described by example phrases. An input that overlaps one of the
//! examples (case-insensitively, in either direction of containment) gets that
//! intent with a high confidence; anything else gets a randomly chosen intent
//! with a medium confidence. There is no model behind it.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intent_classifier::{Classifier, IntentDefinition, IntentTable};
//!
//! let table = IntentTable::from_json_str(
//!     r#"{"cancel_plan": ["cancelar meu plano", "quero cancelar"]}"#,
//! )?;
//! let classifier = Classifier::builder().with_table(table)?.build();
//!
//! let result = classifier.classify("Quero cancelar meu plano");
//! println!("{} ({:.2})", result.intent, result.confidence);
//!
//! // Intents can also be added one at a time
//! let classifier = Classifier::builder()
//!     .add_intent(IntentDefinition::new("greet").with_examples(vec!["ola", "bom dia"]))?
//!     .with_seed(42)
//!     .build();
//! assert_eq!(classifier.classify("Bom dia!").intent, "greet");
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! A built [`Classifier`] is immutable and `Send + Sync`; the server shares a
//! single instance across all request handlers through an `Arc`.

pub mod classifier;
pub mod artifact;
pub mod config;
pub mod server;

pub use classifier::{
    ClassificationResult, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo,
    IntentDefinition, IntentTable, MatchKind, RandomSource, UNKNOWN_CONFIDENCE, UNKNOWN_INTENT,
};
pub use artifact::{ArtifactError, ArtifactManager, ArtifactStatus};
pub use config::ServerConfig;

/// Initializes `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
