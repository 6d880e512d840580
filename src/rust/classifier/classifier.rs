use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::Serialize;

use super::random::{fallback_confidence, match_confidence, RandomSource};
use super::table::IntentTable;

/// Intent returned when no intents are configured
pub const UNKNOWN_INTENT: &str = "unknown";

/// Confidence paired with [`UNKNOWN_INTENT`]
pub const UNKNOWN_CONFIDENCE: f64 = 0.5;

/// Which branch of the classification policy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// An example phrase overlapped the input; confidence in `[0.8, 1.0]`
    Example,
    /// Nothing matched and an intent was picked at random; confidence in `[0.5, 0.8)`
    Fallback,
    /// The table is empty; confidence is exactly `0.5`
    Unknown,
}

/// The guessed intent for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub intent: String,
    pub confidence: f64,
    pub kind: MatchKind,
}

impl ClassificationResult {
    fn unknown() -> Self {
        Self {
            intent: UNKNOWN_INTENT.to_string(),
            confidence: UNKNOWN_CONFIDENCE,
            kind: MatchKind::Unknown,
        }
    }
}

/// A thread-safe intent classifier over an immutable table of example phrases.
///
/// # Thread Safety
///
/// The table is never mutated after construction, so a single classifier can
/// be shared behind an `Arc` by any number of request handlers. A seeded
/// randomness source serializes its draws; the default one does not lock.
///
/// ```rust
/// use intent_classifier::{Classifier, IntentDefinition};
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(
///     Classifier::builder()
///         .add_intent(IntentDefinition::new("greet").with_examples(vec!["ola"]))?
///         .build(),
/// );
///
/// let classifier_clone = Arc::clone(&classifier);
/// thread::spawn(move || {
///     assert_eq!(classifier_clone.classify("Ola!").intent, "greet");
/// })
/// .join()
/// .unwrap();
/// # Ok::<(), intent_classifier::ClassifierError>(())
/// ```
#[derive(Debug)]
pub struct Classifier {
    table: IntentTable,
    // Lowercased examples, parallel to the table entries.
    lowered_examples: Vec<Vec<String>>,
    random: RandomSource,
    source_path: Option<String>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    pub(super) fn new(table: IntentTable, random: RandomSource, source_path: Option<String>) -> Self {
        let lowered_examples = table
            .iter()
            .map(|(_, examples)| examples.iter().map(|e| e.to_lowercase()).collect())
            .collect();
        Self {
            table,
            lowered_examples,
            random,
            source_path,
        }
    }

    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_intents: self.table.len(),
            intent_labels: self.table.labels().map(str::to_string).collect(),
            num_examples: self.table.num_examples(),
            source_path: self.source_path.clone(),
        }
    }

    pub fn table(&self) -> &IntentTable {
        &self.table
    }

    /// Guesses the intent of `text` using the classifier's own randomness source.
    ///
    /// Never fails: any string, including the empty one, yields a result.
    ///
    /// # Example
    /// ```rust
    /// use intent_classifier::{Classifier, IntentDefinition, MatchKind};
    ///
    /// let classifier = Classifier::builder()
    ///     .add_intent(
    ///         IntentDefinition::new("cancel_plan")
    ///             .with_examples(vec!["cancelar meu plano", "quero cancelar"]),
    ///     )?
    ///     .build();
    ///
    /// let result = classifier.classify("Quero cancelar meu plano");
    /// assert_eq!(result.intent, "cancel_plan");
    /// assert_eq!(result.kind, MatchKind::Example);
    /// assert!((0.8..=1.0).contains(&result.confidence));
    /// # Ok::<(), intent_classifier::ClassifierError>(())
    /// ```
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let result = self.random.with_rng(|rng| self.classify_with_rng(text, rng));
        debug!(
            "Classified {:?} as '{}' ({:.2}, {:?})",
            text, result.intent, result.confidence, result.kind
        );
        result
    }

    /// Guesses the intent of `text`, drawing all randomness from `rng`.
    ///
    /// 1. The first intent (in table order) with an example that contains, or
    ///    is contained in, the lowercased text wins with a high confidence.
    /// 2. Otherwise a uniformly random intent is returned with a medium confidence.
    /// 3. With an empty table the result is always `("unknown", 0.5)`.
    pub fn classify_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ClassificationResult {
        let text = text.to_lowercase();

        if let Some(intent) = self.find_match(&text) {
            return ClassificationResult {
                intent: intent.to_string(),
                confidence: match_confidence(rng),
                kind: MatchKind::Example,
            };
        }

        match self.table.labels().choose(rng) {
            Some(intent) => ClassificationResult {
                intent: intent.to_string(),
                confidence: fallback_confidence(rng),
                kind: MatchKind::Fallback,
            },
            None => ClassificationResult::unknown(),
        }
    }

    fn find_match(&self, text: &str) -> Option<&str> {
        self.table
            .labels()
            .zip(&self.lowered_examples)
            .find(|(_, examples)| {
                examples
                    .iter()
                    .any(|example| text.contains(example.as_str()) || example.contains(text))
            })
            .map(|(label, _)| label)
    }
}
