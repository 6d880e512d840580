use std::path::Path;
use log::{debug, info};

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::random::RandomSource;
use super::table::{validate_intent, IntentTable};

/// An intent label together with the example phrases that identify it
#[derive(Debug, Clone)]
pub struct IntentDefinition {
    /// The unique identifier for the intent, returned verbatim by the classifier
    pub label: String,
    /// Example phrases matched against input text by substring overlap.
    /// An intent without examples can still be chosen by the random fallback.
    pub examples: Vec<String>,
}

impl IntentDefinition {
    /// Creates a new intent definition with no examples
    ///
    /// # Example
    /// ```
    /// use intent_classifier::IntentDefinition;
    ///
    /// let intent = IntentDefinition::new("cancel_plan");
    /// assert!(intent.examples.is_empty());
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            examples: Vec::new(),
        }
    }

    /// Adds examples to the intent definition
    ///
    /// # Example
    /// ```
    /// use intent_classifier::IntentDefinition;
    ///
    /// let intent = IntentDefinition::new("cancel_plan")
    ///     .with_examples(vec!["cancelar meu plano", "quero cancelar"]);
    /// assert_eq!(intent.examples.len(), 2);
    /// ```
    pub fn with_examples(mut self, examples: Vec<impl Into<String>>) -> Self {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    intents: Vec<(String, Vec<String>)>,
    source_path: Option<String>,
    random_source: RandomSource,
}

impl ClassifierBuilder {
    /// Creates an empty builder that draws from the thread-local generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the randomness source used for confidences and fallbacks
    pub fn with_random_source(mut self, source: RandomSource) -> Self {
        self.random_source = source;
        self
    }

    /// Uses a seeded generator so that results are reproducible
    ///
    /// # Example
    /// ```
    /// use intent_classifier::{Classifier, IntentDefinition};
    ///
    /// let build = || {
    ///     Classifier::builder()
    ///         .with_seed(7)
    ///         .add_intent(IntentDefinition::new("greet").with_examples(vec!["ola"]))
    ///         .map(|b| b.build())
    /// };
    /// let a = build()?.classify("ola, tudo bem?");
    /// let b = build()?.classify("ola, tudo bem?");
    /// assert_eq!(a, b);
    /// # Ok::<(), intent_classifier::ClassifierError>(())
    /// ```
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_random_source(RandomSource::seeded(seed))
    }

    /// Adds every intent of a loaded table, in table order
    pub fn with_table(mut self, table: IntentTable) -> Result<Self, ClassifierError> {
        for (label, examples) in table.iter() {
            self = self.add_intent(IntentDefinition {
                label: label.to_string(),
                examples: examples.to_vec(),
            })?;
        }
        Ok(self)
    }

    /// Loads a table from `path` (see [`IntentTable::load`]) and adds its intents
    pub fn with_table_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let table = IntentTable::load(path)?;
        self.source_path = Some(path.display().to_string());
        self.with_table(table)
    }

    /// Adds an intent after the ones already registered
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The intent label is empty
    ///   - An intent with the same label was already added
    pub fn add_intent(mut self, intent: IntentDefinition) -> Result<Self, ClassifierError> {
        validate_intent(&intent.label, &intent.examples)?;

        if self.intents.iter().any(|(label, _)| *label == intent.label) {
            return Err(ClassifierError::ValidationError(format!(
                "Intent '{}' is defined more than once",
                intent.label
            )));
        }

        debug!("Adding intent '{}' with {} examples", intent.label, intent.examples.len());
        self.intents.push((intent.label, intent.examples));
        Ok(self)
    }

    /// Builds the classifier.
    ///
    /// Building with no intents is allowed; such a classifier always answers
    /// with the `"unknown"` sentinel.
    pub fn build(self) -> Classifier {
        let table = IntentTable::from_entries(self.intents);
        info!(
            "Classifier ready with {} intents and {} examples",
            table.len(),
            table.num_examples()
        );
        Classifier::new(table, self.random_source, self.source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_intent() {
        let result = ClassifierBuilder::new()
            .add_intent(IntentDefinition::new("greet").with_examples(vec!["ola"]))
            .and_then(|b| b.add_intent(IntentDefinition::new("greet").with_examples(vec!["oi"])));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_empty_label() {
        let result = ClassifierBuilder::new().add_intent(IntentDefinition::new(""));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_with_table_keeps_order() -> Result<(), ClassifierError> {
        let table = IntentTable::from_json_str(r#"{"b": ["x"], "a": ["y"]}"#)?;
        let classifier = ClassifierBuilder::new()
            .add_intent(IntentDefinition::new("c"))?
            .with_table(table)?
            .build();
        assert_eq!(classifier.info().intent_labels, vec!["c", "b", "a"]);
        Ok(())
    }

    #[test]
    fn test_with_table_rejects_overlap() -> Result<(), ClassifierError> {
        let table = IntentTable::from_json_str(r#"{"greet": ["ola"]}"#)?;
        let result = ClassifierBuilder::new()
            .add_intent(IntentDefinition::new("greet"))?
            .with_table(table);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_with_missing_table_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("intents.json");
        let classifier = ClassifierBuilder::new().with_table_file(&path)?.build();
        let info = classifier.info();
        assert_eq!(info.num_intents, 0);
        assert_eq!(info.source_path.as_deref(), Some(path.display().to_string().as_str()));
        Ok(())
    }
}
