use std::fs;
use std::io;
use std::path::Path;
use log::{info, warn};
use serde_json::Value;

use super::error::ClassifierError;

/// An ordered, read-only mapping from intent name to its example phrases.
///
/// Iteration order is the order in which intents appear in the source file,
/// which is also the order the classifier scans them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentTable {
    entries: Vec<(String, Vec<String>)>,
}

impl IntentTable {
    /// Loads the table from a JSON file of the form
    /// `{"intent": ["example", ...], ...}`.
    ///
    /// A missing file is not an error: a warning is logged and an empty table
    /// is returned so the service stays usable with zero intents. Any other
    /// read failure, or malformed content, is returned as an error.
    ///
    /// # Example
    /// ```no_run
    /// use intent_classifier::IntentTable;
    ///
    /// let table = IntentTable::load("data/intents.json")?;
    /// println!("Loaded {} intents", table.len());
    /// # Ok::<(), intent_classifier::ClassifierError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Intent table not found at {:?}, using an empty table", path);
                return Ok(Self::default());
            }
            Err(source) => return Err(ClassifierError::Io { path: origin, source }),
        };

        let table = Self::parse(&contents, &origin)?;
        info!("Loaded {} intents ({} examples) from {:?}", table.len(), table.num_examples(), path);
        Ok(table)
    }

    /// Parses a table from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ClassifierError> {
        Self::parse(json, "<inline>")
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, ClassifierError> {
        let value: Value = serde_json::from_str(contents).map_err(|source| ClassifierError::Parse {
            path: origin.to_string(),
            source,
        })?;

        let Value::Object(map) = value else {
            return Err(ClassifierError::InvalidFormat(format!(
                "{}: expected an object mapping intent names to example lists",
                origin
            )));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (label, examples) in map {
            let examples: Vec<String> = serde_json::from_value(examples).map_err(|e| {
                ClassifierError::InvalidFormat(format!(
                    "{}: examples for intent '{}' must be a list of strings ({})",
                    origin, label, e
                ))
            })?;
            validate_intent(&label, &examples)?;
            entries.push((label, examples));
        }

        Ok(Self { entries })
    }

    pub(crate) fn from_entries(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of example phrases across all intents
    pub fn num_examples(&self) -> usize {
        self.entries.iter().map(|(_, examples)| examples.len()).sum()
    }

    /// Intent names in table order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Example phrases for `label`, if the intent exists
    pub fn examples(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, examples)| examples.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(label, examples)| (label.as_str(), examples.as_slice()))
    }
}

/// Checks a single intent definition.
///
/// Intent names must be non-empty because they are returned verbatim to
/// callers. Empty examples are allowed but match every input, so they are
/// reported.
pub(crate) fn validate_intent(label: &str, examples: &[String]) -> Result<(), ClassifierError> {
    if label.is_empty() {
        return Err(ClassifierError::ValidationError("Intent label cannot be empty".into()));
    }
    if let Some(pos) = examples.iter().position(|e| e.is_empty()) {
        warn!(
            "Example {} of intent '{}' is empty and will match every input",
            pos + 1,
            label
        );
    }
    Ok(())
}
