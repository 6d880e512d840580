use intent_classifier::{Classifier, ClassifierError, IntentDefinition, IntentTable, MatchKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;

fn classifier_from_json(json: &str) -> Result<Classifier, ClassifierError> {
    let table = IntentTable::from_json_str(json)?;
    Ok(Classifier::builder().with_table(table)?.build())
}

fn setup_test_classifier() -> Classifier {
    classifier_from_json(
        r#"{
            "cancel_plan": ["cancelar meu plano", "quero cancelar"],
            "greet": ["ola", "bom dia"],
            "bye": ["tchau"]
        }"#,
    )
    .expect("Failed to create classifier")
}

#[test]
fn test_end_to_end_match() -> Result<(), ClassifierError> {
    let classifier = classifier_from_json(
        r#"{"cancel_plan": ["cancelar meu plano", "quero cancelar"]}"#,
    )?;

    let result = classifier.classify("Quero cancelar meu plano");
    assert_eq!(result.intent, "cancel_plan");
    assert!((0.8..=1.0).contains(&result.confidence));
    Ok(())
}

#[test]
fn test_end_to_end_fallback() -> Result<(), ClassifierError> {
    let classifier = classifier_from_json(r#"{"greet": ["ola"], "bye": ["tchau"]}"#)?;

    for _ in 0..100 {
        let result = classifier.classify("xyz123");
        assert!(result.intent == "greet" || result.intent == "bye");
        assert!((0.5..0.8).contains(&result.confidence), "got {}", result.confidence);
        assert_eq!(result.kind, MatchKind::Fallback);
    }
    Ok(())
}

#[test]
fn test_end_to_end_empty_table() -> Result<(), ClassifierError> {
    let classifier = classifier_from_json("{}")?;
    let result = classifier.classify("");
    assert_eq!(result.intent, "unknown");
    assert_eq!(result.confidence, 0.5);
    assert_eq!(result.kind, MatchKind::Unknown);
    Ok(())
}

#[test]
fn test_case_insensitive_both_directions() {
    let classifier = setup_test_classifier();

    // example inside text
    assert_eq!(classifier.classify("TCHAU, até amanhã").intent, "bye");
    // text inside example
    assert_eq!(classifier.classify("Meu Plano").intent, "cancel_plan");
}

#[test]
fn test_fallback_covers_every_intent() {
    let classifier = setup_test_classifier();
    let mut rng = StdRng::seed_from_u64(1234);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..300 {
        let result = classifier.classify_with_rng("zzz no overlap zzz", &mut rng);
        assert_eq!(result.kind, MatchKind::Fallback);
        seen.insert(result.intent);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_result_structure() {
    let classifier = setup_test_classifier();
    for text in ["", " ", "ola", "???", "x", "Quero cancelar meu plano agora", "日本語のテキスト"] {
        let result = classifier.classify(text);
        assert!(!result.intent.is_empty());
        assert!((0.0..=1.0).contains(&result.confidence));
    }
}

#[test]
fn test_seeded_classifiers_agree() -> Result<(), ClassifierError> {
    let build = |seed| -> Result<Classifier, ClassifierError> {
        Ok(Classifier::builder()
            .with_seed(seed)
            .add_intent(IntentDefinition::new("greet").with_examples(vec!["ola"]))?
            .add_intent(IntentDefinition::new("bye").with_examples(vec!["tchau"]))?
            .build())
    };
    let a = build(99)?;
    let b = build(99)?;

    for text in ["ola", "nothing", "tchau", "another miss"] {
        assert_eq!(a.classify(text), b.classify(text));
    }
    Ok(())
}

#[test]
fn test_thread_safety() {
    let classifier = Arc::new(setup_test_classifier());
    let mut handles = vec![];

    for _ in 0..3 {
        let classifier = Arc::clone(&classifier);
        let handle = thread::spawn(move || {
            let result = classifier.classify("bom dia");
            assert_eq!(result.intent, "greet");
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
