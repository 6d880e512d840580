use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intent_classifier::{Classifier, IntentDefinition, IntentTable};

fn setup_benchmark_classifier(seed: Option<u64>) -> Classifier {
    let table = IntentTable::from_json_str(
        r#"{
            "cancel_plan": ["cancelar meu plano", "quero cancelar", "encerrar assinatura"],
            "upgrade_plan": ["mudar de plano", "quero um plano melhor", "fazer upgrade"],
            "billing_question": ["minha fatura", "cobrança indevida", "segunda via do boleto"],
            "technical_support": ["não consigo acessar", "internet caiu", "está com erro"],
            "greet": ["olá", "bom dia", "boa tarde"],
            "goodbye": ["tchau", "até logo", "obrigado, era só isso"]
        }"#,
    )
    .unwrap();

    let mut builder = Classifier::builder();
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    builder.with_table(table).unwrap().build()
}

fn bench_classification(c: &mut Criterion) {
    let classifier = setup_benchmark_classifier(None);
    let mut group = c.benchmark_group("Classification");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Matches the first example of the first intent
    group.bench_function("early_match", |b| b.iter(|| {
        classifier.classify(black_box("Quero cancelar meu plano hoje"))
    }));

    // Matches only in the last intent
    group.bench_function("late_match", |b| b.iter(|| {
        classifier.classify(black_box("Obrigado, era só isso. Tchau!"))
    }));

    // Scans every example, then falls back
    group.bench_function("fallback", |b| b.iter(|| {
        classifier.classify(black_box(
            "This text does not overlap with any of the configured example phrases \
             and therefore has to scan the whole table before picking an intent at random."
        ))
    }));

    group.finish();
}

fn bench_random_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomSource");
    group.sample_size(50);

    let thread_local = setup_benchmark_classifier(None);
    group.bench_function("thread_rng", |b| b.iter(|| {
        thread_local.classify(black_box("xyz123"))
    }));

    let seeded = setup_benchmark_classifier(Some(42));
    group.bench_function("seeded_mutex", |b| b.iter(|| {
        seeded.classify(black_box("xyz123"))
    }));

    group.finish();
}

fn bench_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("TableSize");
    group.sample_size(30);

    for size in [10usize, 100, 1000] {
        let mut builder = Classifier::builder();
        for i in 0..size {
            builder = builder
                .add_intent(
                    IntentDefinition::new(format!("intent_{}", i))
                        .with_examples(vec![format!("example phrase {}", i), format!("another sample {}", i)]),
                )
                .unwrap();
        }
        let classifier = builder.build();

        group.bench_function(format!("fallback_{}_intents", size), |b| b.iter(|| {
            classifier.classify(black_box("nothing in common"))
        }));
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_random_sources, bench_table_size);
criterion_main!(benches);
