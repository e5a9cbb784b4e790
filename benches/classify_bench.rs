use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mobival::{MobileClassifier, TerritoryRecord};

use phonenumber::{self as rlp, country::Id::{self, AE, DE, GB, KZ, SA, US}};

type TestEntity = (&'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        // domestic shortcut
        ("055 123 4567", SA),
        ("+966 55 123 4567", SA),
        ("+1 415 555 2671", US),
        ("+44 7912 345678", GB),
        ("+49 1512 3456789", DE),
        ("+7 701 234 5678", KZ),
        ("+971 50 123 4567", AE),
        // rejected by the shape check
        ("not a number", SA),
    ]
}

fn setup_classifier() -> MobileClassifier {
    let records = vec![
        TerritoryRecord::new("SA", "966").with_mobile(r"5\d{8}", "9"),
        TerritoryRecord::new("US", "1").with_mobile(r"[2-9]\d{2}[2-9]\d{6}", "10"),
        TerritoryRecord::new("RU", "7").with_mobile(r"9\d{9}", "10"),
        TerritoryRecord::new("KZ", "7")
            .with_mobile(r"7(?:0[0-2578]|47|6[02-4]|7[15-8]|85)\d{7}", "10"),
        TerritoryRecord::new("GB", "44").with_mobile(r"7(?:[1-57-9]\d\d|624)\d{6}", "10"),
        TerritoryRecord::new("DE", "49")
            .with_mobile(r"15[0-25-9]\d{8}|1(?:6[023]|7\d)\d{7,8}", "[10-11]"),
        TerritoryRecord::new("AE", "971").with_mobile(r"5[024-68]\d{7}", "9"),
    ];
    MobileClassifier::from_source(&records).expect("Benchmark metadata should be valid")
}

fn classify_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let numbers = setup_numbers();
    let classifier = setup_classifier();

    let mut group = c.benchmark_group("Classification Comparison");

    group.bench_function("mobival: classify()", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                let _ = black_box(classifier.classify(black_box(number)));
            }
        })
    });

    // Full parse + validation, much more work but the closest equivalent.
    group.bench_function("rust-phonenumber: parse() + is_valid()", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                if let Ok(parsed) = rlp::parse(black_box(Some(*region)), black_box(number)) {
                    black_box(rlp::is_valid(&parsed));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
