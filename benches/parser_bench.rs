use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value;
use shallow_json::{parse_str, Scanner};

// A flat object in the dialect both parsers accept.
const FLAT_JSON: &str = r#"{"name": "Babbage", "age": 30, "city": "London", "id": 1815, "title": "Analytical Engine operator", "room": 42}"#;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flat Object Parsing");

    group.bench_function("shallow_json::parse_str", |b| {
        b.iter(|| {
            let _ = parse_str(black_box(FLAT_JSON)).unwrap();
        })
    });

    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| {
            let _: Value = serde_json::from_str(black_box(FLAT_JSON)).unwrap();
        })
    });

    group.finish();
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scanning Only");

    group.bench_function("Scanner::scan", |b| {
        b.iter(|| {
            let _ = Scanner::new(black_box(FLAT_JSON)).scan().unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_scanning);
criterion_main!(benches);
