//! Per-call cost of the scalar functions through the registry

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use relstore_udf::{ScalarValue, create_standard_function_registry};
use std::hint::black_box;

fn bench_functions(c: &mut Criterion) {
    let registry = create_standard_function_registry();
    let document = ScalarValue::text(
        r#"{"id": 42, "name": "widget", "tags": ["a", "b", "c"], "price": 9.99, "active": true}"#,
    );

    let cases: Vec<(&str, Vec<ScalarValue>)> = vec![
        (
            "json_navigate",
            vec![document.clone(), ScalarValue::text("tags"), ScalarValue::Null],
        ),
        ("json_parse", vec![document.clone()]),
        ("base64_encode", vec![ScalarValue::text("hello world")]),
        ("base64_decode", vec![ScalarValue::text("aGVsbG8gd29ybGQ")]),
        ("reverse_string", vec![ScalarValue::text("hello wörld")]),
        ("hash_md5", vec![ScalarValue::text("hello world")]),
        ("hash_sha1", vec![ScalarValue::text("hello world")]),
        (
            "split_part",
            vec![
                ScalarValue::text("a,b;c,d;e"),
                ScalarValue::text(",;"),
                ScalarValue::Int(4),
            ],
        ),
    ];

    let mut group = c.benchmark_group("scalar_functions");
    for (name, args) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), args, |b, args| {
            b.iter(|| registry.invoke(black_box(name), black_box(args)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_functions);
criterion_main!(benches);
