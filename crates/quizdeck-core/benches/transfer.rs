use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdeck_core::transfer::{export_json, import_json};

fn generate_payload(n: usize) -> String {
    let mut s = String::from("[");
    for i in 0..n {
        if i > 0 {
            s.push(',');
        }
        // Alternate string and numeric points, as real files mix both.
        let points = if i % 2 == 0 {
            format!("\"{}\"", i % 10)
        } else {
            format!("{}", i % 10)
        };
        s.push_str(&format!(
            r#"{{"id": {}, "question": "Question number {i}?", "answer": "Answer {i}", "points": {points}}}"#,
            1_700_000_000_000u64 + i as u64
        ));
    }
    s.push(']');
    s
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import_json");

    let small = generate_payload(10);
    let medium = generate_payload(200);
    let large = generate_payload(2000);

    group.bench_function("10_questions", |b| {
        b.iter(|| import_json(black_box(small.as_bytes())))
    });

    group.bench_function("200_questions", |b| {
        b.iter(|| import_json(black_box(medium.as_bytes())))
    });

    group.bench_function("2000_questions", |b| {
        b.iter(|| import_json(black_box(large.as_bytes())))
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let questions = import_json(generate_payload(200).as_bytes()).unwrap();
    c.bench_function("export_json/200_questions", |b| {
        b.iter(|| export_json(black_box(&questions)))
    });
}

criterion_group!(benches, bench_import, bench_export);
criterion_main!(benches);
