use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timequiz_core::parser::{parse_questions_str, validate_questions};

fn bench_parse_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_questions");
    let source = PathBuf::from("bench.csv");

    let small = "5+5,10\n7+3,10\n1+1,2\n8+3,11\n1+2,3\n";

    let quoted = {
        let mut s = String::new();
        for i in 0..100 {
            s.push_str(&format!("\"what is {i}, doubled\",\"{}\"\n", i * 2));
        }
        s
    };

    let large = {
        let mut s = String::new();
        for i in 0..5_000 {
            s.push_str(&format!("{i}+{i},{}\n", i + i));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| parse_questions_str(black_box(small), &source))
    });

    group.bench_function("quoted_100", |b| {
        b.iter(|| parse_questions_str(black_box(&quoted), &source))
    });

    group.bench_function("large_5000", |b| {
        b.iter(|| parse_questions_str(black_box(&large), &source))
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut csv = String::new();
    for i in 0..5_000 {
        csv.push_str(&format!("q{},{}\n", i % 4_000, i));
    }
    let set = parse_questions_str(&csv, &PathBuf::from("bench.csv")).unwrap();

    c.bench_function("validate_5000", |b| {
        b.iter(|| validate_questions(black_box(&set)))
    });
}

criterion_group!(benches, bench_parse_questions, bench_validate);
criterion_main!(benches);
