use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use stringkeeper::construct::StringRecord;
use stringkeeper::interpreter;
use stringkeeper::persist::{PersistenceMode, Persistor, RecordStore};
use stringkeeper::properties;

const QUERIES: [&str; 6] = [
    "all single word palindromic strings",
    "strings longer than 10 characters",
    "strings containing the letter z",
    "palindromic strings that contain the first vowel",
    "strings longer than 100 and shorter than 10",
    "xyz random text",
];

fn property_computation(c: &mut Criterion) {
    let long = "A man, a plan, a canal: Panama! ".repeat(64);
    c.bench_function("compute short", |b| b.iter(|| properties::compute(black_box("racecar"))));
    c.bench_function("compute long", |b| b.iter(|| properties::compute(black_box(&long))));
}

fn query_parsing(c: &mut Criterion) {
    c.bench_function("parse queries", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(interpreter::parse(black_box(query)));
            }
        })
    });
}

fn query_evaluation(c: &mut Criterion) {
    let store = Persistor::new(PersistenceMode::InMemory).unwrap();
    for i in 0..1_000 {
        let value = if i % 7 == 0 { format!("{i}{}", i.to_string().chars().rev().collect::<String>()) } else { format!("string number {i}") };
        store.insert_if_absent(&StringRecord::new(value)).unwrap();
    }
    c.bench_function("interpret palindromes", |b| {
        b.iter(|| interpreter::interpret(&store, black_box("all palindromic strings")).unwrap())
    });
}

criterion_group!(benches, property_computation, query_parsing, query_evaluation);
criterion_main!(benches);
