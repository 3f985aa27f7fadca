use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizgate_core::scoring::Scorer;
use quizgate_core::text::{count_syllables, flesch_kincaid_grade};

const SHORT: &str = "Too short";

const TYPICAL: &str = "I think the plan is good. We can see it work in the town where we live. \
    The kids play in the park each day and the shops are full. People walk to work and ride \
    bikes. It is a calm and safe place. I like it a lot and I hope it stays this way for a long \
    time to come for all of us.";

const DENSE: &str = "Comprehensive institutional accountability necessitates transparent \
    organizational communication regarding departmental responsibilities and interdisciplinary \
    collaboration throughout the entire evaluation period including quarterly budgetary \
    reconciliation procedures and administrative documentation requirements";

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let scorer = Scorer::default();

    group.bench_function("too_short", |b| {
        b.iter(|| scorer.evaluate(black_box(SHORT)))
    });

    group.bench_function("typical", |b| {
        b.iter(|| scorer.evaluate(black_box(TYPICAL)))
    });

    group.bench_function("dense", |b| b.iter(|| scorer.evaluate(black_box(DENSE))));

    let long = TYPICAL.repeat(40);
    group.bench_function("long_essay", |b| {
        b.iter(|| scorer.evaluate(black_box(&long)))
    });

    group.finish();
}

fn bench_signals(c: &mut Criterion) {
    let mut group = c.benchmark_group("signals");

    group.bench_function("syllables", |b| {
        b.iter(|| count_syllables(black_box("interdisciplinary")))
    });

    group.bench_function("grade", |b| {
        b.iter(|| flesch_kincaid_grade(black_box(TYPICAL)))
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_signals);
criterion_main!(benches);
