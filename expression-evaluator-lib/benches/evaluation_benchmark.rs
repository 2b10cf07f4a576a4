use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use expression_evaluator::interpreter::calculate;
use std::collections::HashMap;

fn criterion_benchmark(c: &mut Criterion) {
    let variables = HashMap::from([
        ("a".to_string(), 10.0),
        ("b".to_string(), 20.0),
        ("x".to_string(), 3.0),
    ]);
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "1 + 2".to_string(),
        "2 + 3 * 4 - 5 / 2".to_string(),
        "1+(2^3-4)+a-b".to_string(),
        "-(x^2) + 2 * x - 7".to_string(),
        "((a + b) * (a - b)) / (x^2 + 1)".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression.to_string(), &variables));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
