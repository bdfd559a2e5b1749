// Criterion benchmarks for Hello Service

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hello_service::core::{GetHelloMessageByNameUseCase, GetHelloMessageUseCase, HelloMessageService};
use hello_service::models::Name;
use hello_service::services::HelloMessageServiceImpl;
use std::sync::Arc;

fn service() -> Arc<dyn HelloMessageService> {
    Arc::new(HelloMessageServiceImpl::new())
}

fn bench_default_greeting(c: &mut Criterion) {
    let use_case = GetHelloMessageUseCase::new(service());

    c.bench_function("get_hello_message", |b| {
        b.iter(|| black_box(use_case.execute()));
    });
}

fn bench_named_greeting(c: &mut Criterion) {
    let use_case = GetHelloMessageByNameUseCase::new(service());

    let mut group = c.benchmark_group("get_hello_message_by_name");

    for name_len in [0usize, 8, 64, 1024].iter() {
        let name = Name::new("a".repeat(*name_len));

        group.bench_with_input(BenchmarkId::new("execute", name_len), &name, |b, name| {
            b.iter(|| black_box(use_case.execute(black_box(name))));
        });
    }

    group.finish();
}

fn bench_message_serialization(c: &mut Criterion) {
    let message = GetHelloMessageByNameUseCase::new(service()).execute(&Name::from("Ada"));

    c.bench_function("message_to_json", |b| {
        b.iter(|| serde_json::to_vec(black_box(&message)));
    });
}

criterion_group!(
    benches,
    bench_default_greeting,
    bench_named_greeting,
    bench_message_serialization
);

criterion_main!(benches);
