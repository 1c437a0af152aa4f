//! # Conduit Envelope Benchmarks
//!
//! The gate sits on every send and every delivery, and a fresh id is
//! drawn for every construction, so both must stay well under the
//! microsecond range.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use conduit_tests::fixtures::{client_response_address, method_address, payload, TTL};
use conduit_transport::{
    build_failed_response_message, build_response_message, check_valid, AttributesBuilder,
};
use conduit_types::{Envelope, MessageId, Priority, StatusCode};

fn request_envelope() -> Envelope {
    Envelope::new(
        AttributesBuilder::request(
            client_response_address(),
            method_address(),
            Priority::High,
            TTL,
        )
        .build(),
        Some(payload()),
    )
}

fn bench_id_generation(c: &mut Criterion) {
    c.bench_function("id_generate", |b| b.iter(|| black_box(MessageId::generate())));
}

fn bench_validation_gate(c: &mut Criterion) {
    let request = request_envelope();
    c.bench_function("gate_check_valid_request", |b| {
        b.iter(|| black_box(check_valid(request.clone()).unwrap()))
    });
}

fn bench_response_synthesis(c: &mut Criterion) {
    let request = request_envelope();
    let mut group = c.benchmark_group("response_synthesis");
    group.bench_function("build_response_message", |b| {
        b.iter(|| black_box(build_response_message(&request, payload())))
    });
    group.bench_function("build_failed_response_message", |b| {
        b.iter(|| {
            black_box(build_failed_response_message(
                &request,
                StatusCode::DeadlineExceeded,
            ))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_id_generation,
    bench_validation_gate,
    bench_response_synthesis
);
criterion_main!(benches);
