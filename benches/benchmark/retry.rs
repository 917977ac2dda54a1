use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use std::cell::Cell;
use std::hint::black_box;
use try_rail::Try;

pub fn bench_retry_first_attempt_succeeds(c: &mut Criterion) {
    c.bench_function("retry/first_attempt", |b| {
        b.iter(|| {
            black_box(
                Try::success(black_box(21u64)).retry(|n| Ok::<_, DomainError>(n * 2), 5),
            )
        })
    });
}

pub fn bench_retry_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("retry/exhaustion");

    for budget in [1u32, 3, 5, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| {
                black_box(Try::success(black_box(7u64)).retry(
                    |_| Err::<u64, _>(DomainError::Network("peer unreachable".to_string())),
                    budget,
                ))
            })
        });
    }
    group.finish();
}

pub fn bench_retry_succeeds_on_last_attempt(c: &mut Criterion) {
    c.bench_function("retry/last_attempt", |b| {
        b.iter(|| {
            let attempts = Cell::new(0u32);
            black_box(Try::success(black_box(3u64)).retry(
                |n| {
                    attempts.set(attempts.get() + 1);
                    if attempts.get() < 4 {
                        Err(DomainError::Network("flaky link".to_string()))
                    } else {
                        Ok(n + 1)
                    }
                },
                3,
            ))
        })
    });
}

criterion_group! {
    name = retry_benches;
    config = configure_criterion();
    targets =
        bench_retry_first_attempt_succeeds,
        bench_retry_exhaustion,
        bench_retry_succeeds_on_last_attempt,
}
