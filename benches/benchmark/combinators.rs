use crate::common::{check_stock, configure_criterion, fetch_order, reserve_quota, Order};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use try_rail::Try;

pub fn bench_map_chain(c: &mut Criterion) {
    c.bench_function("combinators/map_chain", |b| {
        b.iter(|| {
            black_box(
                Try::success(black_box(17u64))
                    .map(|n| n + 1)
                    .map(|n| n * 3)
                    .map(|n| n.to_string())
                    .map(|s| s.len()),
            )
        })
    });
}

pub fn bench_and_then_chain(c: &mut Criterion) {
    c.bench_function("combinators/and_then_success_path", |b| {
        b.iter(|| {
            black_box(
                Try::of(|| fetch_order(black_box(42)))
                    .and_then(|order| Try::of(|| check_stock(order)))
                    .and_then(|order| Try::of(|| reserve_quota(order)))
                    .map(|order| order.total()),
            )
        })
    });

    c.bench_function("combinators/and_then_short_circuit", |b| {
        b.iter(|| {
            black_box(
                Try::of(|| fetch_order(black_box(100)))
                    .and_then(|order| Try::of(|| check_stock(order)))
                    .and_then(|order| Try::of(|| reserve_quota(order)))
                    .map(|order| order.total()),
            )
        })
    });
}

pub fn bench_filter(c: &mut Criterion) {
    let order = Order::new(7);

    c.bench_function("combinators/filter_pass", |b| {
        b.iter(|| black_box(Try::success(order.clone()).filter(|o| o.quantity > 0)))
    });

    c.bench_function("combinators/filter_reject", |b| {
        b.iter(|| black_box(Try::success(order.clone()).filter(|o| o.quantity > 100)))
    });
}

pub fn bench_recovery(c: &mut Criterion) {
    c.bench_function("combinators/recover", |b| {
        b.iter(|| {
            let result = Try::of(|| fetch_order(black_box(100)));
            black_box(result.recover(|_| Order::new(0)))
        })
    });

    c.bench_function("combinators/or_else", |b| {
        b.iter(|| {
            let result = Try::of(|| fetch_order(black_box(100)));
            black_box(result.or_else(|| Try::of(|| fetch_order(1))))
        })
    });
}

pub fn bench_annotate(c: &mut Criterion) {
    c.bench_function("combinators/annotate_failure", |b| {
        b.iter(|| {
            let result = Try::of(|| fetch_order(black_box(100)));
            black_box(result.annotate("loading order for checkout"))
        })
    });

    c.bench_function("combinators/annotate_success_noop", |b| {
        b.iter(|| {
            let result = Try::of(|| fetch_order(black_box(42)));
            black_box(result.annotate("loading order for checkout"))
        })
    });
}

pub fn bench_transform(c: &mut Criterion) {
    c.bench_function("combinators/transform", |b| {
        b.iter(|| {
            let result = Try::of(|| fetch_order(black_box(42)));
            black_box(result.transform(
                |order| Try::success(order.total()),
                |error| Try::failure(error),
            ))
        })
    });
}

criterion_group! {
    name = combinator_benches;
    config = configure_criterion();
    targets =
        bench_map_chain,
        bench_and_then_chain,
        bench_filter,
        bench_recovery,
        bench_annotate,
        bench_transform,
}
