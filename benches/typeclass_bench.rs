//! Benchmark for derived type class instances.
//!
//! Compares dictionary-based instances against hand-written equivalents to
//! evaluate the cost of the closure indirection.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kindred::instances::VecKind;
use kindred::product_struct;
use kindred::typeclass::{NonEmptyTuple, Order, OrderKind, Product, Semigroup, SemigroupKind};
use std::hint::black_box;

#[derive(Debug, Clone)]
struct Account {
    owner: String,
    balance: i64,
    active: bool,
}

fn accounts(size: usize) -> Vec<Account> {
    (0..size)
        .map(|index| Account {
            owner: format!("owner-{}", index % 97),
            balance: i64::try_from(index * 7919 % 1000).unwrap_or_default(),
            active: index % 3 == 0,
        })
        .collect()
}

fn empty_account() -> Account {
    Account {
        owner: String::new(),
        balance: 0,
        active: false,
    }
}

// =============================================================================
// Semigroup Benchmarks
// =============================================================================

fn benchmark_combine_many(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combine_many");
    let semigroup = Semigroup::<i64>::sum();

    for size in [10_i64, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();
        group.throughput(Throughput::Elements(size.unsigned_abs()));

        group.bench_with_input(BenchmarkId::new("semigroup_sum", size), &values, |bencher, values| {
            bencher.iter(|| black_box(semigroup.combine_many(0, values.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("manual_fold", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().fold(0_i64, |left, right| left + right)));
        });
    }

    group.finish();
}

fn benchmark_struct_semigroup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("struct_semigroup");
    let values = accounts(1_000);

    let semigroup = product_struct!(SemigroupKind => Account {
        owner: Semigroup::string(),
        balance: Semigroup::sum(),
        active: Semigroup::boolean_any(),
    });

    group.bench_function("product_struct", |bencher| {
        bencher.iter(|| black_box(semigroup.combine_many(empty_account(), values.iter().cloned())));
    });

    group.bench_function("manual", |bencher| {
        bencher.iter(|| {
            black_box(values.iter().cloned().fold(empty_account(), |mut left, right| {
                left.owner.push_str(&right.owner);
                left.balance += right.balance;
                left.active = left.active || right.active;
                left
            }))
        });
    });

    group.finish();
}

// =============================================================================
// Order Benchmarks
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");
    let values = accounts(1_000);

    let struct_order = product_struct!(OrderKind => Account {
        owner: Order::string(),
        balance: Order::<i64>::number().reverse(),
        active: Order::boolean(),
    });
    let tuple_order = (Order::<String>::string(), Order::<i64>::number().reverse()).tuple();

    group.bench_function("product_struct_order", |bencher| {
        bencher.iter(|| {
            let mut sorted = values.clone();
            sorted.sort_by(|left, right| struct_order.compare(left, right));
            black_box(sorted)
        });
    });

    group.bench_function("tuple_order", |bencher| {
        bencher.iter(|| {
            let mut sorted: Vec<(String, i64)> = values
                .iter()
                .map(|account| (account.owner.clone(), account.balance))
                .collect();
            sorted.sort_by(|left, right| tuple_order.compare(left, right));
            black_box(sorted)
        });
    });

    group.bench_function("manual_cmp", |bencher| {
        bencher.iter(|| {
            let mut sorted = values.clone();
            sorted.sort_by(|left, right| {
                left.owner
                    .cmp(&right.owner)
                    .then_with(|| right.balance.cmp(&left.balance))
                    .then_with(|| left.active.cmp(&right.active))
            });
            black_box(sorted)
        });
    });

    group.finish();
}

// =============================================================================
// Product Benchmarks
// =============================================================================

fn benchmark_vec_product_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_product_all");

    for width in [2_usize, 4, 6] {
        let inputs: Vec<Vec<u8>> = (0..width).map(|_| vec![0, 1, 2]).collect();
        group.bench_with_input(BenchmarkId::new("product_all", width), &inputs, |bencher, inputs| {
            bencher.iter(|| black_box(VecKind::product_all(inputs.clone())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_combine_many,
    benchmark_struct_semigroup,
    benchmark_sort,
    benchmark_vec_product_all,
);

criterion_main!(benches);
