//! Benchmarks for the scan-based contract operations.
//!
//! `query_user` has no index by user, so its cost tracks the total number of
//! records rather than the number of matches. These benches make that visible.
//!
//! ```bash
//! cargo bench -p hashfile-contract
//! cargo bench -p hashfile-contract -- query_user
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashfile_contract::{HashFileContract, testutil::make_file};
use hashfile_storage::MemoryBackend;
use tokio::runtime::Runtime;

/// Every tenth record belongs to `target`; the rest are spread over other users.
async fn setup_contract(num_records: usize) -> HashFileContract<MemoryBackend> {
    let contract = HashFileContract::new(MemoryBackend::new());
    let files: Vec<_> = (0..num_records)
        .map(|i| {
            let user = if i % 10 == 0 { "target".to_owned() } else { format!("user-{}", i % 97) };
            make_file(&user, i)
        })
        .collect();
    contract.init_ledger(&files).await.expect("seed");
    contract
}

fn bench_query_user(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("query_user");

    for size in [100, 1_000, 10_000] {
        let contract = rt.block_on(setup_contract(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.to_async(&rt).iter(|| async { black_box(contract.query_user("target").await.unwrap()) });
        });
    }

    group.finish();
}

fn bench_query_all(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("query_all_hash_file");

    for size in [100, 1_000, 10_000] {
        let contract = rt.block_on(setup_contract(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.to_async(&rt).iter(|| async { black_box(contract.query_all_hash_file().await.unwrap()) });
        });
    }

    group.finish();
}

fn bench_point_query(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let contract = rt.block_on(setup_contract(10_000));

    c.bench_function("query_file/10000", |b| {
        b.to_async(&rt).iter(|| async { black_box(contract.query_file("5000").await.unwrap()) });
    });
}

criterion_group!(benches, bench_query_user, bench_query_all, bench_point_query);
criterion_main!(benches);
