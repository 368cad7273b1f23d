#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chained_table::ChainedHashTable;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::any,
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(i32, i32)>(), ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chained insert", |b| {
        b.iter(|| {
            let mut table = ChainedHashTable::new();
            for &(key, value) in &items {
                table.insert(key, value);
            }
            table
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &(key, value) in &items {
                map.entry(key).or_insert(value);
            }
            map
        });
    });

    let chained_table: ChainedHashTable<i32, i32> = items.iter().copied().collect();
    let rust_map: HashMap<i32, i32> = items.iter().copied().collect();
    group.bench_function("chained get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_table.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("chained contains value", |b| {
        b.iter(|| chained_table.contains(&0));
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
