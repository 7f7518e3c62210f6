use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use dictionaries::collections::binary_tree::TreeDictionary;
use dictionaries::collections::hash::HashDictionary;

const ENTRIES: u64 = 1_000;

/// Spreads the keys out so the tree doesn't degrade to a list.
fn scrambled_keys() -> Vec<u64> {
    (0..ENTRIES).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = scrambled_keys();

    c.bench_function("hash_insert_1k", |b| {
        b.iter(|| {
            let mut dict: HashDictionary<u64, u64> = HashDictionary::new();
            for &key in &keys {
                dict.insert(black_box(key), key);
            }
            dict
        })
    });

    c.bench_function("tree_insert_1k", |b| {
        b.iter(|| {
            let mut dict: TreeDictionary<u64, u64> = TreeDictionary::new();
            for &key in &keys {
                dict.insert(black_box(key), key);
            }
            dict
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let keys = scrambled_keys();

    let mut hash: HashDictionary<u64, u64> = HashDictionary::new();
    let mut tree: TreeDictionary<u64, u64> = TreeDictionary::new();
    for &key in &keys {
        hash.insert(key, key);
        tree.insert(key, key);
    }

    c.bench_function("hash_get_1k", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(hash.get(black_box(key)).expect("inserted above"));
            }
        })
    });

    c.bench_function("tree_get_1k", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.get(black_box(key)).expect("inserted above"));
            }
        })
    });
}

criterion_group!(benches, bench_insert, bench_get);
criterion_main!(benches);
