use core::time::Duration;
use std::collections::BTreeMap;

use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use treemap::{BinarySearchTree, RedBlackTree};

pub fn gen_random_keys(count: usize) -> Vec<i32> {
    let mut vec = Vec::with_capacity(count);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..count {
        vec.push(rng.gen_range(0..i32::MAX))
    }
    assert_eq!(vec.len(), count);
    vec
}

pub fn gen_ascending_keys(count: usize) -> Vec<i32> {
    let mut vec = gen_random_keys(count);
    vec.sort();
    vec
}

pub fn gen_descending_keys(count: usize) -> Vec<i32> {
    let mut vec = gen_random_keys(count);
    vec.sort_by(|a, b| b.cmp(a));
    vec
}

fn bench_insert(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    for (name, gen_func) in [
        ("random", gen_random_keys as fn(usize) -> Vec<i32>),
        ("ascending", gen_ascending_keys),
        ("descending", gen_descending_keys),
    ] {
        let mut g = c.benchmark_group(format!("insert_{}", name));
        g.plot_config(plot_config.clone());

        for count in [100, 1_000] {
            let keys = gen_func(count);

            g.bench_with_input(BenchmarkId::new("bst", count), &keys, |b, keys| {
                b.iter(|| {
                    let mut tree = BinarySearchTree::new();
                    for &key in keys {
                        tree.insert(key, key);
                    }
                    tree
                })
            });
            g.bench_with_input(BenchmarkId::new("rbt", count), &keys, |b, keys| {
                b.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for &key in keys {
                        tree.insert(key, key);
                    }
                    tree
                })
            });
            g.bench_with_input(BenchmarkId::new("std_btreemap", count), &keys, |b, keys| {
                b.iter(|| {
                    let mut tree = BTreeMap::new();
                    for &key in keys {
                        tree.insert(key, key);
                    }
                    tree
                })
            });
        }
        g.finish();
    }
}

fn bench_lookup(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut g = c.benchmark_group("lookup_random");
    g.plot_config(plot_config);

    for count in [100, 1_000, 10_000] {
        let keys = gen_random_keys(count);
        let mut access = keys.clone();
        access.shuffle(&mut ChaCha8Rng::seed_from_u64(6));

        let mut bst = BinarySearchTree::new();
        let mut rbt = RedBlackTree::new();
        let mut btree = BTreeMap::new();
        for &key in &keys {
            bst.insert(key, key);
            rbt.insert(key, key);
            btree.insert(key, key);
        }

        g.bench_with_input(BenchmarkId::new("bst", count), &access, |b, access| {
            b.iter(|| {
                let mut found = 0;
                for key in access {
                    found += bst.lookup(key).is_some() as usize;
                }
                found
            })
        });
        g.bench_with_input(BenchmarkId::new("rbt", count), &access, |b, access| {
            b.iter(|| {
                let mut found = 0;
                for key in access {
                    found += rbt.lookup(key).is_some() as usize;
                }
                found
            })
        });
        g.bench_with_input(BenchmarkId::new("std_btreemap", count), &access, |b, access| {
            b.iter(|| {
                let mut found = 0;
                for key in access {
                    found += btree.get(key).is_some() as usize;
                }
                found
            })
        });
    }
    g.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_millis(100))
        ;
    targets = bench_insert, bench_lookup
);
criterion_main!(benches);
