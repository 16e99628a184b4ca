use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use splaywood::SplayTree;
use std::collections::BTreeMap;
use std::ops::Range;

fn bench_baseline_multi_insertions(data: Vec<usize>) {
    let mut tree = BTreeMap::new();

    for i in data {
        tree.insert(i, i);
    }
}

fn bench_multi_insertions(data: Vec<usize>) {
    let mut tree = SplayTree::new();

    for i in data {
        tree.insert(i, i);
    }
}

fn bench_multi_insertions_hint(data: Vec<usize>) {
    let mut tree = SplayTree::with_capacity(data.len());

    for i in data {
        tree.insert(i, i);
    }
}

fn init_large_btree() -> BTreeMap<usize, usize> {
    random_insertion_order().into_iter().map(|i| (i, i)).collect()
}

fn init_large_splay_tree() -> SplayTree<usize, usize> {
    random_insertion_order().into_iter().map(|i| (i, i)).collect()
}

fn random_insertion_order() -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let mut indices: Vec<usize> = (0..100000).collect();

    indices.shuffle(&mut rng);

    indices
}

fn init_random_data(count: usize, range_opt: Option<Range<usize>>) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let range = range_opt.unwrap_or(0..100000);
    let range = rand::distributions::Uniform::new(range.start, range.end);

    (0..count).map(|_| rng.sample(&range)).collect()
}

/// Lookups concentrated on a small hot set, where splaying pays off.
fn init_skewed_data(count: usize) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let hot: Vec<usize> = init_random_data(64, None);

    (0..count)
        .map(|_| *hot.choose(&mut rng).unwrap_or(&0))
        .collect()
}

fn bench_baseline_random_lookups(tree: BTreeMap<usize, usize>, indices: Vec<usize>) {
    for idx in indices {
        assert!(tree.contains_key(&idx));
    }
}

fn bench_random_lookups(mut tree: SplayTree<usize, usize>, indices: Vec<usize>) {
    for idx in indices {
        assert!(tree.contains_key(&idx));
    }
}

fn bench_baseline_random_deletions(mut tree: BTreeMap<usize, usize>, indices: Vec<usize>) {
    for idx in indices {
        tree.remove(&idx);
    }
}

fn bench_random_deletions(mut tree: SplayTree<usize, usize>, indices: Vec<usize>) {
    for idx in indices {
        tree.remove(&idx);
    }
}

fn inorder_iteration(tree: SplayTree<usize, usize>) {
    for (i, (&key, _)) in tree.iter().enumerate() {
        assert_eq!(i, key);
    }
}

fn inorder_iteration_btree(tree: BTreeMap<usize, usize>) {
    for (i, &key) in tree.keys().enumerate() {
        assert_eq!(i, key);
    }
}

fn splay_tree_benchmark(c: &mut Criterion) {
    c.bench_function("baseline tree 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            bench_baseline_multi_insertions,
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            bench_multi_insertions,
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree 100K insertions with size hint", |b| {
        b.iter_batched(
            random_insertion_order,
            bench_multi_insertions_hint,
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree random lookups", |b| {
        b.iter_batched(
            || (init_large_btree(), init_random_data(5000, None)),
            |(tree, indices)| bench_baseline_random_lookups(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree random lookups", |b| {
        b.iter_batched(
            || (init_large_splay_tree(), init_random_data(5000, None)),
            |(tree, indices)| bench_random_lookups(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree skewed lookups", |b| {
        b.iter_batched(
            || (init_large_btree(), init_skewed_data(5000)),
            |(tree, indices)| bench_baseline_random_lookups(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree skewed lookups", |b| {
        b.iter_batched(
            || (init_large_splay_tree(), init_skewed_data(5000)),
            |(tree, indices)| bench_random_lookups(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree random deletions", |b| {
        b.iter_batched(
            || (init_large_btree(), init_random_data(5000, None)),
            |(tree, indices)| bench_baseline_random_deletions(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree random deletions", |b| {
        b.iter_batched(
            || (init_large_splay_tree(), init_random_data(5000, None)),
            |(tree, indices)| bench_random_deletions(tree, indices),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("tree inorder iteration", |b| {
        b.iter_batched(
            init_large_splay_tree,
            inorder_iteration,
            BatchSize::LargeInput,
        )
    });

    c.bench_function("baseline tree inorder iteration", |b| {
        b.iter_batched(
            init_large_btree,
            inorder_iteration_btree,
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, splay_tree_benchmark);
criterion_main!(benches);
