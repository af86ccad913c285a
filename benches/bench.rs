use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hof::keyed::Tree;

fn identity_key(v: &i32) -> i32 {
    *v
}

/// Emits `lo..=hi` midpoint-first so the unbalanced tree comes out with
/// logarithmic height. Inserting in sorted order would degenerate the
/// tree into a right chain and we'd be benching a linked list.
fn balanced_order(lo: i32, hi: i32, out: &mut Vec<i32>) {
    if lo > hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    out.push(mid);
    balanced_order(lo, mid - 1, out);
    balanced_order(mid + 1, hi, out);
}

/// Helper to bench a function on a keyed tree.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32, fn(&i32) -> i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut order = Vec::with_capacity(num_nodes as usize);
        balanced_order(0, num_nodes - 1, &mut order);

        let mut tree: Tree<i32, fn(&i32) -> i32> = Tree::new(identity_key);
        for x in order {
            tree.insert(x);
        }

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _value = black_box(tree.search(&i));
    });
    bench_helper(c, "search-miss", |tree, i| {
        let _value = black_box(tree.search(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "walk", |tree, _i| {
        let mut visited = 0u32;
        tree.walk(|_| visited += 1);
        black_box(visited);
    });
    bench_helper(c, "levels", |tree, _i| {
        let _lines = black_box(tree.levels());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
