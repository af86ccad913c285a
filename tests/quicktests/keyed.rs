use hof::keyed::Tree;

use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

fn record_tree() -> Tree<(i8, i8), impl Fn(&(i8, i8)) -> i8> {
    Tree::new(|v: &(i8, i8)| v.0)
}

/// Applies a random smattering of inserts and searches, checking every
/// search against a hashmap. Duplicate ids keep the earliest payload in
/// both structures: the tree because search stops at the topmost
/// duplicate, the map because we only insert vacant entries.
#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = record_tree();
    let mut map: HashMap<i8, i8> = HashMap::new();

    ops.iter().all(|op| match op {
        Op::Insert(id, payload) => {
            tree.insert((*id, *payload));
            map.entry(*id).or_insert(*payload);
            true
        }
        Op::Search(id) => tree.search(id).map(|found| found.1) == map.get(id).copied(),
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = record_tree();
    for x in &xs {
        tree.insert((*x, *x));
    }

    xs.iter().all(|x| tree.search(x) == Some(&(*x, *x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = record_tree();
    for x in &xs {
        tree.insert((*x, *x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn walk_yields_sorted_keys(xs: Vec<i8>) -> bool {
    let mut tree = record_tree();
    for x in &xs {
        tree.insert((*x, *x));
    }

    let mut walked = Vec::with_capacity(xs.len());
    tree.walk(|v| walked.push(v.0));

    let mut expected = xs;
    expected.sort_unstable();

    walked == expected
}

/// Records sharing an id chain down the right subtree, so the in-order
/// walk must yield them in insertion order.
#[quickcheck]
fn walk_keeps_duplicates_in_insertion_order(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(|v: &(i8, usize)| v.0);
    for (seq, x) in xs.iter().enumerate() {
        tree.insert((*x, seq));
    }

    let mut last_seq_for_id: HashMap<i8, usize> = HashMap::new();
    let mut ordered = true;
    tree.walk(|&(id, seq)| {
        if let Some(last) = last_seq_for_id.insert(id, seq) {
            ordered &= last < seq;
        }
    });

    ordered
}

/// The first value inserted becomes the root and is never relocated, so
/// it always heads the rendering.
#[quickcheck]
fn first_insert_heads_the_rendering(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(|v: &i8| *v);
    for x in &xs {
        tree.insert(*x);
    }

    match xs.first() {
        Some(root) => tree.levels().first() == Some(&root.to_string()),
        None => tree.levels().is_empty(),
    }
}
