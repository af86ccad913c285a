//! Runs each higher-order-function demonstration once, printing the
//! results. All the interesting code lives in the library; this binary
//! only sequences fixed inputs through it.

use std::fmt;

use hof::apply::apply;
use hof::keyed::Tree;
use hof::maybe::Maybe;
use hof::split::{split_at_char, split_at_fn};
use hof::vector::{fmap, foldl};

/// A record with an orderable id and a human-readable label, to show
/// that the tree orders by derived key rather than by the value itself.
struct Labeled {
    id: i32,
    label: &'static str,
}

impl fmt::Display for Labeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.label)
    }
}

fn inc(a: i32) -> i32 {
    a + 1
}

fn safe_inverse(v: f64) -> Maybe<f64> {
    if v == 0.0 {
        Maybe::Nothing
    } else {
        Maybe::Just(1.0 / v)
    }
}

fn apply_demo() {
    println!("== apply ==");
    println!("{}", apply(inc, 0));
    println!();
}

fn split_demo() {
    println!("== split ==");
    let line = "ha-ha i-i";

    for parts in [
        split_at_fn(line, |c| c == ' ' || c == '-'),
        split_at_char(line, ' '),
        split_at_char(line, '-'),
    ] {
        let quoted = fmap(&parts, |s| format!("{:?}", s));
        println!("{}", quoted.join(", "));
    }
    println!();
}

fn maybe_demo() {
    println!("== maybe ==");
    for start in [0.0, -1.0] {
        let m = Maybe::Just(start).fmap(|v| v + 1.0).bind(safe_inverse);
        println!("{}", m);
    }
    println!();
}

fn vector_demo() {
    println!("== vector ==");
    let data: [f64; 5] = [0.2, 2.0, 4.0, 5.0, 2.0];

    let inverses = fmap(&data, |v| 1.0 / v);
    let rendered = fmap(&inverses, |v| v.to_string());
    println!("{}", rendered.join(" "));

    let min = foldl(inverses[0], &inverses, |acc, v| acc.min(*v));
    println!("min: {}", min);

    let sum = foldl(0.0, &inverses, |acc, v| acc + v);
    println!("sum: {}", sum);
    println!();
}

fn keyed_demo() {
    println!("== keyed ==");
    let mut tree = Tree::new(|v: &Labeled| v.id);

    let records = [
        (0, "A"),
        (-1, "B"),
        (1, "C"),
        (5, "D"),
        (2, "E"),
        (-3, "F"),
        (6, "G"),
    ];
    for (id, label) in records {
        tree.insert(Labeled { id, label });
    }

    // Tree shape first, then the records in ascending id order.
    print!("{}", tree);
    println!();
    tree.walk(|v| println!("{}", v));
}

fn main() {
    apply_demo();
    split_demo();
    maybe_demo();
    vector_demo();
    keyed_demo();
}
