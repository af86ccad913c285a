//! This crate is a sampler of higher-order-function (HOF) patterns
//! expressed with Rust generics, mostly for educational purposes.
//!
//! ## Higher-Order Functions
//!
//! A higher-order function is a function that takes another function as
//! an argument (or returns one). In Rust these show up as generic
//! parameters bounded by the closure traits: `FnOnce` for functions
//! called at most once, `FnMut` for functions that may mutate captured
//! state, and `Fn` for functions callable any number of times through a
//! shared reference. Each module here demonstrates one pattern:
//!
//! - [`apply`] passes a function as a plain value.
//! - [`vector`] builds mapping and folding on top of a visitor.
//! - [`split`] drives string splitting with a caller-supplied predicate.
//! - [`maybe`] composes computations over an optional value with
//!   monadic `bind` and `fmap`.
//! - [`keyed`] stores records in a Binary Search Tree ordered by an
//!   injected key-extraction function.
//!
//! The tree in [`keyed`] is the only module with real data-structure
//! content. It is a deliberately plain, unbalanced BST: insertion and
//! search share a single "less-than-or-equal routes right" comparison
//! policy (see the module docs for why that tie-break matters), there is
//! no deletion and no rebalancing, and the whole node graph is owned
//! through recursive `Box` links so dropping the tree drops every node.

#![deny(missing_docs)]

pub mod apply;
pub mod keyed;
pub mod maybe;
pub mod split;
pub mod vector;
