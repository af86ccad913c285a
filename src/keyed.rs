//! A Binary Search Tree ordered by a key-extraction function. Instead of
//! requiring stored values to be `Ord` themselves, the tree is handed a
//! pure function (its "keyer") that derives an orderable key from each
//! value, in the same spirit as [`slice::sort_by_key`].
//!
//! This is a deliberately plain BST: no rebalancing, no deletion. The one
//! unusual property worth calling out is the comparison policy shared by
//! insertion and search. Insertion routes a new value to the *right*
//! child whenever the current node's key is less than *or equal to* the
//! new value's key. The "or equal" tie-break means a duplicate key is
//! always placed in the right subtree of the earlier duplicate, so equal
//! keys form a right-leaning chain in insertion order. Search descends
//! with the same policy (equal keys stop at the topmost, i.e. earliest
//! inserted, duplicate). The two must agree: a search using plain
//! less-than against a tree built with less-than-or-equal would walk past
//! existing keys.
//!
//! # Examples
//!
//! ```
//! use hof::keyed::Tree;
//!
//! // Records keyed on their numeric id.
//! let mut tree = Tree::new(|v: &(i32, &str)| v.0);
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert((1, "one"));
//! tree.insert((-3, "minus three"));
//! tree.insert((2, "two"));
//!
//! assert_eq!(tree.search(&-3), Some(&(-3, "minus three")));
//! assert_eq!(tree.search(&42), None);
//!
//! // In-order walk yields ascending key order.
//! let mut ids = Vec::new();
//! tree.walk(|v| ids.push(v.0));
//! assert_eq!(ids, vec![-3, 1, 2]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A Binary Search Tree storing values of type `T`, ordered by the keys
/// a keyer function `F` derives from them. The tree owns its entire node
/// graph; dropping the tree drops every node.
#[derive(Clone)]
pub struct Tree<T, F> {
    root: Option<Box<Node<T>>>,
    keyer: F,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T, F> Tree<T, F> {
    /// Generates a new, empty `Tree` ordering values by the given keyer.
    ///
    /// The keyer must be pure and stable: the same value must always map
    /// to the same key, or values inserted earlier become unreachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::keyed::Tree;
    ///
    /// let mut tree = Tree::new(|s: &String| s.len());
    /// tree.insert(String::from("abc"));
    ///
    /// assert_eq!(tree.search(&3), Some(&String::from("abc")));
    /// ```
    pub fn new(keyer: F) -> Self {
        Self { root: None, keyer }
    }

    /// Returns `true` if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree.
    ///
    /// Descends from the root comparing keys: when the current node's
    /// key is less than or equal to the new value's key the value goes
    /// right, otherwise left, until an empty child slot is found. The
    /// "or equal" means inserting a duplicate key places it in the right
    /// subtree of the existing one; all values are kept, none are
    /// overwritten. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::keyed::Tree;
    ///
    /// let mut tree = Tree::new(|v: &(i32, &str)| v.0);
    /// tree.insert((1, "first"));
    /// tree.insert((1, "second"));
    ///
    /// // Both duplicates are kept; search returns the earliest.
    /// assert_eq!(tree.search(&1), Some(&(1, "first")));
    /// ```
    pub fn insert<K>(&mut self, value: T)
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        match &mut self.root {
            Some(root) => root.insert(value, &self.keyer),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// Potentially finds a value whose key equals the given key. If no
    /// value matches, `None` is returned - "not found" is the absent
    /// result, never a panic. If duplicates of the key were inserted,
    /// the earliest-inserted one is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::keyed::Tree;
    ///
    /// let mut tree = Tree::new(|v: &(i32, &str)| v.0);
    /// tree.insert((1, "one"));
    ///
    /// assert_eq!(tree.search(&1), Some(&(1, "one")));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search<K>(&self, key: &K) -> Option<&T>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.root.as_ref().and_then(|n| n.search(key, &self.keyer))
    }

    /// Walks the tree in order - left subtree, node, right subtree -
    /// invoking the visitor once per value in ascending key order.
    /// Duplicate keys are visited in insertion order. The ordering is
    /// part of the contract, not an implementation detail.
    ///
    /// The visitor borrows the tree for the whole traversal, so the
    /// borrow checker rules out mutating the tree from inside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::keyed::Tree;
    ///
    /// let mut tree = Tree::new(|v: &i32| *v);
    /// for x in [2, 3, 1] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(|v| seen.push(*v));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn walk<V>(&self, mut visitor: V)
    where
        V: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.walk(&mut visitor);
        }
    }

    /// Renders the tree's shape as one string per level, root first.
    ///
    /// Within each subtree's rendering, the left-subtree column is
    /// padded with spaces to the width of its longest entry (including
    /// the subtree's own root line) so the right-subtree column aligns;
    /// columns are separated by a single space. An empty tree renders as
    /// no lines at all, and a single node as exactly one line holding
    /// its `Display` form.
    ///
    /// This is a display aid only; nothing else depends on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::keyed::Tree;
    ///
    /// let mut tree = Tree::new(|v: &i32| *v);
    /// assert!(tree.levels().is_empty());
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.levels(), vec!["5"]);
    /// ```
    pub fn levels(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        match &self.root {
            Some(root) => root.levels(),
            None => Vec::new(),
        }
    }
}

/// Prints each level from [`levels`][Tree::levels] on its own line. An
/// empty tree prints nothing.
impl<T, F> fmt::Display for Tree<T, F>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels() {
            writeln!(f, "{}", level)?;
        }
        Ok(())
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn insert<K, F>(&mut self, value: T, keyer: &F)
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        // Less-than-or-equal routes right: duplicates always land in the
        // right subtree of the earlier duplicate. Search relies on this.
        let child = match keyer(&self.value).cmp(&keyer(&value)) {
            Ordering::Less | Ordering::Equal => &mut self.right,
            Ordering::Greater => &mut self.left,
        };

        match child {
            Some(node) => node.insert(value, keyer),
            None => *child = Some(Box::new(Node::new(value))),
        }
    }

    fn search<'a, K, F>(&'a self, key: &K, keyer: &F) -> Option<&'a T>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        match keyer(&self.value).cmp(key) {
            Ordering::Equal => Some(&self.value),
            // Same policy as insertion: key at-or-above ours lives right.
            Ordering::Less => self.right.as_ref().and_then(|n| n.search(key, keyer)),
            Ordering::Greater => self.left.as_ref().and_then(|n| n.search(key, keyer)),
        }
    }

    fn walk<V>(&self, visitor: &mut V)
    where
        V: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.walk(visitor);
        }
        visitor(&self.value);
        if let Some(right) = &self.right {
            right.walk(visitor);
        }
    }

    fn levels(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        let mut levels = vec![self.value.to_string()];

        let left_levels = self.left.as_ref().map_or_else(Vec::new, |n| n.levels());
        let right_levels = self.right.as_ref().map_or_else(Vec::new, |n| n.levels());

        // The left column is as wide as its widest entry, this node's
        // own line included.
        let left_width = left_levels
            .iter()
            .fold(levels[0].len(), |acc, l| acc.max(l.len()));

        let mut right_iter = right_levels.into_iter();

        for left in left_levels {
            let mut line = format!("{:<width$}", left, width = left_width + 1);
            if let Some(right) = right_iter.next() {
                line.push_str(&right);
                line.push(' ');
            }
            levels.push(line);
        }

        // Levels where only the right subtree is still contributing get
        // blank padding in the left column.
        for right in right_iter {
            let mut line = format!("{:<width$}", "", width = left_width + 1);
            line.push_str(&right);
            line.push(' ');
            levels.push(line);
        }

        levels
    }
}
