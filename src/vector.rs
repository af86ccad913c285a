//! Visitor-driven slice operations. `walk` is the primitive; `fmap` and
//! `foldl` are layered on top of it by handing `walk` a closure that
//! captures the output being built. This mirrors how `map` and `fold`
//! reduce to iteration in any language with closures.

/// Visits every element of `data` in order with the side-effecting
/// visitor `f`.
///
/// # Examples
///
/// ```
/// use hof::vector::walk;
///
/// let mut total = 0;
/// walk(&[1, 2, 3], |x| total += x);
/// assert_eq!(total, 6);
/// ```
pub fn walk<T, F>(data: &[T], mut f: F)
where
    F: FnMut(&T),
{
    for value in data {
        f(value);
    }
}

/// Maps `f` over `data`, collecting the results into a new `Vec` of the
/// same length and order.
///
/// # Examples
///
/// ```
/// use hof::vector::fmap;
///
/// let doubled = fmap(&[1, 2, 3], |x| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn fmap<T, V, F>(data: &[T], mut f: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    let mut out = Vec::with_capacity(data.len());
    walk(data, |value| out.push(f(value)));
    out
}

/// Folds `data` from the left, starting from `init`.
///
/// The combining function takes the accumulator by reference and returns
/// the next accumulator value.
///
/// # Examples
///
/// ```
/// use hof::vector::foldl;
///
/// let sum = foldl(0.0, &[0.5, 1.5, 2.0], |acc, x| acc + x);
/// assert_eq!(sum, 4.0);
/// ```
pub fn foldl<T, V, F>(init: V, data: &[T], mut f: F) -> V
where
    F: FnMut(&V, &T) -> V,
{
    let mut acc = init;
    walk(data, |value| acc = f(&acc, value));
    acc
}
