//! The smallest possible higher-order function: take a function, take an
//! argument, call one with the other. The C++ version of this pattern
//! needs a `static_assert` over `std::is_invocable_r` to check the
//! callable's signature; in Rust the `FnOnce(X) -> Y` bound *is* that
//! check, enforced at the call site.

/// Applies `f` to `x`.
///
/// # Examples
///
/// ```
/// use hof::apply::apply;
///
/// fn inc(a: i32) -> i32 {
///     a + 1
/// }
///
/// assert_eq!(apply(inc, 0), 1);
/// assert_eq!(apply(|s: &str| s.len(), "four"), 4);
/// ```
pub fn apply<X, Y, F>(f: F, x: X) -> Y
where
    F: FnOnce(X) -> Y,
{
    f(x)
}
