//! A from-scratch optional container with monadic composition.
//!
//! Rust of course ships [`Option`], and real code should use it. `Maybe`
//! exists to show the machinery `Option` hides: `bind` is the monadic
//! sequencing operation (Haskell's `>>=`, `Option::and_then`) and `fmap`
//! is the functor map (`Option::map`), with `fmap` derived from `bind`
//! rather than written independently.
//!
//! # Examples
//!
//! ```
//! use hof::maybe::Maybe;
//!
//! fn safe_inverse(v: f64) -> Maybe<f64> {
//!     if v == 0.0 {
//!         Maybe::Nothing
//!     } else {
//!         Maybe::Just(1.0 / v)
//!     }
//! }
//!
//! // Incrementing -1 gives 0, and its inverse is absent.
//! let m = Maybe::Just(-1.0).fmap(|v| v + 1.0).bind(safe_inverse);
//! assert_eq!(m, Maybe::Nothing);
//!
//! // Incrementing 0 gives 1, which inverts to 1.
//! let m = Maybe::Just(0.0).fmap(|v| v + 1.0).bind(safe_inverse);
//! assert_eq!(m, Maybe::Just(1.0));
//! ```

use std::fmt;

/// An optional value: either `Just` a value or `Nothing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absent value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Monadic bind: applies `f` to a present value, producing a new
    /// `Maybe`; propagates `Nothing` without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::maybe::Maybe;
    ///
    /// let half = |v: i32| {
    ///     if v % 2 == 0 {
    ///         Maybe::Just(v / 2)
    ///     } else {
    ///         Maybe::Nothing
    ///     }
    /// };
    ///
    /// assert_eq!(Maybe::Just(4).bind(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(3).bind(half), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.bind(half), Maybe::Nothing);
    /// ```
    pub fn bind<V, F>(self, f: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>,
    {
        match self {
            Self::Just(value) => f(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Functor map: applies `f` to a present value and rewraps the
    /// result; propagates `Nothing`.
    ///
    /// Derived from [`bind`][Self::bind] by rewrapping in `Just`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hof::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).fmap(|v| v + 1), Maybe::Just(2));
    /// assert_eq!(Maybe::<i32>::Nothing.fmap(|v| v + 1), Maybe::Nothing);
    /// ```
    pub fn fmap<V, F>(self, f: F) -> Maybe<V>
    where
        F: FnOnce(T) -> V,
    {
        self.bind(|value| Maybe::Just(f(value)))
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

/// Renders as `Just <value>` or `None`, matching the usual pretty form
/// of optional values.
impl<T> fmt::Display for Maybe<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(f, "Just {}", value),
            Self::Nothing => write!(f, "None"),
        }
    }
}
