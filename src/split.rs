//! String splitting driven by a caller-supplied predicate instead of a
//! fixed delimiter.
//!
//! Note the edge-case contract, which differs from [`str::split`]: the
//! empty string yields an *empty* vector (where `str::split` would yield
//! one empty segment), while leading, trailing, and adjacent delimiters
//! all yield empty segments just as `str::split` does.

/// Splits `s` at every character the predicate matches, dropping the
/// matched characters.
///
/// # Examples
///
/// ```
/// use hof::split::split_at_fn;
///
/// let parts = split_at_fn("ha-ha i-i", |c| c == ' ' || c == '-');
/// assert_eq!(parts, vec!["ha", "ha", "i", "i"]);
///
/// // Empty input is an empty vector, not a single empty segment.
/// assert_eq!(split_at_fn("", |_| true), Vec::<String>::new());
///
/// // Delimiters at the edges produce empty segments.
/// assert_eq!(split_at_fn("-a-", |c| c == '-'), vec!["", "a", ""]);
/// ```
pub fn split_at_fn<F>(s: &str, mut pred: F) -> Vec<String>
where
    F: FnMut(char) -> bool,
{
    let mut res: Vec<String> = Vec::new();

    if s.is_empty() {
        return res;
    }

    res.push(String::new());

    for c in s.chars() {
        if pred(c) {
            res.push(String::new());
        } else {
            res.last_mut().expect("res starts non-empty").push(c);
        }
    }

    res
}

/// Splits `s` at every occurrence of `split_char`.
///
/// This is [`split_at_fn`] with the delimiter captured in a closure.
///
/// # Examples
///
/// ```
/// use hof::split::split_at_char;
///
/// assert_eq!(split_at_char("ha-ha i-i", ' '), vec!["ha-ha", "i-i"]);
/// assert_eq!(split_at_char("ha-ha i-i", '-'), vec!["ha", "ha i", "i"]);
/// ```
pub fn split_at_char(s: &str, split_char: char) -> Vec<String> {
    split_at_fn(s, |c| c == split_char)
}
