//! Token-Independent Transforms
//!
//! Text helpers that do not depend on the configured layout tokens:
//! separator joining, first-character case folds, repetition, and the
//! present/absent conditional.
//!
//! Absent inputs are represented with `Option` rather than sentinel
//! values; where an operation passes the absent case through untouched,
//! that is spelled `opt.map(...)` at the call site.

use crate::error::{FormatError, Result};

/// Concatenate `values` with `separator` between adjacent elements.
///
/// Every element must be present: a `None` anywhere in the sequence fails
/// with [`FormatError::InvalidArgument`]. An empty sequence yields the
/// empty string; a single element is returned unchanged.
///
/// # Example
///
/// ```
/// use cg_fmt::join;
///
/// let joined = join(", ", ["a", "b", "c"].map(Some))?;
/// assert_eq!(joined, "a, b, c");
/// # Ok::<(), cg_fmt::FormatError>(())
/// ```
pub fn join<I, S>(separator: &str, values: I) -> Result<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        let Some(value) = value else {
            return Err(FormatError::InvalidArgument(format!(
                "element {i} of the join sequence is absent"
            )));
        };
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(value.as_ref());
    }
    Ok(out)
}

/// Apply `transform` to the first character of `text`, keeping the rest
/// untouched.
///
/// The empty string comes back empty. `transform` may expand to more than
/// one character (Unicode case mappings do).
pub fn with_first<F>(text: &str, transform: F) -> String
where
    F: FnOnce(char) -> String,
{
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = transform(first);
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Lowercase the first character of `text`, keeping the rest untouched.
///
/// The case fold applies to the first Unicode code point only. Absent
/// input passes through at the call site: `opt.map(lower_first)`.
///
/// # Example
///
/// ```
/// use cg_fmt::lower_first;
///
/// assert_eq!(lower_first("ABC"), "aBC");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(text: &str) -> String {
    with_first(text, |first| first.to_lowercase().collect())
}

/// Uppercase the first character of `text`, keeping the rest untouched.
///
/// The case fold applies to the first Unicode code point only. Absent
/// input passes through at the call site: `opt.map(upper_first)`.
pub fn upper_first(text: &str) -> String {
    with_first(text, |first| first.to_uppercase().collect())
}

/// Repeat `text` `count` times; `count == 0` yields the empty string.
pub fn repeat(text: &str, count: usize) -> String {
    text.repeat(count)
}

/// Return `present(value)` when `value` is `Some`, otherwise `absent`.
///
/// Pure conditional over a possibly-absent value, no side effects.
pub fn if_else<T, R, F>(value: Option<T>, present: F, absent: R) -> R
where
    F: FnOnce(T) -> R,
{
    match value {
        Some(inner) => present(inner),
        None => absent,
    }
}
