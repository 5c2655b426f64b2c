//! Type-Name Decomposition
//!
//! Helpers for pulling apart fully-qualified Java type names: short name,
//! package name, generics/array stripping, and the mapping between dotted
//! type names and source-file paths.

/// File extension of a Java source file, including the leading dot.
pub const JAVA_FILE_EXTENSION: &str = ".java";

/// Remove the generics and array decorations of a class name.
///
/// Truncates at the first `<`, then re-scans the truncated result and
/// truncates at the first `[`.
///
/// # Example
///
/// ```
/// use cg_fmt::strip_generics;
///
/// assert_eq!(strip_generics("List<String>"), "List");
/// assert_eq!(strip_generics("int[]"), "int");
/// assert_eq!(strip_generics("Map<K,V>[]"), "Map");
/// ```
pub fn strip_generics(class_name: &str) -> &str {
    let name = match class_name.find('<') {
        Some(at) => &class_name[..at],
        None => class_name,
    };
    match name.find('[') {
        Some(at) => &name[..at],
        None => name,
    }
}

/// The trailing component of a dotted name: everything after the last `.`.
///
/// The nested-type separator `$` counts as a `.`. The last `.` is located
/// in the generics-stripped form of the name, but the cut is applied to
/// the full name, so a generic suffix survives into the short name.
/// A name with no `.` is already short and comes back unchanged.
///
/// # Example
///
/// ```
/// use cg_fmt::short_name;
///
/// assert_eq!(short_name("com.foo.Bar"), "Bar");
/// assert_eq!(short_name("com.foo.Outer$Inner"), "Inner");
/// assert_eq!(short_name("com.foo.Map<K,V>"), "Map<K,V>");
/// assert_eq!(short_name("Bar"), "Bar");
/// ```
pub fn short_name(long_name: &str) -> String {
    let name = long_name.replace('$', ".");
    if name.contains('.') {
        let cut = strip_generics(&name).rfind('.').map_or(0, |at| at + 1);
        name[cut..].to_owned()
    } else {
        name
    }
}

/// The package part of a dotted name: everything before the last `.`.
///
/// Returns `None` when the name contains no `.`.
pub fn package_name(long_name: &str) -> Option<&str> {
    long_name.rfind('.').map(|at| &long_name[..at])
}

/// Map a source-file path to a fully-qualified type name.
///
/// Returns `Some` only when `file_name` ends with
/// [`JAVA_FILE_EXTENSION`]: the extension is stripped and both path
/// separators (`/` and `\`) become `.`.
///
/// # Example
///
/// ```
/// use cg_fmt::file_name_to_type_name;
///
/// assert_eq!(
///     file_name_to_type_name("com/foo/Bar.java").as_deref(),
///     Some("com.foo.Bar")
/// );
/// assert_eq!(file_name_to_type_name("Bar.txt"), None);
/// ```
pub fn file_name_to_type_name(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(JAVA_FILE_EXTENSION)
        .map(|stem| stem.replace(['/', '\\'], "."))
}

/// Map a fully-qualified type name to its source-file path.
///
/// Replaces `.` with `/` and appends [`JAVA_FILE_EXTENSION`]. Inverse of
/// [`file_name_to_type_name`] for well-formed names; malformed input is
/// not guaranteed to round-trip.
pub fn type_name_to_file_name(long_name: &str) -> String {
    let mut file_name = long_name.replace('.', "/");
    file_name.push_str(JAVA_FILE_EXTENSION);
    file_name
}
