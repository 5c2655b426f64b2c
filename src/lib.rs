//! Formatting utilities for generated Java source.
//!
//! Deterministic, side-effect-free string transformations used when
//! producing source code: indentation, brace blocks, newline
//! normalization, and decomposition of fully-qualified type names.
//!
//! # Architecture
//!
//! Operations split along one line: whether they depend on the configured
//! newline and indent tokens.
//!
//! - [`config`]: the two layout tokens and the derived double-newline cache
//! - [`formatter`]: indentation and brace blocks driven by a [`FormatConfig`]
//! - [`text`]: token-independent transforms (joining, case folds, repetition)
//! - [`names`]: package/short-name extraction and file-name mapping
//! - [`error`]: failure type for the one fallible operation
//!
//! # Example
//!
//! ```
//! use cg_fmt::Formatter;
//!
//! let fmt = Formatter::new();
//! let body = fmt.block_lines(["int x = 1;", "return x;"]);
//! assert_eq!(body, "{\n\tint x = 1;\n\treturn x;\n}");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod names;
pub mod text;

pub use config::{FormatConfig, DEFAULT_INDENT, DEFAULT_NEWLINE};
pub use error::{FormatError, Result};
pub use formatter::Formatter;
pub use names::{
    file_name_to_type_name, package_name, short_name, strip_generics, type_name_to_file_name,
    JAVA_FILE_EXTENSION,
};
pub use text::{if_else, join, lower_first, repeat, upper_first, with_first};
