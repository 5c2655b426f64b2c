//! Formatting Context
//!
//! [`Formatter`] captures a [`FormatConfig`] and provides the layout
//! operations that depend on it: single- and multi-level indentation and
//! brace-delimited blocks.
//!
//! All operations are pure and return fresh `String`s. Both a lone `\n`
//! and a `\r\n` pair are recognized as one line boundary and rewritten to
//! the configured newline token; a lone `\r` is not a boundary and passes
//! through untouched.

use crate::config::FormatConfig;

/// Layout operations over a captured [`FormatConfig`].
///
/// # Example
///
/// ```
/// use cg_fmt::Formatter;
///
/// let fmt = Formatter::new();
/// assert_eq!(fmt.indent("a\nb"), "\ta\n\tb");
/// assert_eq!(fmt.block("a"), "{\n\ta\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a specific config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Get the captured configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Get the captured configuration for mutation.
    ///
    /// Mutations affect only calls made afterwards; strings already
    /// returned are owned values and keep the tokens they were built with.
    pub fn config_mut(&mut self) -> &mut FormatConfig {
        &mut self.config
    }

    /// Prefix `text` with one indent token and indent every interior line.
    ///
    /// Each line boundary inside `text` (a lone `\n` or a `\r\n` pair) is
    /// replaced with the configured newline token followed by one indent
    /// token.
    pub fn indent(&self, text: &str) -> String {
        let newline = self.config.newline();
        let tab = self.config.indent_token();

        let mut out = String::with_capacity(text.len() + tab.len() * 4);
        out.push_str(tab);
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_some() {
                // The '\n' consumed by the split may have been preceded by
                // '\r'; both spell the same boundary.
                out.push_str(line.strip_suffix('\r').unwrap_or(line));
                out.push_str(newline);
                out.push_str(tab);
            } else {
                out.push_str(line);
            }
        }
        out
    }

    /// Join `rows` with the configured newline token, then indent one
    /// level as [`indent`](Self::indent) does.
    ///
    /// Single-string call sites pass a one-element sequence.
    pub fn indent_lines<I, S>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.indent(&self.join_rows(rows))
    }

    /// Apply the single-level [`indent`](Self::indent) `steps` times.
    ///
    /// `steps == 0` returns the input unchanged.
    pub fn indent_by(&self, text: &str, steps: usize) -> String {
        match steps {
            0 => text.to_owned(),
            1 => self.indent(text),
            _ => self.indent(&self.indent_by(text, steps - 1)),
        }
    }

    /// Wrap `text` in a brace pair with the body indented one level:
    /// `"{" + newline + indent(text) + newline + "}"`.
    pub fn block(&self, text: &str) -> String {
        let newline = self.config.newline();
        let mut out = String::with_capacity(text.len() + newline.len() * 2 + 4);
        out.push('{');
        out.push_str(newline);
        out.push_str(&self.indent(text));
        out.push_str(newline);
        out.push('}');
        out
    }

    /// Join `rows` with the configured newline token, then wrap as
    /// [`block`](Self::block) does.
    ///
    /// The sequence is consumed exactly once; an empty sequence wraps the
    /// empty string.
    pub fn block_lines<I, S>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.block(&self.join_rows(rows))
    }

    fn join_rows<I, S>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                out.push_str(self.config.newline());
            }
            out.push_str(row.as_ref());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_single_line() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent("x"), "\tx");
    }

    #[test]
    fn indent_empty_text() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent(""), "\t");
    }

    #[test]
    fn indent_rewrites_interior_newlines() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent("a\nb\nc"), "\ta\n\tb\n\tc");
    }

    #[test]
    fn indent_treats_crlf_as_one_boundary() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent("a\r\nb"), "\ta\n\tb");
    }

    #[test]
    fn indent_keeps_lone_carriage_return() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent("a\rb"), "\ta\rb");
    }

    #[test]
    fn indent_lines_joins_with_newline_first() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent_lines(["a", "b"]), "\ta\n\tb");
        assert_eq!(fmt.indent_lines(["a"]), "\ta");
    }

    #[test]
    fn indent_by_zero_is_identity() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent_by("a\nb", 0), "a\nb");
    }

    #[test]
    fn indent_by_stacks_levels() {
        let fmt = Formatter::new();
        assert_eq!(fmt.indent_by("a\nb", 2), "\t\ta\n\t\tb");
        assert_eq!(fmt.indent_by("a", 3), "\t\t\ta");
    }

    #[test]
    fn block_wraps_and_indents() {
        let fmt = Formatter::new();
        assert_eq!(fmt.block("a"), "{\n\ta\n}");
        assert_eq!(fmt.block("a\nb"), "{\n\ta\n\tb\n}");
    }

    #[test]
    fn block_lines_joins_rows() {
        let fmt = Formatter::new();
        assert_eq!(
            fmt.block_lines(["int x = 1;", "return x;"]),
            "{\n\tint x = 1;\n\treturn x;\n}"
        );
    }

    #[test]
    fn block_lines_empty_sequence_wraps_empty_body() {
        let fmt = Formatter::new();
        let rows: [&str; 0] = [];
        assert_eq!(fmt.block_lines(rows), "{\n\t\n}");
    }

    #[test]
    fn block_lines_consumes_lazy_sequence_once() {
        let fmt = Formatter::new();
        let rows = (0..3).map(|i| format!("row{i}"));
        assert_eq!(fmt.block_lines(rows), "{\n\trow0\n\trow1\n\trow2\n}");
    }

    #[test]
    fn custom_tokens_flow_through_block() {
        let fmt = Formatter::with_config(crate::FormatConfig::with_newline("\r\n"));
        assert_eq!(fmt.block("a"), "{\r\n\ta\r\n}");

        let mut spaces = crate::FormatConfig::new();
        spaces.set_indent_token("    ");
        let fmt = Formatter::with_config(spaces);
        assert_eq!(fmt.indent("a\nb"), "    a\n    b");
    }

    #[test]
    fn config_mutation_affects_later_calls_only() {
        let mut fmt = Formatter::new();
        let before = fmt.block("a");
        fmt.config_mut().set_newline("\r\n");
        let after = fmt.block("a");

        assert_eq!(before, "{\n\ta\n}");
        assert_eq!(after, "{\r\n\ta\r\n}");
        // The earlier string is an owned value; the mutation cannot reach it.
        assert_eq!(before, "{\n\ta\n}");
    }
}
