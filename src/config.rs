//! Formatting Configuration
//!
//! The two tokens every layout operation depends on: the newline token and
//! the indent token. A [`FormatConfig`] is a plain owned value with no
//! global state; it is captured by a [`Formatter`](crate::Formatter) at
//! construction, so concurrent formatting with different conventions is
//! just a matter of holding different configs.
//!
//! The double-newline value (used for paragraph separation between
//! generated declarations) is cached and refreshed on every newline
//! mutation.

/// Default newline token (Unix line feed).
pub const DEFAULT_NEWLINE: &str = "\n";

/// Default indent token (one horizontal tab).
pub const DEFAULT_INDENT: &str = "\t";

/// Configuration for code-layout operations.
///
/// Holds the newline token inserted at line boundaries and the indent
/// token inserted once per indentation level. Defaults are `"\n"` and
/// `"\t"`.
///
/// Mutating a config changes the output of formatting calls made after
/// the change through a formatter holding it, never strings already
/// produced (outputs are owned values, not views).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    newline: String,
    /// Derived from `newline`; refreshed on every newline mutation.
    double_newline: String,
    indent_token: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            newline: DEFAULT_NEWLINE.to_owned(),
            double_newline: DEFAULT_NEWLINE.repeat(2),
            indent_token: DEFAULT_INDENT.to_owned(),
        }
    }
}

impl FormatConfig {
    /// Create a config with the default tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with the specified newline token.
    pub fn with_newline(newline: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.set_newline(newline);
        config
    }

    /// Create a config with the specified indent token.
    pub fn with_indent_token(indent_token: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.set_indent_token(indent_token);
        config
    }

    /// Get the current newline token.
    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Get the newline token repeated twice, reflecting the most recent
    /// [`set_newline`](Self::set_newline) call.
    pub fn double_newline(&self) -> &str {
        &self.double_newline
    }

    /// Get the current indent token.
    pub fn indent_token(&self) -> &str {
        &self.indent_token
    }

    /// Set the newline token.
    ///
    /// Also refreshes the cached [`double_newline`](Self::double_newline)
    /// so the two stay consistent.
    pub fn set_newline(&mut self, newline: impl Into<String>) {
        self.newline = newline.into();
        self.double_newline = self.newline.repeat(2);
    }

    /// Set the indent token.
    pub fn set_indent_token(&mut self, indent_token: impl Into<String>) {
        self.indent_token = indent_token.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tokens() {
        let config = FormatConfig::new();
        assert_eq!(config.newline(), "\n");
        assert_eq!(config.double_newline(), "\n\n");
        assert_eq!(config.indent_token(), "\t");
    }

    #[test]
    fn set_newline_refreshes_double_newline() {
        let mut config = FormatConfig::new();
        config.set_newline("\r\n");
        assert_eq!(config.newline(), "\r\n");
        assert_eq!(config.double_newline(), "\r\n\r\n");
    }

    #[test]
    fn with_newline_constructor_keeps_cache_consistent() {
        let config = FormatConfig::with_newline("|");
        assert_eq!(config.newline(), "|");
        assert_eq!(config.double_newline(), "||");
        assert_eq!(config.indent_token(), "\t");
    }

    #[test]
    fn with_indent_token_constructor() {
        let config = FormatConfig::with_indent_token("    ");
        assert_eq!(config.indent_token(), "    ");
        assert_eq!(config.newline(), "\n");
    }

    #[test]
    fn set_indent_token_leaves_newline_untouched() {
        let mut config = FormatConfig::new();
        config.set_indent_token("  ");
        assert_eq!(config.indent_token(), "  ");
        assert_eq!(config.newline(), "\n");
        assert_eq!(config.double_newline(), "\n\n");
    }
}
