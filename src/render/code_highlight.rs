//! Syntax highlighting adapter using syntect.
//!
//! Diff hunks are highlighted with the grammar matching the commented file's
//! extension, falling back to the unified-diff grammar, and finally to plain
//! text when highlighting fails.

use std::path::Path;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};
use thiserror::Error;

/// Language hint used when a path has no extension.
pub const DIFF_LANGUAGE: &str = "diff";

const THEME_NAME: &str = "base16-ocean.dark";
const ANSI_RESET: &str = "\x1b[0m";

/// Errors that can occur during syntax highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// No syntax definition found for the language hint or the diff fallback.
    #[error("no syntax found for language: {language}")]
    NoSyntaxFound {
        /// The language hint that could not be matched.
        language: String,
    },
    /// Syntect internal error during highlighting.
    #[error("highlighting failed: {message}")]
    HighlightFailed {
        /// Description of the failure.
        message: String,
    },
}

/// Returns the language hint for a file path: its extension, or `diff`.
///
/// ```
/// use pr_comments::render::code_highlight::language_hint;
///
/// assert_eq!(language_hint("src/main.rs"), "rs");
/// assert_eq!(language_hint("Makefile"), "diff");
/// ```
#[must_use]
pub fn language_hint(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .filter(|extension| !extension.is_empty())
        .unwrap_or(DIFF_LANGUAGE)
}

/// Code highlighter holding syntect's default syntaxes and themes.
#[derive(Debug)]
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter {
    /// Creates a new highlighter with default syntax and theme sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Highlights a diff hunk for the file at `path`, returning the hunk
    /// unchanged when highlighting is not possible.
    #[must_use]
    pub fn highlight_or_plain(&self, code: &str, path: &str) -> String {
        self.highlight(code, language_hint(path))
            .unwrap_or_else(|error| {
                tracing::debug!("falling back to plain diff context: {error}");
                code.to_owned()
            })
    }

    /// Highlights `code` using the grammar named by `language`.
    ///
    /// `language` is matched against syntect's extensions and grammar names;
    /// unknown languages use the diff grammar.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::NoSyntaxFound`] when neither the language
    /// nor the diff grammar is available, or
    /// [`HighlightError::HighlightFailed`] if syntect fails.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = self.find_syntax(language)?;
        let theme = self
            .theme_set
            .themes
            .get(THEME_NAME)
            .or_else(|| self.theme_set.themes.values().next())
            .ok_or_else(|| HighlightError::HighlightFailed {
                message: "no theme available".to_owned(),
            })?;

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .map_err(|error| HighlightError::HighlightFailed {
                    message: error.to_string(),
                })?;
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }

        let mut highlighted = output.trim_end_matches('\n').to_owned();
        highlighted.push_str(ANSI_RESET);
        Ok(highlighted)
    }

    fn find_syntax(&self, language: &str) -> Result<&SyntaxReference, HighlightError> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_token(DIFF_LANGUAGE))
            .ok_or_else(|| HighlightError::NoSyntaxFound {
                language: language.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{CodeHighlighter, language_hint};

    #[fixture]
    fn highlighter() -> CodeHighlighter {
        CodeHighlighter::new()
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                chars.by_ref().find(|&next| next == 'm');
            } else {
                plain.push(ch);
            }
        }
        plain
    }

    #[rstest]
    #[case::rust("src/main.rs", "rs")]
    #[case::nested_dots("web/app.test.ts", "ts")]
    #[case::no_extension("Dockerfile", "diff")]
    #[case::hidden_file(".gitignore", "diff")]
    fn language_hint_uses_extension_or_diff(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(language_hint(path), expected);
    }

    #[rstest]
    fn highlight_emits_ansi_codes_and_resets(highlighter: CodeHighlighter) {
        let output = highlighter
            .highlight("fn main() {}\n", "rs")
            .expect("rust should highlight");

        assert!(output.contains("\x1b["), "expected ANSI escapes in {output:?}");
        assert!(output.ends_with("\x1b[0m"), "output should reset styles");
        assert_eq!(strip_ansi(&output), "fn main() {}");
    }

    #[rstest]
    fn unknown_languages_fall_back_to_diff(highlighter: CodeHighlighter) {
        let output = highlighter
            .highlight("@@ -1 +1 @@\n-old\n+new", "no-such-language")
            .expect("diff grammar should be used");

        assert_eq!(strip_ansi(&output), "@@ -1 +1 @@\n-old\n+new");
    }

    #[rstest]
    fn highlight_or_plain_keeps_every_line(highlighter: CodeHighlighter) {
        let hunk = "@@ -1,2 +1,2 @@\n-let a = 1;\n+let a = 2;";

        let output = highlighter.highlight_or_plain(hunk, "src/lib.rs");

        assert_eq!(strip_ansi(&output), hunk);
    }
}
